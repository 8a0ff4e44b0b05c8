use chrono::{DateTime, Utc};
use indexmap::IndexSet;

use super::PriorityInterval;
use crate::question::{QuestionBank, QuestionId};

/// A named bucket of questions sharing a minimum re-ask delay.
///
/// Members are kept in insertion order, which is the tie-break between
/// questions last asked at the same instant (or never asked).
/// Cross-box uniqueness is the [`BoxManager`](super::BoxManager)'s job.
#[derive(Debug, Clone)]
pub struct ReviewBox {
    name: String,
    interval: PriorityInterval,
    members: IndexSet<QuestionId>,
}

impl ReviewBox {
    pub fn new(name: impl Into<String>, interval: PriorityInterval) -> Self {
        Self {
            name: name.into(),
            interval,
            members: IndexSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn interval(&self) -> PriorityInterval {
        self.interval
    }

    /// Insert at the end of the order. Returns `false` if already present.
    pub fn add_question(&mut self, id: QuestionId) -> bool {
        self.members.insert(id)
    }

    /// Remove, keeping the order of the remaining members. Returns `false`
    /// if the question was not here.
    pub fn remove_question(&mut self, id: QuestionId) -> bool {
        self.members.shift_remove(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.members.iter().copied()
    }

    /// The longest-waiting member, if it has waited at least the interval.
    ///
    /// Elapsed time is monotone in `last_asked`, so if the oldest member is
    /// not yet eligible no other member is either.
    pub fn next_priority_question(
        &self,
        bank: &QuestionBank,
        now: DateTime<Utc>,
    ) -> Option<QuestionId> {
        self.next_priority_question_where(bank, now, |_| true)
    }

    /// Same as [`ReviewBox::next_priority_question`], considering only
    /// members for which `keep` returns `true`.
    pub fn next_priority_question_where(
        &self,
        bank: &QuestionBank,
        now: DateTime<Utc>,
        keep: impl Fn(QuestionId) -> bool,
    ) -> Option<QuestionId> {
        if self.interval == PriorityInterval::Never {
            return None;
        }
        // min_by_key keeps the first of equal keys: insertion order wins ties.
        let oldest = self
            .members
            .iter()
            .filter(|id| keep(**id))
            .filter_map(|id| bank.get(*id))
            .min_by_key(|q| q.last_asked())?;

        self.interval
            .is_eligible(oldest.elapsed_since_asked(now))
            .then(|| oldest.id())
    }
}
