//! Box manager: the five-box ladder and the question location index.
//!
//! The manager never owns question data. It tracks which box each
//! [`QuestionId`] sits in and reads last-asked times from the
//! [`QuestionBank`] at selection time.
//!
//! ## Usage
//!
//! ```ignore
//! let mut manager = BoxManager::new();
//! let id = bank.insert(question);
//! manager.add_new_question(id);
//! while let Some(id) = manager.next_question(&bank, Utc::now()) {
//!     // present, check ...
//!     manager.move_question(id, correct)?;
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BoxLevel, LadderConfig, ReviewBox};
use crate::error::SchedulerError;
use crate::events::{BoxCount, Event, EventObserver, TracingObserver};
use crate::question::{QuestionBank, QuestionId};

/// Record of one move, returned by [`BoxManager::move_question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub question_id: QuestionId,
    pub from: BoxLevel,
    pub to: BoxLevel,
    pub answered_correctly: bool,
}

impl Transition {
    pub fn is_promotion(&self) -> bool {
        self.to > self.from
    }
}

pub struct BoxManager {
    /// Indexed by `BoxLevel::index()`.
    boxes: [ReviewBox; 5],
    locations: HashMap<QuestionId, BoxLevel>,
    observer: Box<dyn EventObserver>,
}

impl BoxManager {
    /// Create the default ladder (60s / 0s / 180s / 360s / never).
    pub fn new() -> Self {
        Self::with_ladder(&LadderConfig::default())
    }

    pub fn with_ladder(ladder: &LadderConfig) -> Self {
        let boxes = BoxLevel::ALL.map(|level| ReviewBox::new(level.name(), ladder.interval(level)));
        Self {
            boxes,
            locations: HashMap::new(),
            observer: Box::new(TracingObserver),
        }
    }

    /// Replace the observer notified after every add and move.
    pub fn with_observer(mut self, observer: impl EventObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Forward an event that did not originate here (e.g. session end) to
    /// the observer.
    pub fn notify(&mut self, event: &Event) {
        self.observer.on_event(event);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn boxes(&self) -> &[ReviewBox] {
        &self.boxes
    }

    pub fn box_at(&self, level: BoxLevel) -> &ReviewBox {
        &self.boxes[level.index()]
    }

    /// Current box of a question, if tracked.
    pub fn location(&self, id: QuestionId) -> Option<BoxLevel> {
        self.locations.get(&id).copied()
    }

    /// Number of tracked questions.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Questions not yet in the Known box.
    pub fn pending_count(&self) -> usize {
        self.len() - self.box_at(BoxLevel::Known).len()
    }

    pub fn box_counts(&self) -> Vec<BoxCount> {
        BoxLevel::ALL
            .iter()
            .map(|&level| {
                let b = self.box_at(level);
                BoxCount {
                    level,
                    name: b.name().to_string(),
                    count: b.len(),
                }
            })
            .collect()
    }

    /// Check that every tracked question is in exactly the box the location
    /// index names, and that no box holds an untracked question.
    pub fn is_consistent(&self) -> bool {
        let members: usize = self.boxes.iter().map(ReviewBox::len).sum();
        if members != self.locations.len() {
            return false;
        }
        self.locations.iter().all(|(id, level)| {
            BoxLevel::ALL
                .iter()
                .all(|&other| self.box_at(other).contains(*id) == (other == *level))
        })
    }

    /// Pick the next question to present.
    ///
    /// Boxes are scanned in ladder order (Missed, Unasked, Answered Once,
    /// Answered Twice); Known is never scanned. The first box with an
    /// eligible question wins, so box order encodes priority.
    pub fn next_question(&self, bank: &QuestionBank, now: DateTime<Utc>) -> Option<QuestionId> {
        self.next_question_where(bank, now, |_| true)
    }

    /// [`BoxManager::next_question`] restricted to questions for which
    /// `keep` returns `true`. Boxes keep their priority order.
    pub fn next_question_where(
        &self,
        bank: &QuestionBank,
        now: DateTime<Utc>,
        keep: impl Fn(QuestionId) -> bool,
    ) -> Option<QuestionId> {
        BoxLevel::SERVED.iter().find_map(|&level| {
            self.box_at(level)
                .next_priority_question_where(bank, now, &keep)
        })
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Place a new question in the Unasked box.
    ///
    /// Returns `false` and changes nothing if the question is already
    /// tracked, so a question can never end up in two boxes.
    pub fn add_new_question(&mut self, id: QuestionId) -> bool {
        if self.locations.contains_key(&id) {
            return false;
        }
        let level = BoxLevel::Unasked;
        self.boxes[level.index()].add_question(id);
        self.locations.insert(id, level);
        self.observer.on_event(&Event::QuestionAdded {
            question_id: id,
            level,
            at: Utc::now(),
        });
        true
    }

    /// Route a question after it was answered.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulerError::UnknownQuestion`] if the question was never
    /// added. Nothing is modified in that case.
    pub fn move_question(
        &mut self,
        id: QuestionId,
        answered_correctly: bool,
    ) -> Result<Transition, SchedulerError> {
        let from = self
            .location(id)
            .ok_or(SchedulerError::UnknownQuestion(id))?;
        let to = from.after_answer(answered_correctly);

        self.boxes[from.index()].remove_question(id);
        self.boxes[to.index()].add_question(id);
        self.locations.insert(id, to);

        let transition = Transition {
            question_id: id,
            from,
            to,
            answered_correctly,
        };
        let counts = self.box_counts();
        self.observer.on_event(&Event::QuestionMoved {
            question_id: id,
            from,
            to,
            answered_correctly,
            counts,
            at: Utc::now(),
        });
        Ok(transition)
    }
}

impl Default for BoxManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoxManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxManager")
            .field("boxes", &self.boxes)
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}
