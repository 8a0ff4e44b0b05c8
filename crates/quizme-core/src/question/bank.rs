use indexmap::IndexMap;

use super::{Question, QuestionId};

/// Owns every question of a session, in load order.
///
/// Boxes and the location index only hold [`QuestionId`]s; this is the one
/// place a question's data lives.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: IndexMap<QuestionId, Question>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a question and return its id. Re-inserting the same id
    /// replaces the stored data but keeps its original position.
    pub fn insert(&mut self, question: Question) -> QuestionId {
        let id = question.id();
        self.questions.insert(id, question);
        id
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    pub fn get_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.get_mut(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.questions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        let mut bank = Self::new();
        for question in iter {
            bank.insert(question);
        }
        bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_load_order() {
        let questions = vec![
            Question::short_answer("one", "1", false),
            Question::true_false("two", true, None),
            Question::short_answer("three", "3", false),
        ];
        let expected: Vec<_> = questions.iter().map(Question::id).collect();
        let bank: QuestionBank = questions.into_iter().collect();

        assert_eq!(bank.len(), 3);
        assert_eq!(bank.ids().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut bank = QuestionBank::new();
        let id = bank.insert(Question::short_answer("q", "a", false));
        let now = chrono::Utc::now();
        bank.get_mut(id).map(|q| q.present_at(now));
        assert_eq!(bank.get(id).and_then(Question::last_asked), Some(now));
        assert!(!bank.contains(QuestionId::new()));
    }
}
