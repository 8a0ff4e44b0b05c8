//! Question types.
//!
//! A [`Question`] carries the state every kind shares (identity, prompt text,
//! last-asked time) and a [`QuestionKind`] holding the variant-specific
//! answer and checking rules. Dispatch is a `match` over the closed enum;
//! a new kind of question is a new variant.

mod bank;
mod loader;
mod short_answer;
mod true_false;

pub use bank::QuestionBank;
pub use loader::{load_questions, parse_questions, parse_record, LoadReport, SkippedRecord};
pub use short_answer::ShortAnswer;
pub use true_false::TrueFalse;

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AnswerError;

/// Stable identity of a question for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(Uuid);

impl QuestionId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for QuestionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Variant-specific data and answer rules.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    #[serde(rename = "shortanswer")]
    ShortAnswer(ShortAnswer),
    #[serde(rename = "truefalse")]
    TrueFalse(TrueFalse),
}

impl QuestionKind {
    /// The record discriminator used in question files.
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::ShortAnswer(_) => "shortanswer",
            QuestionKind::TrueFalse(_) => "truefalse",
        }
    }
}

/// A quiz question.
///
/// Equality and hashing use the identifier only: two questions with the same
/// text are still different questions, and a `ShortAnswer` never equals a
/// `TrueFalse`.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    #[serde(rename = "question")]
    text: String,
    /// `None` means never asked, which sorts before every real timestamp.
    last_asked: Option<DateTime<Utc>>,
    #[serde(flatten)]
    kind: QuestionKind,
}

impl Question {
    pub fn new(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: QuestionId::new(),
            text: text.into(),
            last_asked: None,
            kind,
        }
    }

    pub fn short_answer(
        text: impl Into<String>,
        answer: impl Into<String>,
        case_sensitive: bool,
    ) -> Self {
        Self::new(
            text,
            QuestionKind::ShortAnswer(ShortAnswer::new(answer, case_sensitive)),
        )
    }

    pub fn true_false(text: impl Into<String>, answer: bool, explanation: Option<String>) -> Self {
        Self::new(text, QuestionKind::TrueFalse(TrueFalse::new(answer, explanation)))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn last_asked(&self) -> Option<DateTime<Utc>> {
        self.last_asked
    }

    /// Time since the question was last presented, or `None` if it never was.
    pub fn elapsed_since_asked(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.last_asked.map(|at| now - at)
    }

    // ── Capabilities ─────────────────────────────────────────────────

    /// Mark the question as asked now and return its display text.
    ///
    /// This mutates the question: the last-asked timestamp is what the box
    /// scheduler orders on.
    pub fn present(&mut self) -> String {
        self.present_at(Utc::now())
    }

    /// Same as [`Question::present`] with an explicit timestamp.
    pub fn present_at(&mut self, now: DateTime<Utc>) -> String {
        self.last_asked = Some(now);
        match &self.kind {
            QuestionKind::ShortAnswer(_) => self.text.clone(),
            QuestionKind::TrueFalse(_) => format!("{} (True/False)", self.text),
        }
    }

    /// Evaluate a raw response.
    ///
    /// Returns `Err` only when the response cannot be interpreted for this
    /// kind of question; a well-formed wrong answer is `Ok(false)`.
    pub fn check_answer(&self, raw: &str) -> Result<bool, AnswerError> {
        match &self.kind {
            QuestionKind::ShortAnswer(sa) => Ok(sa.check(raw)),
            QuestionKind::TrueFalse(tf) => tf.check(raw),
        }
    }

    pub fn incorrect_feedback(&self) -> String {
        match &self.kind {
            QuestionKind::ShortAnswer(sa) => sa.incorrect_feedback(),
            QuestionKind::TrueFalse(tf) => tf.incorrect_feedback(),
        }
    }
}

impl PartialEq for Question {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Question {}

impl Hash for Question {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
