use serde::{Deserialize, Serialize};

use crate::error::AnswerError;

/// True/false question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrueFalse {
    #[serde(rename = "correct_answer")]
    pub answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TrueFalse {
    pub fn new(answer: bool, explanation: Option<String>) -> Self {
        // An empty explanation is the same as none.
        let explanation = explanation.filter(|e| !e.trim().is_empty());
        Self {
            answer,
            explanation,
        }
    }

    /// Parse a response token. Accepts `true`/`t`/`false`/`f` in any case.
    pub fn parse_response(raw: &str) -> Result<bool, AnswerError> {
        match raw.trim().to_lowercase().as_str() {
            "true" | "t" => Ok(true),
            "false" | "f" => Ok(false),
            _ => Err(AnswerError::InvalidFormat {
                input: raw.to_string(),
            }),
        }
    }

    pub fn check(&self, raw: &str) -> Result<bool, AnswerError> {
        Ok(Self::parse_response(raw)? == self.answer)
    }

    pub fn incorrect_feedback(&self) -> String {
        match &self.explanation {
            Some(explanation) => format!("Incorrect. {explanation}"),
            None => "Incorrect.".to_string(),
        }
    }
}
