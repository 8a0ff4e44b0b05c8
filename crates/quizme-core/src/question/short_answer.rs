use serde::{Deserialize, Serialize};

/// Free-text question compared after normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortAnswer {
    #[serde(rename = "correct_answer")]
    pub answer: String,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl ShortAnswer {
    pub fn new(answer: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            answer: answer.into(),
            case_sensitive,
        }
    }

    /// Trim, lower-case unless case-sensitive, then drop everything that is
    /// not a word character or whitespace.
    ///
    /// Stripping happens after the trim, so whitespace left next to removed
    /// punctuation ("Paris .") is significant.
    pub fn normalize(&self, text: &str) -> String {
        let text = text.trim();
        let text = if self.case_sensitive {
            text.to_string()
        } else {
            text.to_lowercase()
        };
        text.chars()
            .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            .collect()
    }

    pub fn check(&self, raw: &str) -> bool {
        self.normalize(raw) == self.normalize(&self.answer)
    }

    pub fn incorrect_feedback(&self) -> String {
        format!("Incorrect. The correct answer is: {}", self.answer)
    }
}
