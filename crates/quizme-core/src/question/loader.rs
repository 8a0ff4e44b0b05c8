//! Question file loading.
//!
//! A question file is a JSON array of records:
//!
//! ```json
//! [
//!   { "type": "shortanswer", "question": "2+2?", "correct_answer": "4", "case_sensitive": false },
//!   { "type": "truefalse", "question": "Sky is blue", "correct_answer": true, "explanation": "..." }
//! ]
//! ```
//!
//! Bad records are skipped with a warning and listed in the [`LoadReport`];
//! only an unreadable file or a non-array top level fails the whole load.

use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::Question;
use crate::error::{LoadError, RecordError};

/// Outcome of loading a batch of records.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub questions: Vec<Question>,
    pub skipped: Vec<SkippedRecord>,
}

impl LoadReport {
    pub fn total_records(&self) -> usize {
        self.questions.len() + self.skipped.len()
    }
}

/// A record that was not turned into a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the source array (0-based).
    pub index: usize,
    #[serde(serialize_with = "serialize_display")]
    pub reason: RecordError,
}

fn serialize_display<S: Serializer>(err: &RecordError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// Read and parse a question file.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable, is not valid
/// JSON, or its top level is not an array.
pub fn load_questions(path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loading question file");
    parse_questions(&content)
}

/// Parse question records from a JSON string.
pub fn parse_questions(json: &str) -> Result<LoadReport, LoadError> {
    let root: Value = serde_json::from_str(json)?;
    let records = match root {
        Value::Array(records) => records,
        other => {
            return Err(LoadError::NotAnArray {
                found: json_type_name(&other),
            })
        }
    };

    let mut report = LoadReport::default();
    for (index, record) in records.iter().enumerate() {
        match parse_record(record) {
            Ok(question) => report.questions.push(question),
            Err(reason) => {
                tracing::warn!(index, %reason, "Skipping this question.");
                report.skipped.push(SkippedRecord { index, reason });
            }
        }
    }
    Ok(report)
}

/// Build one question from one record.
pub fn parse_record(record: &Value) -> Result<Question, RecordError> {
    let obj = record.as_object().ok_or(RecordError::NotAnObject)?;

    let kind = match obj.get("type") {
        None | Some(Value::Null) => return Err(RecordError::MissingField("type")),
        Some(Value::String(kind)) => kind.as_str(),
        Some(_) => {
            return Err(RecordError::InvalidField {
                field: "type",
                expected: "a string",
            })
        }
    };

    match kind {
        "shortanswer" => {
            let text = required_str(obj, "question")?;
            let answer = match required(obj, "correct_answer")? {
                Value::String(s) => s.clone(),
                // Numeric answers are common in hand-written files ("2+2?" -> 4).
                Value::Number(n) => n.to_string(),
                _ => {
                    return Err(RecordError::InvalidField {
                        field: "correct_answer",
                        expected: "a string",
                    })
                }
            };
            let case_sensitive = optional_bool(obj, "case_sensitive")?.unwrap_or(false);
            Ok(Question::short_answer(text, answer, case_sensitive))
        }
        "truefalse" => {
            let text = required_str(obj, "question")?;
            let answer = required(obj, "correct_answer")?
                .as_bool()
                .ok_or(RecordError::InvalidField {
                    field: "correct_answer",
                    expected: "a boolean",
                })?;
            let explanation = optional_str(obj, "explanation")?;
            Ok(Question::true_false(text, answer, explanation))
        }
        other => Err(RecordError::UnsupportedType(other.to_string())),
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(RecordError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn required_str(obj: &Map<String, Value>, field: &'static str) -> Result<String, RecordError> {
    required(obj, field)?
        .as_str()
        .map(str::to_string)
        .ok_or(RecordError::InvalidField {
            field,
            expected: "a string",
        })
}

fn optional_str(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: "a string",
        }),
    }
}

fn optional_bool(obj: &Map<String, Value>, field: &'static str) -> Result<Option<bool>, RecordError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(RecordError::InvalidField {
            field,
            expected: "a boolean",
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
