//! Integration tests for loading question files from disk.

use quizme_core::{load_questions, LoadError, QuestionKind, RecordError};

#[test]
fn loads_file_and_skips_bad_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(
        &path,
        r#"[
            {"type": "shortanswer", "question": "Capital of France?", "correct_answer": "Paris"},
            {"type": "shortanswer", "question": "Symbol for sodium?", "correct_answer": "Na",
             "case_sensitive": true},
            {"type": "truefalse", "question": "Water boils at 90C at sea level", "correct_answer": false,
             "explanation": "It boils at 100C."},
            {"type": "matching", "question": "Match them", "correct_answer": "a-1"},
            {"type": "truefalse", "correct_answer": true}
        ]"#,
    )
    .unwrap();

    let report = load_questions(&path).unwrap();
    assert_eq!(report.questions.len(), 3);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].index, 3);
    assert_eq!(
        report.skipped[0].reason,
        RecordError::UnsupportedType("matching".into())
    );
    assert_eq!(report.skipped[1].reason, RecordError::MissingField("question"));

    let kinds: Vec<_> = report
        .questions
        .iter()
        .map(|q| q.kind().type_name())
        .collect();
    assert_eq!(kinds, vec!["shortanswer", "shortanswer", "truefalse"]);
    assert!(matches!(report.questions[2].kind(), QuestionKind::TrueFalse(tf) if !tf.answer));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_questions(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound { .. }));
    assert!(err.to_string().contains("Question file not found"));
}

#[test]
fn invalid_json_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"type\": ").unwrap();
    let err = load_questions(&path).unwrap_err();
    assert!(matches!(err, LoadError::InvalidJson(_)));
}

#[test]
fn empty_array_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();
    let report = load_questions(&path).unwrap();
    assert!(report.questions.is_empty());
    assert!(report.skipped.is_empty());
}
