//! Integration tests for the session loop with scripted input.

use std::io::Cursor;

use chrono::{Duration, Utc};
use quizme_core::{
    load_questions, BoxLevel, BoxManager, Config, Event, LinePrompter, ManualClock,
    RecordingObserver, Session, SessionOutcome, Step,
};

type ScriptedSession = Session<LinePrompter<Cursor<Vec<u8>>, Vec<u8>>, ManualClock>;

const QUESTIONS: &str = r#"[
    {"type": "shortanswer", "question": "2+2?", "correct_answer": "4"},
    {"type": "truefalse", "question": "Sky is blue", "correct_answer": true,
     "explanation": "Sunlight scatters off air molecules."},
    {"type": "essay", "question": "Discuss.", "correct_answer": "..."}
]"#;

fn scripted(input: &str, clock: ManualClock, manager: BoxManager) -> ScriptedSession {
    let prompter = LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.json");
    std::fs::write(&path, QUESTIONS).unwrap();
    let report = load_questions(&path).unwrap();
    assert_eq!(report.skipped.len(), 1);

    let mut session = Session::with_clock(manager, prompter, clock);
    session.add_questions(report.questions);
    session
}

fn transcript(session: ScriptedSession) -> String {
    String::from_utf8(session.into_prompter().into_inner().1).unwrap()
}

#[test]
fn scenario_completes_when_nothing_is_eligible() {
    let clock = ManualClock::new(Utc::now());
    let mut session = scripted("4\nfalse\n", clock, BoxManager::new());
    let report = session.run().unwrap();

    assert_eq!(report.outcome, SessionOutcome::Completed);
    assert_eq!(report.asked, 2);
    assert_eq!(report.correct, 1);
    assert_eq!(report.incorrect, 1);
    assert_eq!(report.remaining, 2);
    assert_eq!(report.counts[BoxLevel::Missed.index()].count, 1);
    assert_eq!(report.counts[BoxLevel::AnsweredOnce.index()].count, 1);

    let out = transcript(session);
    let expected_order = [
        "Type 'q' at any time to quit the session.",
        "2+2?",
        "Correct!",
        "Sky is blue (True/False)",
        "Incorrect. Sunlight scatters off air molecules.",
        "All questions have been reviewed. Session complete!",
        "Thank you, goodbye!",
    ];
    let mut cursor = 0;
    for line in expected_order {
        let found = out[cursor..]
            .find(line)
            .unwrap_or_else(|| panic!("missing {line:?} after byte {cursor} in:\n{out}"));
        cursor += found + line.len();
    }
}

#[test]
fn missed_question_returns_after_interval() {
    let clock = ManualClock::new(Utc::now());
    let mut session = scripted("4\nfalse\nt\n", clock.clone(), BoxManager::new());

    session.step().unwrap();
    session.step().unwrap();
    // Immediate poll: nothing eligible.
    assert!(matches!(
        session.step().unwrap(),
        Step::Finished(SessionOutcome::Completed)
    ));

    clock.advance(Duration::seconds(60));
    let step = session.step().unwrap();
    match step {
        Step::Answered(t) => {
            assert_eq!(t.from, BoxLevel::Missed);
            assert_eq!(t.to, BoxLevel::AnsweredOnce);
        }
        other => panic!("expected an answered step, got {other:?}"),
    }
}

#[test]
fn invalid_answer_is_not_scored() {
    let clock = ManualClock::new(Utc::now());
    let mut session = scripted("4\nblue\nq\n", clock, BoxManager::new());
    let report = session.run().unwrap();

    assert_eq!(report.outcome, SessionOutcome::Quit);
    assert_eq!(report.correct, 1);
    assert_eq!(report.incorrect, 0);
    assert_eq!(report.invalid_responses, 1);
    assert_eq!(report.counts[BoxLevel::Missed.index()].count, 0);
    assert_eq!(report.counts[BoxLevel::Unasked.index()].count, 1);
    assert!(transcript(session).contains("Answer must be 'True' or 'False'."));
}

#[test]
fn repeated_correct_answers_reach_known() {
    let clock = ManualClock::new(Utc::now());
    let mut session = scripted("4\nt\n4\ntrue\n 4 \nT\n", clock.clone(), BoxManager::new());

    for wait in [0, 180, 360] {
        clock.advance(Duration::seconds(wait));
        assert!(matches!(session.step().unwrap(), Step::Answered(_)));
        assert!(matches!(session.step().unwrap(), Step::Answered(_)));
        assert_eq!(
            session.step().unwrap(),
            Step::Finished(SessionOutcome::Completed)
        );
    }

    assert_eq!(session.manager().pending_count(), 0);
    assert_eq!(session.manager().box_at(BoxLevel::Known).len(), 2);

    clock.advance(Duration::days(365));
    assert_eq!(
        session.step().unwrap(),
        Step::Finished(SessionOutcome::Completed)
    );
}

#[test]
fn observer_sees_session_end() {
    let recorder = RecordingObserver::new();
    let clock = ManualClock::new(Utc::now());
    let manager = BoxManager::with_ladder(&Config::default().ladder).with_observer(recorder.clone());
    let mut session = scripted("q\n", clock, manager);
    session.run().unwrap();

    let events = recorder.events();
    let added = events
        .iter()
        .filter(|e| matches!(e, Event::QuestionAdded { .. }))
        .count();
    assert_eq!(added, 2);
    assert!(matches!(
        events.last(),
        Some(Event::SessionEnded {
            outcome: SessionOutcome::Quit,
            asked: 1,
            ..
        })
    ));
}
