//! # QuizMe Core Library
//!
//! This library provides the core logic of QuizMe, an adaptive quiz engine
//! built on a Leitner-box scheduler. It follows a CLI-first layout: the
//! `quizme` binary is a thin shell over the same types.
//!
//! ## Architecture
//!
//! - **Questions**: a closed set of question kinds with identity-based
//!   equality, owned by a [`QuestionBank`]
//! - **Review**: five [`ReviewBox`]es on a fixed ladder and the
//!   [`BoxManager`] state machine that routes answers between them
//! - **Session**: the request/answer loop, talking to the user through a
//!   [`Prompter`]
//! - **Storage**: TOML configuration (no quiz progress is persisted)
//!
//! ## Key Components
//!
//! - [`BoxManager`]: promotion/demotion state machine and question selection
//! - [`Session`]: drives one quiz session to completion or quit
//! - [`load_questions`]: tolerant JSON question loader
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod question;
pub mod review;
pub mod session;
pub mod storage;

pub use error::{
    AnswerError, ConfigError, LoadError, RecordError, SchedulerError, SessionError,
};
pub use events::{BoxCount, Event, EventObserver, RecordingObserver, TracingObserver};
pub use question::{
    load_questions, parse_questions, LoadReport, Question, QuestionBank, QuestionId, QuestionKind,
    SkippedRecord,
};
pub use review::{BoxLevel, BoxManager, LadderConfig, PriorityInterval, ReviewBox, Transition};
pub use session::{
    Clock, LinePrompter, ManualClock, Prompter, Session, SessionConfig, SessionOutcome,
    SessionReport, Step, SystemClock,
};
pub use storage::Config;
