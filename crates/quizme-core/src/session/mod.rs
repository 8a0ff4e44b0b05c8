//! Session controller.
//!
//! Drives the request/answer loop: ask the [`BoxManager`] for the next
//! question, present it through the [`Prompter`], check the response and
//! route the outcome back. The loop is synchronous; the only blocking point
//! is the prompter waiting for input.
//!
//! ## Flow
//!
//! ```text
//! next_question -> None            => Completed
//!               -> Some(q) -> present -> ask -> quit sentinel / EOF => Quit
//!                                         -> invalid format          => reprompt
//!                                         -> right / wrong           => move_question
//! ```

mod clock;
mod prompter;

pub use clock::{Clock, ManualClock, SystemClock};
pub use prompter::{LinePrompter, Prompter};

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SchedulerError, SessionError};
use crate::events::{BoxCount, Event};
use crate::question::{Question, QuestionBank, QuestionId};
use crate::review::{BoxManager, Transition};

pub const ANSWER_PROMPT: &str = "Your answer: ";

/// Session behaviour knobs (the `[session]` config table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Case-insensitive response that ends the session.
    #[serde(default = "default_quit_command")]
    pub quit_command: String,
    /// Print box occupancy after every answer.
    #[serde(default)]
    pub show_box_counts: bool,
    /// Unparseable responses tolerated per presentation before the question
    /// is set aside unmoved. 0 reprompts forever. A set-aside question is
    /// passed over until another question has been answered, or until
    /// nothing else is eligible.
    #[serde(default)]
    pub max_invalid_attempts: u32,
}

fn default_quit_command() -> String {
    "q".into()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quit_command: default_quit_command(),
            show_box_counts: false,
            max_invalid_attempts: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOutcome {
    /// No question was eligible.
    Completed,
    /// The user entered the quit command or input ran out.
    Quit,
}

/// Result of a single loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Answered(Transition),
    /// Too many unparseable responses; the question was left where it was.
    SetAside(QuestionId),
    Finished(SessionOutcome),
}

/// Summary handed back when the loop ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    /// Number of presentations, including repeats of the same question.
    pub asked: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub invalid_responses: usize,
    /// Questions not in the Known box when the session ended.
    pub remaining: usize,
    pub counts: Vec<BoxCount>,
}

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    asked: usize,
    correct: usize,
    incorrect: usize,
    invalid_responses: usize,
}

pub struct Session<P, C = SystemClock> {
    bank: QuestionBank,
    manager: BoxManager,
    prompter: P,
    clock: C,
    config: SessionConfig,
    tally: Tally,
    set_aside: HashSet<QuestionId>,
}

impl<P: Prompter> Session<P, SystemClock> {
    pub fn new(manager: BoxManager, prompter: P) -> Self {
        Self::with_clock(manager, prompter, SystemClock)
    }
}

impl<P: Prompter, C: Clock> Session<P, C> {
    pub fn with_clock(manager: BoxManager, prompter: P, clock: C) -> Self {
        Self {
            bank: QuestionBank::new(),
            manager,
            prompter,
            clock,
            config: SessionConfig::default(),
            tally: Tally::default(),
            set_aside: HashSet::new(),
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a question and put it in the Unasked box.
    pub fn add_question(&mut self, question: Question) -> QuestionId {
        let id = self.bank.insert(question);
        self.manager.add_new_question(id);
        id
    }

    pub fn add_questions(&mut self, questions: impl IntoIterator<Item = Question>) {
        for question in questions {
            self.add_question(question);
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn manager(&self) -> &BoxManager {
        &self.manager
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Run until no question is eligible or the user quits.
    pub fn run(&mut self) -> Result<SessionReport, SessionError> {
        let hint = format!(
            "Type '{}' at any time to quit the session.",
            self.config.quit_command
        );
        self.prompter.show(&hint)?;

        let outcome = loop {
            if let Step::Finished(outcome) = self.step()? {
                break outcome;
            }
        };

        if outcome == SessionOutcome::Completed {
            self.prompter
                .show("All questions have been reviewed. Session complete!")?;
        }
        self.prompter.show("Thank you, goodbye!")?;

        self.manager.notify(&Event::SessionEnded {
            outcome,
            asked: self.tally.asked,
            at: self.clock.now(),
        });
        Ok(self.report(outcome))
    }

    /// One iteration of the loop: select, present, read, route.
    pub fn step(&mut self) -> Result<Step, SessionError> {
        let now = self.clock.now();
        let Some(id) = self.select(now) else {
            return Ok(Step::Finished(SessionOutcome::Completed));
        };
        let question = self
            .bank
            .get_mut(id)
            .ok_or(SchedulerError::NotInBank(id))?;

        let text = question.present_at(now);
        self.tally.asked += 1;
        self.prompter.show(&text)?;

        let mut invalid_attempts = 0u32;
        loop {
            let Some(raw) = self.prompter.ask(ANSWER_PROMPT)? else {
                return Ok(Step::Finished(SessionOutcome::Quit));
            };
            if is_quit(&self.config.quit_command, &raw) {
                return Ok(Step::Finished(SessionOutcome::Quit));
            }

            match question.check_answer(&raw) {
                Ok(correct) => {
                    if correct {
                        self.tally.correct += 1;
                        self.prompter.show("Correct!")?;
                    } else {
                        self.tally.incorrect += 1;
                        self.prompter.show(&question.incorrect_feedback())?;
                    }
                    let transition = self.manager.move_question(id, correct)?;
                    self.set_aside.clear();
                    if self.config.show_box_counts {
                        for count in self.manager.box_counts() {
                            self.prompter.show(&count.to_string())?;
                        }
                    }
                    return Ok(Step::Answered(transition));
                }
                Err(err) => {
                    self.tally.invalid_responses += 1;
                    invalid_attempts += 1;
                    tracing::debug!(question_id = %id, %err, "unparseable response");
                    self.prompter.show(&err.to_string())?;

                    let limit = self.config.max_invalid_attempts;
                    if limit > 0 && invalid_attempts >= limit {
                        self.set_aside.insert(id);
                        self.prompter.show("Skipping this question for now.")?;
                        return Ok(Step::SetAside(id));
                    }
                }
            }
        }
    }

    /// Next question, passing over set-aside ones while anything else is
    /// eligible.
    fn select(&mut self, now: DateTime<Utc>) -> Option<QuestionId> {
        let set_aside = &self.set_aside;
        let next = self
            .manager
            .next_question_where(&self.bank, now, |id| !set_aside.contains(&id));
        if next.is_some() || self.set_aside.is_empty() {
            return next;
        }
        self.set_aside.clear();
        self.manager.next_question(&self.bank, now)
    }

    pub fn report(&self, outcome: SessionOutcome) -> SessionReport {
        SessionReport {
            outcome,
            asked: self.tally.asked,
            correct: self.tally.correct,
            incorrect: self.tally.incorrect,
            invalid_responses: self.tally.invalid_responses,
            remaining: self.manager.pending_count(),
            counts: self.manager.box_counts(),
        }
    }
}

fn is_quit(quit_command: &str, raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(quit_command.trim())
}
