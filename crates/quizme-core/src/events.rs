use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::QuestionId;
use crate::review::BoxLevel;
use crate::session::SessionOutcome;

/// Every scheduling state change produces an Event.
/// Observers receive them synchronously, after the change is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    QuestionAdded {
        question_id: QuestionId,
        level: BoxLevel,
        at: DateTime<Utc>,
    },
    QuestionMoved {
        question_id: QuestionId,
        from: BoxLevel,
        to: BoxLevel,
        answered_correctly: bool,
        /// Occupancy of every box after the move.
        counts: Vec<BoxCount>,
        at: DateTime<Utc>,
    },
    SessionEnded {
        outcome: SessionOutcome,
        asked: usize,
        at: DateTime<Utc>,
    },
}

/// Number of questions in one box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCount {
    pub level: BoxLevel,
    pub name: String,
    pub count: usize,
}

impl fmt::Display for BoxCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} questions", self.name, self.count)
    }
}

/// Hook invoked after every scheduling state change.
pub trait EventObserver {
    fn on_event(&mut self, event: &Event);
}

/// Default observer: structured `tracing` output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl EventObserver for TracingObserver {
    fn on_event(&mut self, event: &Event) {
        match event {
            Event::QuestionAdded {
                question_id, level, ..
            } => {
                tracing::trace!(%question_id, ?level, "question added");
            }
            Event::QuestionMoved {
                question_id,
                from,
                to,
                answered_correctly,
                counts,
                ..
            } => {
                tracing::debug!(
                    %question_id,
                    ?from,
                    ?to,
                    answered_correctly,
                    "question moved"
                );
                for count in counts {
                    tracing::debug!(box_name = %count.name, count = count.count, "box occupancy");
                }
            }
            Event::SessionEnded { outcome, asked, .. } => {
                tracing::info!(?outcome, asked, "session ended");
            }
        }
    }
}

/// Observer that keeps every event; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventObserver for RecordingObserver {
    fn on_event(&mut self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_observer_clones_share_buffer() {
        let recorder = RecordingObserver::new();
        let mut handle = recorder.clone();
        handle.on_event(&Event::QuestionAdded {
            question_id: QuestionId::new(),
            level: BoxLevel::Unasked,
            at: Utc::now(),
        });
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn events_serialize_with_type_tag() {
        let event = Event::QuestionMoved {
            question_id: QuestionId::new(),
            from: BoxLevel::Unasked,
            to: BoxLevel::AnsweredOnce,
            answered_correctly: true,
            counts: vec![],
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "QuestionMoved");
        assert_eq!(json["to"], "answered_once");
    }

    #[test]
    fn box_count_display() {
        let count = BoxCount {
            level: BoxLevel::Missed,
            name: "Missed Questions".into(),
            count: 2,
        };
        assert_eq!(count.to_string(), "Missed Questions: 2 questions");
    }
}
