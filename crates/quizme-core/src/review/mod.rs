//! Leitner-box scheduling.
//!
//! ## Ladder
//!
//! ```text
//! idx  box                        interval
//! 0    Missed Questions           60s
//! 1    Unasked Questions          0s
//! 2    Correctly Answered Once    180s
//! 3    Correctly Answered Twice   360s
//! 4    Known Questions            never re-served
//! ```
//!
//! ## Transitions
//!
//! ```text
//! wrong          : any -> Missed
//! right, Missed  : Missed -> AnsweredOnce
//! right, other   : i -> min(i + 1, Known)
//! ```

mod manager;
mod review_box;

pub use manager::{BoxManager, Transition};
pub use review_box::ReviewBox;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Position of a box on the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxLevel {
    Missed,
    Unasked,
    AnsweredOnce,
    AnsweredTwice,
    Known,
}

impl BoxLevel {
    /// All levels in ladder order.
    pub const ALL: [BoxLevel; 5] = [
        BoxLevel::Missed,
        BoxLevel::Unasked,
        BoxLevel::AnsweredOnce,
        BoxLevel::AnsweredTwice,
        BoxLevel::Known,
    ];

    /// Levels `next_question` scans, in priority order. Known is terminal.
    pub const SERVED: [BoxLevel; 4] = [
        BoxLevel::Missed,
        BoxLevel::Unasked,
        BoxLevel::AnsweredOnce,
        BoxLevel::AnsweredTwice,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BoxLevel::Missed => "Missed Questions",
            BoxLevel::Unasked => "Unasked Questions",
            BoxLevel::AnsweredOnce => "Correctly Answered Once",
            BoxLevel::AnsweredTwice => "Correctly Answered Twice",
            BoxLevel::Known => "Known Questions",
        }
    }

    /// Where a question sitting in `self` goes after an answer.
    pub fn after_answer(self, answered_correctly: bool) -> BoxLevel {
        if !answered_correctly {
            return BoxLevel::Missed;
        }
        match self {
            // A missed question is no longer "unasked".
            BoxLevel::Missed => BoxLevel::AnsweredOnce,
            BoxLevel::Unasked => BoxLevel::AnsweredOnce,
            BoxLevel::AnsweredOnce => BoxLevel::AnsweredTwice,
            BoxLevel::AnsweredTwice | BoxLevel::Known => BoxLevel::Known,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == BoxLevel::Known
    }
}

/// Minimum idle time before a question in a box is eligible again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityInterval {
    After(Duration),
    Never,
}

impl PriorityInterval {
    pub fn seconds(secs: i64) -> Self {
        PriorityInterval::After(Duration::seconds(secs))
    }

    /// `elapsed` is `None` for a question that was never asked, which counts
    /// as having waited forever.
    pub fn is_eligible(&self, elapsed: Option<Duration>) -> bool {
        match (self, elapsed) {
            (PriorityInterval::Never, _) => false,
            (PriorityInterval::After(_), None) => true,
            (PriorityInterval::After(min), Some(elapsed)) => elapsed >= *min,
        }
    }
}

/// Interval overrides for the four served boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    #[serde(default = "default_missed_secs")]
    pub missed_secs: u64,
    #[serde(default)]
    pub unasked_secs: u64,
    #[serde(default = "default_answered_once_secs")]
    pub answered_once_secs: u64,
    #[serde(default = "default_answered_twice_secs")]
    pub answered_twice_secs: u64,
}

fn default_missed_secs() -> u64 {
    60
}
fn default_answered_once_secs() -> u64 {
    180
}
fn default_answered_twice_secs() -> u64 {
    360
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            missed_secs: default_missed_secs(),
            unasked_secs: 0,
            answered_once_secs: default_answered_once_secs(),
            answered_twice_secs: default_answered_twice_secs(),
        }
    }
}

impl LadderConfig {
    pub fn interval(&self, level: BoxLevel) -> PriorityInterval {
        let secs = match level {
            BoxLevel::Missed => self.missed_secs,
            BoxLevel::Unasked => self.unasked_secs,
            BoxLevel::AnsweredOnce => self.answered_once_secs,
            BoxLevel::AnsweredTwice => self.answered_twice_secs,
            BoxLevel::Known => return PriorityInterval::Never,
        };
        // chrono durations top out at i64::MAX milliseconds
        let max_secs = (i64::MAX / 1000) as u64;
        PriorityInterval::seconds(secs.min(max_secs) as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_answer_always_demotes_to_missed() {
        for level in BoxLevel::ALL {
            assert_eq!(level.after_answer(false), BoxLevel::Missed, "from {level:?}");
        }
    }

    #[test]
    fn right_answer_promotes_one_rung() {
        assert_eq!(BoxLevel::Missed.after_answer(true), BoxLevel::AnsweredOnce);
        assert_eq!(BoxLevel::Unasked.after_answer(true), BoxLevel::AnsweredOnce);
        assert_eq!(BoxLevel::AnsweredOnce.after_answer(true), BoxLevel::AnsweredTwice);
        assert_eq!(BoxLevel::AnsweredTwice.after_answer(true), BoxLevel::Known);
        assert_eq!(BoxLevel::Known.after_answer(true), BoxLevel::Known);
    }

    #[test]
    fn index_roundtrip() {
        for (i, level) in BoxLevel::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(BoxLevel::from_index(i), Some(*level));
        }
        assert_eq!(BoxLevel::from_index(5), None);
    }

    #[test]
    fn served_levels_exclude_known() {
        assert!(!BoxLevel::SERVED.contains(&BoxLevel::Known));
        assert!(BoxLevel::Known.is_terminal());
    }

    #[test]
    fn eligibility() {
        let minute = PriorityInterval::seconds(60);
        assert!(minute.is_eligible(None));
        assert!(minute.is_eligible(Some(Duration::seconds(60))));
        assert!(!minute.is_eligible(Some(Duration::seconds(59))));

        let zero = PriorityInterval::seconds(0);
        assert!(zero.is_eligible(Some(Duration::zero())));

        assert!(!PriorityInterval::Never.is_eligible(None));
        assert!(!PriorityInterval::Never.is_eligible(Some(Duration::weeks(5200))));
    }

    #[test]
    fn default_ladder_intervals() {
        let ladder = LadderConfig::default();
        assert_eq!(ladder.interval(BoxLevel::Missed), PriorityInterval::seconds(60));
        assert_eq!(ladder.interval(BoxLevel::Unasked), PriorityInterval::seconds(0));
        assert_eq!(ladder.interval(BoxLevel::AnsweredOnce), PriorityInterval::seconds(180));
        assert_eq!(ladder.interval(BoxLevel::AnsweredTwice), PriorityInterval::seconds(360));
        assert_eq!(ladder.interval(BoxLevel::Known), PriorityInterval::Never);
    }
}
