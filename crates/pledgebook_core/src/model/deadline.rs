//! Deadline record.
//!
//! # Responsibility
//! - Hold the frozen completion deadline attached to an objective.
//!
//! # Invariants
//! - `target_point` is computed once at `schedule` time as
//!   counter + offset and never re-derived.
//! - `alert_activated` starts false on every (re)schedule; nothing in core
//!   flips it (the flag is passive, alert delivery is out of scope).

use serde::{Deserialize, Serialize};

/// Completion deadline for one address, created-or-overwritten by
/// `schedule`. There is no delete path; rows persist until overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRecord {
    /// Absolute block-counter value the objective should be done by.
    pub target_point: u64,
    /// Passive flag reserved for an external alerting layer.
    pub alert_activated: bool,
}

impl DeadlineRecord {
    /// Creates a deadline at an absolute counter point, alert flag down.
    pub fn at(target_point: u64) -> Self {
        Self {
            target_point,
            alert_activated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DeadlineRecord;

    #[test]
    fn new_deadline_starts_with_alert_down() {
        let deadline = DeadlineRecord::at(42);
        assert_eq!(deadline.target_point, 42);
        assert!(!deadline.alert_activated);
    }
}
