//! Priority classification record.
//!
//! # Responsibility
//! - Hold the optional urgency rating attached to an objective.
//!
//! # Invariants
//! - `urgency` is inside `URGENCY_MIN..=URGENCY_MAX` whenever a record
//!   exists.
//! - A record may outlive the objective it was validated against; the
//!   stores carry no referential link (see `service` docs).

use serde::{Deserialize, Serialize};

use super::{validate, RecordValidationError};

/// Lowest accepted urgency rating.
pub const URGENCY_MIN: u8 = 1;
/// Highest accepted urgency rating.
pub const URGENCY_MAX: u8 = 3;

/// Urgency classification for one address, created-or-overwritten by
/// `classify`. There is no delete path; rows persist until overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityRecord {
    /// Rating in 1..=3, higher is more urgent.
    pub urgency: u8,
}

impl PriorityRecord {
    pub fn new(urgency: u8) -> Self {
        Self { urgency }
    }

    /// Checks the urgency range rule.
    ///
    /// # Errors
    /// - `UrgencyOutOfRange` when `urgency` is outside 1..=3.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !validate::is_valid_urgency(self.urgency) {
            return Err(RecordValidationError::UrgencyOutOfRange {
                urgency: self.urgency,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{PriorityRecord, RecordValidationError};

    #[test]
    fn in_range_urgency_validates() {
        for urgency in 1..=3 {
            assert!(PriorityRecord::new(urgency).validate().is_ok());
        }
    }

    #[test]
    fn out_of_range_urgency_is_rejected() {
        for urgency in [0u8, 4, 200] {
            assert_eq!(
                PriorityRecord::new(urgency).validate(),
                Err(RecordValidationError::UrgencyOutOfRange { urgency })
            );
        }
    }
}
