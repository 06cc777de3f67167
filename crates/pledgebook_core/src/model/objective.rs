//! Objective record — the root entity of the registry.
//!
//! # Responsibility
//! - Define the per-address commitment record and its field rules.
//! - Provide the read-only status projection used by `inspect`.
//!
//! # Invariants
//! - `description` is never empty and never exceeds `DESCRIPTION_MAX_CHARS`.
//! - Presence of an `Objective` for an address is the existence condition
//!   gating every priority/deadline mutation.

use serde::{Deserialize, Serialize};

use super::{validate, RecordValidationError};

/// Maximum objective description length, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 100;

/// One participant's active commitment.
///
/// At most one exists per address; creation is rejected while one is
/// present and every later mutation requires it to still be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    /// Free-form commitment text, 1..=100 characters.
    pub description: String,
    /// Completion flag; may be toggled in either direction by `modify`.
    pub completed: bool,
}

impl Objective {
    /// Creates a not-yet-completed objective.
    ///
    /// Does not validate; callers persist through a store that does.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Checks field rules for this record.
    ///
    /// # Errors
    /// - `EmptyDescription` when the description has no characters.
    /// - `DescriptionTooLong` when it exceeds `DESCRIPTION_MAX_CHARS`.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if !validate::is_non_empty(&self.description) {
            return Err(RecordValidationError::EmptyDescription);
        }
        let chars = self.description.chars().count();
        if chars > DESCRIPTION_MAX_CHARS {
            return Err(RecordValidationError::DescriptionTooLong { chars });
        }
        Ok(())
    }
}

/// Read model returned by `inspect`.
///
/// Absence is a normal, representable result rather than an error, so the
/// projection carries a `present` flag with zero/false defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveStatus {
    /// Whether the address currently holds an objective.
    pub present: bool,
    /// Description length in characters; 0 when absent.
    pub description_len: usize,
    /// Completion flag; false when absent.
    pub completed: bool,
}

impl ObjectiveStatus {
    /// Status projection for an address with no objective.
    pub fn absent() -> Self {
        Self {
            present: false,
            description_len: 0,
            completed: false,
        }
    }

    /// Status projection for an existing objective.
    pub fn of(objective: &Objective) -> Self {
        Self {
            present: true,
            description_len: objective.description.chars().count(),
            completed: objective.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Objective, ObjectiveStatus, RecordValidationError, DESCRIPTION_MAX_CHARS};

    #[test]
    fn new_objective_starts_incomplete() {
        let objective = Objective::new("read one paper per week");
        assert!(!objective.completed);
        assert!(objective.validate().is_ok());
    }

    #[test]
    fn empty_description_fails_validation() {
        let objective = Objective::new("");
        assert_eq!(
            objective.validate(),
            Err(RecordValidationError::EmptyDescription)
        );
    }

    #[test]
    fn description_over_limit_fails_validation() {
        let objective = Objective::new("x".repeat(DESCRIPTION_MAX_CHARS + 1));
        assert_eq!(
            objective.validate(),
            Err(RecordValidationError::DescriptionTooLong {
                chars: DESCRIPTION_MAX_CHARS + 1
            })
        );
    }

    #[test]
    fn description_limit_counts_characters_not_bytes() {
        // 100 multibyte characters are inside the limit.
        let objective = Objective::new("é".repeat(DESCRIPTION_MAX_CHARS));
        assert!(objective.validate().is_ok());
    }

    #[test]
    fn status_projections_match_record_state() {
        let absent = ObjectiveStatus::absent();
        assert!(!absent.present);
        assert_eq!(absent.description_len, 0);
        assert!(!absent.completed);

        let mut objective = Objective::new("walk daily");
        objective.completed = true;
        let status = ObjectiveStatus::of(&objective);
        assert!(status.present);
        assert_eq!(status.description_len, 10);
        assert!(status.completed);
    }

    #[test]
    fn objective_serializes_with_stable_field_names() {
        let json = serde_json::to_value(Objective::new("swim")).unwrap();
        assert_eq!(json["description"], "swim");
        assert_eq!(json["completed"], false);
    }
}
