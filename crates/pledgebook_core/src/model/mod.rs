//! Domain model for the commitment registry.
//!
//! # Responsibility
//! - Define the records held by the three keyed stores.
//! - Keep field validation rules in one place, next to the data.
//!
//! # Invariants
//! - Every record is keyed by a stable participant `Address`.
//! - Record `validate()` methods are the single authority for field rules;
//!   write paths must call them before persistence.

pub mod deadline;
pub mod objective;
pub mod priority;
pub mod validate;

use std::error::Error;
use std::fmt::{Display, Formatter};

use uuid::Uuid;

/// Stable identifier for a registry participant.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type Address = Uuid;

/// Field-level validation failure for any registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Objective description is the empty string.
    EmptyDescription,
    /// Objective description exceeds the allowed length.
    DescriptionTooLong { chars: usize },
    /// Priority urgency outside the 1..=3 range.
    UrgencyOutOfRange { urgency: u8 },
    /// Deadline offset must be strictly positive.
    NonPositiveOffset,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "objective description must not be empty"),
            Self::DescriptionTooLong { chars } => write!(
                f,
                "objective description is {chars} characters; limit is {}",
                objective::DESCRIPTION_MAX_CHARS
            ),
            Self::UrgencyOutOfRange { urgency } => write!(
                f,
                "urgency {urgency} outside allowed range {}..={}",
                priority::URGENCY_MIN,
                priority::URGENCY_MAX
            ),
            Self::NonPositiveOffset => write!(f, "deadline offset must be greater than zero"),
        }
    }
}

impl Error for RecordValidationError {}
