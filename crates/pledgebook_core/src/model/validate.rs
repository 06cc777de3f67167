//! Pure field predicates shared by the record models.
//!
//! # Responsibility
//! - Answer yes/no field questions with no side effects.
//!
//! # Invariants
//! - Every predicate is total: no error paths, no panics.

use super::priority::{URGENCY_MAX, URGENCY_MIN};

/// Returns true iff `text` contains at least one character.
pub fn is_non_empty(text: &str) -> bool {
    !text.is_empty()
}

/// Returns true iff `urgency` is inside the accepted classification range.
pub fn is_valid_urgency(urgency: u8) -> bool {
    (URGENCY_MIN..=URGENCY_MAX).contains(&urgency)
}

/// Returns true iff `offset` can move the deadline strictly into the future.
pub fn is_valid_offset(offset: u64) -> bool {
    offset > 0
}

#[cfg(test)]
mod tests {
    use super::{is_non_empty, is_valid_offset, is_valid_urgency};

    #[test]
    fn non_empty_rejects_only_the_empty_string() {
        assert!(!is_non_empty(""));
        assert!(is_non_empty(" "));
        assert!(is_non_empty("ship it"));
    }

    #[test]
    fn urgency_range_is_one_to_three_inclusive() {
        assert!(!is_valid_urgency(0));
        assert!(is_valid_urgency(1));
        assert!(is_valid_urgency(2));
        assert!(is_valid_urgency(3));
        assert!(!is_valid_urgency(4));
        assert!(!is_valid_urgency(u8::MAX));
    }

    #[test]
    fn offset_must_be_strictly_positive() {
        assert!(!is_valid_offset(0));
        assert!(is_valid_offset(1));
        assert!(is_valid_offset(u64::MAX));
    }
}
