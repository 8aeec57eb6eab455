//! Presence and length validators
//!
//! Length is measured in Unicode scalar values by default, matching the
//! XSD `maxLength` facet on `MaxNText` types. Use the `.bytes()`
//! constructors when a byte budget is what matters.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a value is supplied and not empty.
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::presence() }
    fn required();
}

// ============================================================================
// LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string length lies within `[min, max]`.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Length { min: usize, max: usize, mode: LengthMode } for str;
    rule(self, input) {
        let len = self.mode.measure(input);
        len >= self.min && len <= self.max
    }
    error(self, input) { ValidationError::length(self.min, self.max, self.mode.measure(input)) }
    new(min: usize, max: usize) { Self { min, max, mode: LengthMode::Chars } }
    fn length(min: usize, max: usize);
}

impl Length {
    /// Creates a length validator that counts bytes.
    #[must_use]
    pub fn bytes(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            mode: LengthMode::Bytes,
        }
    }
}

/// Length validator for ISO `MaxNText` types: at least one character, at most `max`.
#[must_use]
pub fn max_text(max: usize) -> Length {
    Length::new(1, max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ConstraintKind;

    #[test]
    fn required_rejects_empty() {
        assert!(required().validate("x").is_ok());
        assert_eq!(
            required().validate("").unwrap_err().kind,
            ConstraintKind::Presence
        );
    }

    #[test]
    fn length_within_bounds() {
        let v = length(1, 35);
        assert!(v.validate("a").is_ok());
        assert!(v.validate(&"a".repeat(35)).is_ok());
    }

    #[test]
    fn length_below_minimum() {
        let err = length(3, 3).validate("US").unwrap_err();
        assert_eq!(err.kind, ConstraintKind::Length);
        assert_eq!(err.message, "length 2 is below minimum 3");
    }

    #[test]
    fn length_above_maximum() {
        let err = max_text(140).validate(&"x".repeat(141)).unwrap_err();
        assert_eq!(err.message, "length 141 exceeds maximum 140");
        assert_eq!(err.param("actual"), Some("141"));
    }

    #[test]
    fn chars_mode_counts_scalars() {
        // 7 chars, 10 bytes
        let text = "Zürich€";
        assert!(length(1, 7).validate(text).is_ok());
        assert!(Length::bytes(1, 7).validate(text).is_err());
    }
}
