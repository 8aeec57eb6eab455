//! Decimal amount validators.
//!
//! Amounts travel as text so that an unparsable value can still be
//! reported against its field instead of failing deserialization.

use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::foundation::ValidationError;

static DECIMAL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("static regex")
});

/// Significant digit counts of a decimal literal: `(total, fraction)`.
///
/// Leading integer zeros and trailing fraction zeros do not count, as with
/// the XSD `totalDigits` and `fractionDigits` facets.
fn digit_counts(input: &str) -> (usize, usize) {
    let unsigned = input.trim_start_matches(['+', '-']);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let int = int.trim_start_matches('0');
    let frac = frac.trim_end_matches('0');
    (int.len() + frac.len(), frac.len())
}

// ============================================================================
// DECIMAL DIGITS
// ============================================================================

crate::validator! {
    /// Validates a decimal literal with at most `total` significant digits,
    /// `fraction` of them after the point.
    ///
    /// ISO 20022 amounts use 18 total and 5 fraction digits.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DecimalDigits { total: usize, fraction: usize } for str;
    rule(self, input) {
        DECIMAL_REGEX.is_match(input) && {
            let (total, fraction) = digit_counts(input);
            total <= self.total && fraction <= self.fraction
        }
    }
    error(self, input) {
        if DECIMAL_REGEX.is_match(input) {
            ValidationError::malformed(format!(
                "must have at most {} digits, {} after the decimal point",
                self.total, self.fraction
            ))
            .with_param("total_digits", self.total.to_string())
            .with_param("fraction_digits", self.fraction.to_string())
        } else {
            ValidationError::malformed("must be a decimal number")
        }
    }
    fn decimal_digits(total: usize, fraction: usize);
}

/// Digit limits of `ActiveCurrencyAndAmount` and its siblings.
#[must_use]
pub fn amount_digits() -> DecimalDigits {
    DecimalDigits::new(18, 5)
}

// ============================================================================
// POSITIVE
// ============================================================================

crate::validator! {
    /// Validates a decimal strictly greater than zero.
    pub Positive for str;
    rule(input) { Decimal::from_str(input).is_ok_and(|v| v > Decimal::ZERO) }
    error(input) {
        if Decimal::from_str(input).is_ok() {
            ValidationError::range("must be positive").with_param("min_exclusive", "0")
        } else {
            ValidationError::malformed("must be a decimal number")
        }
    }
    fn positive();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ConstraintKind, Validate};
    use rstest::rstest;

    #[rstest]
    #[case("1000.00", true)]
    #[case("0.00001", true)]
    #[case("123456789012345678", true)]
    #[case("1234567890123.12345", true)]
    #[case("007.50", true)]
    #[case("0.000001", false)]
    #[case("1234567890123456789", false)]
    #[case("12.5abc", false)]
    #[case("", false)]
    fn amount_digit_limits(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(amount_digits().validate(input).is_ok(), ok, "{input}");
    }

    #[test]
    fn digit_counts_ignore_padding_zeros() {
        assert_eq!(digit_counts("007.500"), (2, 1));
        assert_eq!(digit_counts("-0.25"), (2, 2));
    }

    #[test]
    fn non_numeric_is_a_pattern_error() {
        let err = amount_digits().validate("ten").unwrap_err();
        assert_eq!(err.kind, ConstraintKind::Pattern);
        assert_eq!(err.message, "must be a decimal number");
    }

    #[rstest]
    #[case("0.01", true)]
    #[case("1000", true)]
    #[case("0", false)]
    #[case("0.00", false)]
    #[case("-5", false)]
    fn positive_values(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(positive().validate(input).is_ok(), ok, "{input}");
    }

    #[test]
    fn non_positive_is_a_range_error() {
        assert_eq!(positive().validate("0").unwrap_err().kind, ConstraintKind::Range);
        assert_eq!(positive().validate("abc").unwrap_err().kind, ConstraintKind::Pattern);
    }
}
