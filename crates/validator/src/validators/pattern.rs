//! Lexical validators: regular expressions, closed code lists, booleans.

use crate::foundation::ValidationError;

// ============================================================================
// PATTERN
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// Anchor the expression (`^...$`) when the whole value must match,
    /// as XSD `pattern` facets always do.
    pub Pattern { regex: regex::Regex } for str;
    rule(self, input) { self.regex.is_match(input) }
    error(self, input) { ValidationError::pattern(self.regex.as_str().to_owned()) }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            regex: regex::Regex::new(pattern)?,
        })
    }
    fn pattern(pattern: &str) -> regex::Error;
}

// ============================================================================
// ENUMERATION
// ============================================================================

crate::validator! {
    /// Validates that a string is one of a closed set of codes.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Enumeration { allowed: &'static [&'static str] } for str;
    rule(self, input) { self.allowed.contains(&input) }
    error(self, input) { ValidationError::enumeration(input, self.allowed) }
    fn enumeration(allowed: &'static [&'static str]);
}

// ============================================================================
// BOOLEAN
// ============================================================================

crate::validator! {
    /// Validates the XSD boolean lexical space: `true`, `false`, `1`, `0`.
    pub Boolean for str;
    rule(input) { matches!(input, "true" | "false" | "1" | "0") }
    error(input) { ValidationError::malformed("must be one of true, false, 1, 0") }
    fn boolean();
}

/// Parses an XSD boolean literal.
#[must_use]
pub fn parse_boolean(input: &str) -> Option<bool> {
    match input {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================
