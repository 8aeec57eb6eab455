//! Violation types produced by constraints and the structural walker.
//!
//! A [`ValidationError`] is one constraint violation: a [`ConstraintKind`],
//! the [`FieldPath`] it occurred at, and a human-readable message.
//! [`ValidationErrors`] is the ordered, fail-slow collection returned by
//! every structure-level `validate` call.
//!
//! All string fields use `Cow<'static, str>` so static messages never
//! allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::path::FieldPath;

// ============================================================================
// CONSTRAINT KIND
// ============================================================================

/// Classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// A required field was not supplied.
    Presence,
    /// Text is shorter or longer than allowed.
    Length,
    /// Text does not match the required lexical shape.
    Pattern,
    /// A well-formed date or time names a day or instant that does not exist.
    Calendar,
    /// Value is outside a closed code list.
    Enumeration,
    /// A choice group has zero or several alternatives populated.
    ChoiceCardinality,
    /// Value is not a well-formed domain identifier (currency, BIC, IBAN, ...).
    DomainFormat,
    /// Numeric value is outside its allowed range.
    Range,
    /// A repeated field has too few or too many items.
    Occurrence,
}

impl ConstraintKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Presence => "presence",
            Self::Length => "length",
            Self::Pattern => "pattern",
            Self::Calendar => "calendar",
            Self::Enumeration => "enumeration",
            Self::ChoiceCardinality => "choice_cardinality",
            Self::DomainFormat => "domain_format",
            Self::Range => "range",
            Self::Occurrence => "occurrence",
        }
    }

    /// Name of the violation class, e.g. `PresenceError`.
    #[must_use]
    pub const fn error_name(self) -> &'static str {
        match self {
            Self::Presence => "PresenceError",
            Self::Length => "LengthError",
            Self::Pattern => "PatternError",
            Self::Calendar => "CalendarError",
            Self::Enumeration => "EnumerationError",
            Self::ChoiceCardinality => "ChoiceCardinalityError",
            Self::DomainFormat => "DomainFormatError",
            Self::Range => "RangeError",
            Self::Occurrence => "OccurrenceError",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_name())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single constraint violation.
///
/// Primitive constraints produce errors with an empty path; the structural
/// walker fills in the location with [`ValidationError::at`].
///
/// # Examples
///
/// ```
/// use isomsg_validator::foundation::{ConstraintKind, ValidationError};
///
/// let error = ValidationError::length(1, 140, 141).at("Creditor.Name".parse().unwrap());
///
/// assert_eq!(error.kind, ConstraintKind::Length);
/// assert_eq!(error.to_string(), "Field 'Creditor.Name': length 141 exceeds maximum 140");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub kind: ConstraintKind,

    /// Location relative to the validated root.
    pub path: FieldPath,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Parameters for message templating, typically 0-3 entries.
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub params: SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>,
}

impl ValidationError {
    /// Creates a violation of `kind` at the root path.
    pub fn new(kind: ConstraintKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            path: FieldPath::root(),
            message: message.into(),
            params: SmallVec::new(),
        }
    }

    /// Sets the path of this violation.
    #[must_use = "builder methods must be chained or built"]
    pub fn at(mut self, path: FieldPath) -> Self {
        self.path = path;
        self
    }

    /// Prepends `prefix` to the current path.
    #[must_use = "builder methods must be chained or built"]
    pub fn nested_under(mut self, prefix: &FieldPath) -> Self {
        self.path = self.path.prefixed(prefix);
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field '{}': {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// A required field was not supplied.
    pub fn presence() -> Self {
        Self::new(ConstraintKind::Presence, "is required")
    }

    /// Length outside `[min, max]`; the message names the violated bound.
    pub fn length(min: usize, max: usize, actual: usize) -> Self {
        let message = if actual < min {
            format!("length {actual} is below minimum {min}")
        } else {
            format!("length {actual} exceeds maximum {max}")
        };
        Self::new(ConstraintKind::Length, message)
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Text does not match `pattern`.
    pub fn pattern(pattern: impl Into<Cow<'static, str>>) -> Self {
        let pattern = pattern.into();
        Self::new(
            ConstraintKind::Pattern,
            format!("does not match required pattern '{pattern}'"),
        )
        .with_param("pattern", pattern)
    }

    /// Text is not in the expected lexical form, described by `expected`.
    pub fn malformed(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ConstraintKind::Pattern, expected)
    }

    /// A syntactically valid date or time that does not exist.
    pub fn calendar(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ConstraintKind::Calendar, message)
    }

    /// `value` is outside the allowed code list.
    pub fn enumeration(value: &str, allowed: &[&str]) -> Self {
        Self::new(
            ConstraintKind::Enumeration,
            format!("'{value}' is not a valid enumeration value"),
        )
        .with_param("allowed", allowed.join(","))
    }

    /// `value` is not a well-formed `format` identifier.
    pub fn domain_format(format: &'static str, value: &str) -> Self {
        Self::new(
            ConstraintKind::DomainFormat,
            format!("'{value}' is not a valid {format}"),
        )
        .with_param("format", format)
    }

    /// No alternative of a choice group was supplied.
    pub fn choice_none(alternatives: &[&str]) -> Self {
        Self::new(
            ConstraintKind::ChoiceCardinality,
            format!(
                "exactly one of [{}] is required, none provided",
                alternatives.join(", ")
            ),
        )
    }

    /// More than one alternative of a choice group was supplied.
    pub fn choice_many(provided: &[&str]) -> Self {
        Self::new(
            ConstraintKind::ChoiceCardinality,
            format!(
                "mutually exclusive alternatives both provided: {}",
                provided.join(", ")
            ),
        )
        .with_param("provided", provided.join(","))
    }

    /// Numeric value outside its allowed range.
    pub fn range(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ConstraintKind::Range, message)
    }

    /// Repeated field item count outside `[min, max]`.
    pub fn occurrence(min: usize, max: Option<usize>, actual: usize) -> Self {
        let message = if actual < min {
            format!("{actual} occurrences are below minimum {min}")
        } else {
            match max {
                Some(max) => format!("{actual} occurrences exceed maximum {max}"),
                None => format!("{actual} occurrences are not allowed"),
            }
        };
        let error = Self::new(ConstraintKind::Occurrence, message)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string());
        match max {
            Some(max) => error.with_param("max", max.to_string()),
            None => error,
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of violations.
///
/// Order follows the declaration order of the walked schema, so the same
/// tree always yields the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error from `other`, preserving order.
    pub fn extend(&mut self, other: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(other);
    }

    /// Appends every error from `other` with `prefix` prepended to its path.
    pub fn extend_under(&mut self, prefix: &FieldPath, other: ValidationErrors) {
        self.errors
            .extend(other.errors.into_iter().map(|e| e.nested_under(prefix)));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Errors located at or below `prefix`.
    pub fn under<'a>(&'a self, prefix: &'a FieldPath) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |e| e.path.starts_with(prefix))
    }

    /// Errors of the given kind.
    pub fn of_kind(&self, kind: ConstraintKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.kind == kind)
    }

    /// Paths of all errors, in order.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.path.to_string()).collect()
    }

    /// `Ok(())` if empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path(s: &str) -> FieldPath {
        s.parse().unwrap()
    }

    #[test]
    fn display_names_field_and_message() {
        let error = ValidationError::presence().at(path("ChargeBearer"));
        assert_eq!(error.to_string(), "Field 'ChargeBearer': is required");
    }

    #[test]
    fn length_message_names_violated_bound() {
        assert_eq!(
            ValidationError::length(1, 35, 0).message,
            "length 0 is below minimum 1"
        );
        assert_eq!(
            ValidationError::length(1, 35, 36).message,
            "length 36 exceeds maximum 35"
        );
        assert_eq!(ValidationError::length(1, 35, 36).param("max"), Some("35"));
    }

    #[test]
    fn static_messages_do_not_allocate() {
        let error = ValidationError::presence();
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn nested_under_prepends_prefix() {
        let error = ValidationError::presence()
            .at(path("Name"))
            .nested_under(&path("Creditor"));
        assert_eq!(error.path.to_string(), "Creditor.Name");
    }

    #[test]
    fn collection_display_joins_with_semicolon() {
        let errors: ValidationErrors = vec![
            ValidationError::presence().at(path("ChargeBearer")),
            ValidationError::length(1, 140, 141).at(path("Creditor.Name")),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "Field 'ChargeBearer': is required; Field 'Creditor.Name': length 141 exceeds maximum 140"
        );
    }

    #[test]
    fn under_filters_by_prefix() {
        let errors: ValidationErrors = vec![
            ValidationError::presence().at(path("Debtor.Name")),
            ValidationError::presence().at(path("Creditor.Name")),
            ValidationError::presence().at(path("DebtorAgent.FinancialInstitutionId")),
        ]
        .into_iter()
        .collect();

        let prefix = path("Debtor");
        let under: Vec<_> = errors.under(&prefix).map(|e| e.path.to_string()).collect();
        assert_eq!(under, vec!["Debtor.Name".to_string()]);
    }

    #[test]
    fn of_kind_filters() {
        let errors: ValidationErrors = vec![
            ValidationError::presence().at(path("A")),
            ValidationError::pattern("^x$").at(path("B")),
        ]
        .into_iter()
        .collect();
        assert_eq!(errors.of_kind(ConstraintKind::Pattern).count(), 1);
    }

    #[test]
    fn into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());
        let errors = ValidationErrors::from(ValidationError::presence());
        assert_eq!(errors.into_result().unwrap_err().len(), 1);
    }

    #[test]
    fn serializes_for_reports() {
        let error = ValidationError::presence().at(path("Debtor.Name"));
        let json = serde_json::to_value(&ValidationErrors::from(error)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "kind": "presence",
                "path": "Debtor.Name",
                "message": "is required"
            }])
        );
    }

    #[test]
    fn occurrence_message() {
        let error = ValidationError::occurrence(1, Some(3), 4);
        assert_eq!(error.message, "4 occurrences exceed maximum 3");
        assert_eq!(error.kind, ConstraintKind::Occurrence);
    }
}
