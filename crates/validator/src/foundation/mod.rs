//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConstraintKind`]
//! - **Paths**: [`FieldPath`]

pub mod error;
pub mod path;
pub mod traits;

pub use error::{ConstraintKind, ValidationError, ValidationErrors};
pub use path::{FieldPath, PathError, PathSegment};
pub use traits::{And, Validate, ValidateExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs every validator against `value`, collecting all failures.
///
/// Unlike [`ValidateExt::and`], this never short-circuits.
pub fn validate_with_all<'v, V, I>(value: &V::Input, validators: I) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized + 'v,
    I: IntoIterator<Item = &'v V>,
{
    validators
        .into_iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result()
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// TESTS
// ============================================================================
