//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all primitive constraints
//! implement.

use std::sync::Arc;

use super::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure, stateless check over a scalar value.
///
/// A constraint reports zero or one violation. It never knows where the
/// value lives in a message tree; the structural walker attaches the path.
///
/// # Examples
///
/// ```
/// use isomsg_validator::foundation::{ConstraintKind, Validate, ValidationError};
///
/// struct Uppercase;
///
/// impl Validate for Uppercase {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().all(|c| c.is_ascii_uppercase()) {
///             Ok(())
///         } else {
///             Err(ValidationError::malformed("must be uppercase"))
///         }
///     }
/// }
///
/// assert!(Uppercase.validate("USD").is_ok());
/// assert_eq!(Uppercase.validate("usd").unwrap_err().kind, ConstraintKind::Pattern);
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND, short-circuiting on the
    /// first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And {
            left: self,
            right: other,
        }
    }
}

impl<T: Validate> ValidateExt for T {}

/// Both validators must pass; see [`ValidateExt::and`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct And<L, R> {
    pub left: L,
    pub right: R,
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}
