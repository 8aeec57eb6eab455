//! Prelude module for convenient imports.
//!
//! Provides a single `use isomsg_validator::prelude::*;` import that brings
//! in the traits, schema builders, violation types and every built-in
//! constraint.
//!
//! # Examples
//!
//! ```
//! use isomsg_validator::prelude::*;
//!
//! let bic_or_nothing = FieldSpec::text("BicFi", "BICFI").with(bic());
//! assert_eq!(bic_or_nothing.tag(), "BICFI");
//! ```

// ============================================================================
// FOUNDATION: Core traits, errors, paths
// ============================================================================

pub use crate::foundation::{
    ConstraintKind, FieldPath, Validate, ValidateExt, ValidationError, ValidationErrors,
};

// ============================================================================
// SCHEMA AND WALKER
// ============================================================================

pub use crate::engine::{collect, validate};
pub use crate::schema::{
    ChoiceSpec, FieldSpec, Node, Occurs, Placement, Presence, Schema, SchemaRef, Slot, Structure,
    ValueKind,
};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
