//! Read-only views over message trees.
//!
//! The walker never sees concrete types. Typed model structs, generic
//! element trees and JSON documents all expose their fields through
//! [`Node::slot`], so one schema validates every representation.

use std::borrow::Cow;
use std::fmt::Display;

use crate::foundation::ValidationErrors;

use super::{FieldSpec, Schema};

// ============================================================================
// SLOT
// ============================================================================

/// The current content of one field.
#[derive(Clone)]
pub enum Slot<'a> {
    /// Not supplied.
    Unset,
    /// A scalar value in its lexical form.
    Text(Cow<'a, str>),
    /// A nested structure.
    Node(&'a dyn Node),
    /// Several occurrences of the same field.
    List(Vec<Slot<'a>>),
}

impl<'a> Slot<'a> {
    /// Whether the field counts as supplied.
    ///
    /// Empty text and empty lists are treated as absent.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Unset => false,
            Self::Text(text) => !text.is_empty(),
            Self::Node(_) => true,
            Self::List(items) => !items.is_empty(),
        }
    }

    /// The scalar value, if this slot holds one.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The items of this slot, treating a single value as a one-item list.
    #[must_use]
    pub fn into_items(self) -> Vec<Slot<'a>> {
        match self {
            Self::Unset => Vec::new(),
            Self::List(items) => items,
            single => vec![single],
        }
    }

    // ── constructors used by `Node` impls ──────────────────────────────────

    /// An optional borrowed string.
    #[must_use]
    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Unset, |v| Self::Text(Cow::Borrowed(v)))
    }

    /// An optional value rendered through `Display` (decimals, codes).
    #[must_use]
    pub fn display<T: Display + ?Sized>(value: Option<&T>) -> Self {
        value.map_or(Self::Unset, |v| Self::Text(Cow::Owned(v.to_string())))
    }

    /// An optional boolean in XSD lexical form.
    #[must_use]
    pub fn flag(value: Option<bool>) -> Self {
        match value {
            Some(true) => Self::Text(Cow::Borrowed("true")),
            Some(false) => Self::Text(Cow::Borrowed("false")),
            None => Self::Unset,
        }
    }

    /// An optional nested structure.
    #[must_use]
    pub fn node<N: Node>(value: Option<&'a N>) -> Self {
        value.map_or(Self::Unset, |n| Self::Node(n))
    }

    /// A repeated nested structure.
    #[must_use]
    pub fn nodes<N: Node>(items: &'a [N]) -> Self {
        Self::List(items.iter().map(|n| Self::Node(n)).collect())
    }

    /// A repeated text field.
    #[must_use]
    pub fn texts(items: &'a [String]) -> Self {
        Self::List(
            items
                .iter()
                .map(|s| Self::Text(Cow::Borrowed(s.as_str())))
                .collect(),
        )
    }
}

impl std::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unset => f.write_str("Unset"),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Node(_) => f.write_str("Node(..)"),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
        }
    }
}

// ============================================================================
// NODE
// ============================================================================

/// A structure whose fields can be read by descriptor.
///
/// Implementations return [`Slot::Unset`] for fields they do not carry.
pub trait Node {
    fn slot(&self, field: &FieldSpec) -> Slot<'_>;
}

// ============================================================================
// STRUCTURE
// ============================================================================

/// A typed structure bound to its schema.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use isomsg_validator::prelude::*;
///
/// #[derive(Default)]
/// struct Contact {
///     name: Option<String>,
/// }
///
/// static CONTACT: LazyLock<Schema> = LazyLock::new(|| {
///     Schema::new("Contact").field(FieldSpec::text("Name", "Nm").required().with(max_text(140)))
/// });
///
/// impl Node for Contact {
///     fn slot(&self, field: &FieldSpec) -> Slot<'_> {
///         match field.name() {
///             "Name" => Slot::text(self.name.as_deref()),
///             _ => Slot::Unset,
///         }
///     }
/// }
///
/// impl Structure for Contact {
///     fn schema() -> &'static Schema {
///         &CONTACT
///     }
/// }
///
/// let errors = Contact::default().validate().unwrap_err();
/// assert_eq!(errors.to_string(), "Field 'Name': is required");
/// ```
pub trait Structure: Node {
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Validates the whole tree rooted at `self`.
    fn validate(&self) -> Result<(), ValidationErrors>
    where
        Self: Sized,
    {
        crate::engine::validate(self, Self::schema())
    }
}
