//! Field descriptors.

use std::fmt;
use std::sync::Arc;

use crate::foundation::Validate;
use crate::validators;

use super::SchemaRef;

/// A shareable primitive constraint over text.
pub type Constraint = Arc<dyn Validate<Input = str> + Send + Sync>;

// ============================================================================
// DESCRIPTOR ENUMS
// ============================================================================

/// Whether a field must be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Presence {
    Required,
    #[default]
    Optional,
}

/// How many times a field may occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occurs {
    /// At most once.
    #[default]
    Once,
    /// A list of `min..=max` items; `max: None` is unbounded.
    Many { min: usize, max: Option<usize> },
}

/// Where a field lives on the wire relative to its parent element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Placement {
    /// A child element named by the tag.
    #[default]
    Element,
    /// An attribute of the parent element.
    Attribute,
    /// The text content of the parent element.
    Content,
}

/// The value type of a field.
#[derive(Clone, Copy)]
pub enum ValueKind {
    Text,
    Decimal,
    Boolean,
    /// A nested structure described by its own schema.
    Structure(SchemaRef),
}

impl ValueKind {
    #[must_use]
    pub fn is_structure(&self) -> bool {
        matches!(self, Self::Structure(_))
    }
}

impl fmt::Debug for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("Text"),
            Self::Decimal => f.write_str("Decimal"),
            Self::Boolean => f.write_str("Boolean"),
            Self::Structure(schema) => write!(f, "Structure({})", schema().name()),
        }
    }
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// Describes one field of a structure: its in-memory name, wire tag,
/// presence, cardinality, value type and attached constraints.
///
/// # Examples
///
/// ```
/// use isomsg_validator::schema::{FieldSpec, Presence};
/// use isomsg_validator::validators::max_text;
///
/// let field = FieldSpec::text("MessageId", "MsgId")
///     .required()
///     .with(max_text(35));
///
/// assert_eq!(field.tag(), "MsgId");
/// assert_eq!(field.presence(), Presence::Required);
/// ```
#[derive(Clone)]
pub struct FieldSpec {
    name: &'static str,
    tag: &'static str,
    presence: Presence,
    occurs: Occurs,
    placement: Placement,
    kind: ValueKind,
    constraints: Vec<Constraint>,
}

impl FieldSpec {
    fn new(name: &'static str, tag: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            tag,
            presence: Presence::Optional,
            occurs: Occurs::Once,
            placement: Placement::Element,
            kind,
            constraints: Vec::new(),
        }
    }

    /// A text field.
    #[must_use]
    pub fn text(name: &'static str, tag: &'static str) -> Self {
        Self::new(name, tag, ValueKind::Text)
    }

    /// A decimal field; attach digit or range constraints explicitly.
    #[must_use]
    pub fn decimal(name: &'static str, tag: &'static str) -> Self {
        Self::new(name, tag, ValueKind::Decimal)
    }

    /// A boolean field, constrained to the XSD boolean lexical space.
    #[must_use]
    pub fn boolean(name: &'static str, tag: &'static str) -> Self {
        Self::new(name, tag, ValueKind::Boolean).with(validators::boolean())
    }

    /// A nested structure.
    #[must_use]
    pub fn structure(name: &'static str, tag: &'static str, schema: SchemaRef) -> Self {
        Self::new(name, tag, ValueKind::Structure(schema))
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.presence = Presence::Required;
        self
    }

    /// Makes this a repeated field with `min..=max` items.
    #[must_use = "builder methods must be chained or built"]
    pub fn repeated(mut self, min: usize, max: Option<usize>) -> Self {
        self.occurs = Occurs::Many { min, max };
        self
    }

    /// Places this field in an attribute of the parent element.
    #[must_use = "builder methods must be chained or built"]
    pub fn attribute(mut self) -> Self {
        self.placement = Placement::Attribute;
        self
    }

    /// Places this field in the text content of the parent element.
    #[must_use = "builder methods must be chained or built"]
    pub fn content(mut self) -> Self {
        self.placement = Placement::Content;
        self
    }

    /// Attaches a constraint; constraints run in attachment order.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<V>(mut self, constraint: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        self.constraints.push(Arc::new(constraint));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    #[must_use]
    pub fn presence(&self) -> Presence {
        self.presence
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    #[must_use]
    pub fn occurs(&self) -> Occurs {
        self.occurs
    }

    #[must_use]
    pub fn is_repeated(&self) -> bool {
        matches!(self.occurs, Occurs::Many { .. })
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("presence", &self.presence)
            .field("occurs", &self.occurs)
            .field("placement", &self.placement)
            .field("kind", &self.kind)
            .field("constraints", &self.constraints.len())
            .finish()
    }
}
