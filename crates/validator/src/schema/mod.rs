//! Schema descriptions of message structures.
//!
//! A [`Schema`] is plain data: an ordered list of fields and choice groups.
//! Message components build theirs once into a `LazyLock` static and hand
//! out `&'static` references through a [`SchemaRef`], which also lets
//! schemas refer to each other regardless of declaration order.

mod field;
mod node;

pub use field::{Constraint, FieldSpec, Occurs, Placement, Presence, ValueKind};
pub use node::{Node, Slot, Structure};

/// Deferred reference to a process-wide schema.
pub type SchemaRef = fn() -> &'static Schema;

// ============================================================================
// CHOICE GROUP
// ============================================================================

/// A named set of mutually exclusive alternatives.
///
/// Exactly one alternative must be supplied.
#[derive(Debug, Clone)]
pub struct ChoiceSpec {
    name: Option<&'static str>,
    alternatives: Vec<FieldSpec>,
}

impl ChoiceSpec {
    /// A named group inside a larger structure.
    ///
    /// Violations are reported at `<structure path>.<name>`.
    #[must_use]
    pub fn new(name: &'static str, alternatives: Vec<FieldSpec>) -> Self {
        Self {
            name: Some(name),
            alternatives,
        }
    }

    /// A group that makes up the whole structure (ISO `...Choice` types).
    ///
    /// Violations are reported at the structure's own path.
    #[must_use]
    pub fn whole(alternatives: Vec<FieldSpec>) -> Self {
        Self {
            name: None,
            alternatives,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    #[must_use]
    pub fn alternatives(&self) -> &[FieldSpec] {
        &self.alternatives
    }
}

// ============================================================================
// MEMBER
// ============================================================================

/// One entry of a schema, in declaration order.
#[derive(Debug, Clone)]
pub enum Member {
    Field(FieldSpec),
    Choice(ChoiceSpec),
}

impl Member {
    /// The fields this member can hold, one for a plain field.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        match self {
            Self::Field(field) => std::slice::from_ref(field),
            Self::Choice(choice) => choice.alternatives(),
        }
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Ordered description of a structure.
///
/// # Examples
///
/// ```
/// use isomsg_validator::schema::{ChoiceSpec, FieldSpec, Schema};
/// use isomsg_validator::validators::{iban, max_text};
///
/// let schema = Schema::new("AccountIdentification4").choice(ChoiceSpec::whole(vec![
///     FieldSpec::text("Iban", "IBAN").with(iban()),
///     FieldSpec::text("Other", "Othr").with(max_text(34)),
/// ]));
///
/// assert_eq!(schema.fields().count(), 2);
/// assert!(schema.field_by_tag("IBAN").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    members: Vec<Member>,
}

impl Schema {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            members: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.members.push(Member::Field(field));
        self
    }

    /// Appends a choice group.
    #[must_use = "builder methods must be chained or built"]
    pub fn choice(mut self, choice: ChoiceSpec) -> Self {
        self.members.push(Member::Choice(choice));
        self
    }

    /// The ISO type name, e.g. `GroupHeader93`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Every field in declaration order, choice alternatives included.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.members.iter().flat_map(Member::fields)
    }

    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.name() == name)
    }

    #[must_use]
    pub fn field_by_tag(&self, tag: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.tag() == tag)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::max_text;
    use std::sync::LazyLock;

    static INNER: LazyLock<Schema> =
        LazyLock::new(|| Schema::new("Inner").field(FieldSpec::text("Code", "Cd")));

    fn inner() -> &'static Schema {
        &INNER
    }

    #[test]
    fn declaration_order_is_kept() {
        let schema = Schema::new("Outer")
            .field(FieldSpec::text("B", "b"))
            .choice(ChoiceSpec::new(
                "Pick",
                vec![FieldSpec::text("C", "c"), FieldSpec::text("D", "d")],
            ))
            .field(FieldSpec::structure("A", "a", inner));

        let names: Vec<_> = schema.fields().map(FieldSpec::name).collect();
        assert_eq!(names, ["B", "C", "D", "A"]);
    }

    #[test]
    fn lookups_by_name_and_tag() {
        let schema = Schema::new("GroupHeader").field(
            FieldSpec::text("MessageId", "MsgId")
                .required()
                .with(max_text(35)),
        );
        assert_eq!(schema.field_by_name("MessageId").unwrap().tag(), "MsgId");
        assert_eq!(schema.field_by_tag("MsgId").unwrap().name(), "MessageId");
        assert!(schema.field_by_tag("MessageId").is_none());
    }

    #[test]
    fn field_builder_defaults() {
        let field = FieldSpec::text("Name", "Nm");
        assert_eq!(field.presence(), Presence::Optional);
        assert_eq!(field.occurs(), Occurs::Once);
        assert_eq!(field.placement(), Placement::Element);
        assert!(field.constraints().is_empty());

        let list = FieldSpec::text("AddressLine", "AdrLine").repeated(0, Some(7));
        assert!(list.is_repeated());

        let flag = FieldSpec::boolean("BatchBooking", "BtchBookg");
        assert_eq!(flag.constraints().len(), 1);
    }

    #[test]
    fn structure_kind_resolves_lazily() {
        let field = FieldSpec::structure("Inner", "Inr", inner);
        match field.kind() {
            ValueKind::Structure(schema) => assert_eq!(schema().name(), "Inner"),
            other => panic!("unexpected kind {other:?}"),
        }
    }
}
