//! Structural validator.
//!
//! Walks a [`Node`] against a [`Schema`] in declaration order and collects
//! every violation. The walk never stops early: an unset required field
//! yields one presence violation and its siblings are still checked.

mod choice;

use tracing::{debug, debug_span};

use crate::foundation::{FieldPath, ValidationError, ValidationErrors};
use crate::schema::{FieldSpec, Member, Node, Occurs, Schema, Slot, ValueKind};

/// Validates `node` against `schema`.
///
/// Paths in the returned violations are relative to `node`.
pub fn validate(node: &dyn Node, schema: &Schema) -> Result<(), ValidationErrors> {
    collect(node, schema).into_result()
}

/// Like [`validate`] but always returns the (possibly empty) collection.
pub fn collect(node: &dyn Node, schema: &Schema) -> ValidationErrors {
    let span = debug_span!("validate", schema = schema.name());
    let _guard = span.enter();

    let mut walker = Walker::default();
    walker.structure(node, schema, &FieldPath::root());

    debug!(violations = walker.errors.len(), "validation finished");
    walker.errors
}

/// Validates `node` with every violation path prefixed by `at`.
pub fn collect_at(node: &dyn Node, schema: &Schema, at: &FieldPath) -> ValidationErrors {
    let mut walker = Walker::default();
    walker.structure(node, schema, at);
    walker.errors
}

// ============================================================================
// WALKER
// ============================================================================

#[derive(Default)]
struct Walker {
    errors: ValidationErrors,
}

impl Walker {
    fn structure(&mut self, node: &dyn Node, schema: &Schema, path: &FieldPath) {
        for member in schema.members() {
            match member {
                Member::Field(field) => {
                    let slot = node.slot(field);
                    self.field(field, slot, &path.child(field.name()));
                }
                Member::Choice(group) => self.choice(node, group, schema, path),
            }
        }
    }

    fn field(&mut self, field: &FieldSpec, slot: Slot<'_>, path: &FieldPath) {
        match field.occurs() {
            Occurs::Once => {
                if !slot.is_set() {
                    if field.is_required() {
                        self.report(ValidationError::presence(), path);
                    }
                    return;
                }
                let slot = match slot {
                    Slot::List(mut items) if items.len() == 1 => items.remove(0),
                    other => other,
                };
                if let Slot::List(items) = &slot {
                    self.report(ValidationError::occurrence(0, Some(1), items.len()), path);
                    return;
                }
                self.item(field, slot, path);
            }
            Occurs::Many { min, max } => {
                // Unset items keep their wire position so later indices stay true.
                let items: Vec<_> = slot
                    .into_items()
                    .into_iter()
                    .enumerate()
                    .filter(|(_, item)| item.is_set())
                    .collect();
                if items.is_empty() {
                    if field.is_required() {
                        self.report(ValidationError::presence(), path);
                    } else if min > 0 {
                        self.report(ValidationError::occurrence(min, max, 0), path);
                    }
                    return;
                }
                let count = items.len();
                if count < min || max.is_some_and(|max| count > max) {
                    self.report(ValidationError::occurrence(min, max, count), path);
                }
                for (index, item) in items {
                    self.item(field, item, &path.index(index));
                }
            }
        }
    }

    /// Checks one supplied occurrence of `field`.
    fn item(&mut self, field: &FieldSpec, slot: Slot<'_>, path: &FieldPath) {
        match (field.kind(), slot) {
            (ValueKind::Structure(schema), Slot::Node(child)) => {
                self.structure(child, schema(), path);
            }
            (ValueKind::Structure(schema), _) => {
                let expected = format!("must be a {} structure", schema().name());
                self.report(ValidationError::malformed(expected), path);
            }
            (_, Slot::Text(text)) => {
                for constraint in field.constraints() {
                    if let Err(error) = constraint.validate(&text) {
                        self.report(error, path);
                    }
                }
            }
            (_, Slot::Node(_)) => {
                self.report(ValidationError::malformed("must be a simple value"), path);
            }
            (_, Slot::Unset | Slot::List(_)) => {}
        }
    }

    fn report(&mut self, error: ValidationError, path: &FieldPath) {
        self.errors.add(error.at(path.clone()));
    }
}

// ============================================================================
// TESTS
// ============================================================================
