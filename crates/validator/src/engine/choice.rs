//! Choice group cardinality.

use tracing::trace;

use crate::foundation::{FieldPath, ValidationError};
use crate::schema::{ChoiceSpec, Node, Schema};

use super::Walker;

impl Walker {
    /// Counts supplied alternatives, reports a cardinality violation unless
    /// exactly one is set, then validates every supplied alternative.
    pub(super) fn choice(
        &mut self,
        node: &dyn Node,
        group: &ChoiceSpec,
        schema: &Schema,
        path: &FieldPath,
    ) {
        let slots: Vec<_> = group
            .alternatives()
            .iter()
            .map(|alt| (alt, node.slot(alt)))
            .collect();
        let provided: Vec<&str> = slots
            .iter()
            .filter(|(_, slot)| slot.is_set())
            .map(|(alt, _)| alt.name())
            .collect();

        trace!(
            group = group.name().unwrap_or(schema.name()),
            provided = provided.len(),
            "choice evaluated"
        );

        let group_path = match group.name() {
            Some(name) => path.child(name),
            None if path.is_root() => path.child(schema.name()),
            None => path.clone(),
        };
        match provided.len() {
            1 => {}
            0 => {
                let names: Vec<&str> = group.alternatives().iter().map(|a| a.name()).collect();
                self.report(ValidationError::choice_none(&names), &group_path);
            }
            _ => self.report(ValidationError::choice_many(&provided), &group_path),
        }

        for (alt, slot) in slots {
            if slot.is_set() {
                self.field(alt, slot, &path.child(alt.name()));
            }
        }
    }
}
