//! Schema-guided encoding of any [`Node`] into an [`Element`] tree.

use isomsg_validator::schema::{FieldSpec, Node, Placement, Schema, Slot, ValueKind};
use tracing::warn;

use crate::element::Element;

/// Builds the element `tag` from `node`, laid out by `schema`.
///
/// Fields appear in declaration order under their wire tags. Unset fields,
/// empty text included, are omitted.
pub fn to_element(node: &dyn Node, schema: &Schema, tag: &str) -> Element {
    let mut element = Element::new(tag);
    fill(&mut element, node, schema);
    element
}

fn fill(element: &mut Element, node: &dyn Node, schema: &Schema) {
    for field in schema.fields() {
        let slot = node.slot(field);
        if !slot.is_set() {
            continue;
        }
        match field.placement() {
            Placement::Attribute => {
                if let Some(value) = slot.value() {
                    element.set_attribute(field.tag(), value);
                }
            }
            Placement::Content => {
                if let Some(value) = slot.value() {
                    element.set_text(value);
                }
            }
            Placement::Element => {
                for item in slot.into_items() {
                    if let Some(child) = item_element(field, item) {
                        element.push_child(child);
                    }
                }
            }
        }
    }
}

fn item_element(field: &FieldSpec, slot: Slot<'_>) -> Option<Element> {
    match (field.kind(), slot) {
        (ValueKind::Structure(schema), Slot::Node(node)) => {
            Some(to_element(node, schema(), field.tag()))
        }
        (ValueKind::Structure(_), Slot::Text(_)) | (_, Slot::Node(_)) => {
            warn!(field = field.name(), "value does not fit the field kind, skipped");
            None
        }
        (_, Slot::Text(text)) if !text.is_empty() => {
            Some(Element::new(field.tag()).with_text(text))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomsg_validator::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::LazyLock;

    static AMOUNT: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("Amount")
            .field(FieldSpec::decimal("Value", "Value").content())
            .field(FieldSpec::text("Currency", "Ccy").attribute())
    });

    fn amount() -> &'static Schema {
        &AMOUNT
    }

    static TX: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("Tx")
            .field(FieldSpec::text("MessageId", "MsgId"))
            .field(FieldSpec::boolean("BatchBooking", "BtchBookg"))
            .field(FieldSpec::structure("Amount", "Amt", amount))
            .field(FieldSpec::text("Lines", "Ln").repeated(0, None))
    });

    #[test]
    fn uses_wire_tags_in_declaration_order() {
        let doc = json!({
            "Lines": ["a", "b"],
            "Amount": { "Currency": "EUR", "Value": "12.5" },
            "BatchBooking": false,
            "MessageId": "M1",
        });
        let element = to_element(&doc, &TX, "Tx");

        let expected = Element::new("Tx")
            .with_child(Element::new("MsgId").with_text("M1"))
            .with_child(Element::new("BtchBookg").with_text("false"))
            .with_child(
                Element::new("Amt")
                    .with_attribute("Ccy", "EUR")
                    .with_text("12.5"),
            )
            .with_child(Element::new("Ln").with_text("a"))
            .with_child(Element::new("Ln").with_text("b"));
        assert_eq!(element, expected);
    }

    #[test]
    fn unset_fields_are_omitted() {
        let doc = json!({ "MessageId": "", "Amount": null, "Lines": [] });
        assert_eq!(to_element(&doc, &TX, "Tx"), Element::new("Tx"));
    }
}
