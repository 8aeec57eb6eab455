//! Schema-guided decoding of an [`Element`] tree.
//!
//! The element is first lifted into a `serde_json::Value` keyed by in-memory
//! field names, which typed structs then deserialize from. Choice types are
//! externally tagged enums, so a choice structure with one alternative maps
//! onto `{ "Alternative": ... }` without special casing.

use isomsg_validator::schema::{FieldSpec, Placement, Schema, ValueKind};
use isomsg_validator::validators::parse_boolean;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use crate::element::Element;
use crate::error::{CodecError, Result};

/// Decodes `element` into `T` through its schema.
pub fn from_element<T: DeserializeOwned>(element: &Element, schema: &Schema) -> Result<T> {
    Ok(serde_json::from_value(to_value(element, schema)?)?)
}

/// Lifts `element` into a JSON object keyed by field names.
///
/// Absent and empty elements are left out, so they decode as unset. Repeated
/// fields become arrays; booleans in XSD lexical form become JSON booleans.
/// Elements the schema does not describe are ignored.
///
/// A single-valued field that appears more than once is
/// [`CodecError::Malformed`]; no occurrence is silently dropped.
pub fn to_value(element: &Element, schema: &Schema) -> Result<Value> {
    let mut object = Map::new();
    for field in schema.fields() {
        if let Some(value) = field_value(element, field)? {
            object.insert(field.name().to_owned(), value);
        }
    }
    Ok(Value::Object(object))
}

fn field_value(element: &Element, field: &FieldSpec) -> Result<Option<Value>> {
    match field.placement() {
        Placement::Attribute => Ok(element.attribute(field.tag()).and_then(|v| scalar(field, v))),
        Placement::Content => Ok(element.text().and_then(|v| scalar(field, v))),
        Placement::Element => {
            let children: Vec<_> = element.children_named(field.tag()).collect();
            if !field.is_repeated() && children.len() > 1 {
                return Err(CodecError::Malformed(format!(
                    "element '{}' occurs {} times in '{}' but is single-valued",
                    field.tag(),
                    children.len(),
                    element.name()
                )));
            }
            let mut items = Vec::with_capacity(children.len());
            for child in children {
                if let Some(value) = item_value(child, field)? {
                    items.push(value);
                }
            }
            if field.is_repeated() {
                Ok((!items.is_empty()).then_some(Value::Array(items)))
            } else {
                Ok(items.pop())
            }
        }
    }
}

fn item_value(child: &Element, field: &FieldSpec) -> Result<Option<Value>> {
    match field.kind() {
        ValueKind::Structure(schema) => to_value(child, schema()).map(Some),
        _ => Ok(child.text().and_then(|v| scalar(field, v))),
    }
}

fn scalar(field: &FieldSpec, text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    let value = match field.kind() {
        ValueKind::Boolean => {
            parse_boolean(text).map_or_else(|| Value::String(text.to_owned()), Value::Bool)
        }
        _ => Value::String(text.to_owned()),
    };
    Some(value)
}
