//! [`Node`] view over `serde_json::Value`.
//!
//! Object keys are the in-memory field names, so a document produced by
//! serializing a typed message validates with the same schema and yields
//! the same violation paths. Choice alternatives are externally tagged
//! objects (`{"Iban": "..."}`), which the plain name lookup already covers.
//!
//! # Examples
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use isomsg_validator::prelude::*;
//! use serde_json::json;
//!
//! static AMOUNT: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::new("Amount")
//!         .field(FieldSpec::decimal("Value", "Value").required().with(positive()))
//!         .field(FieldSpec::text("Currency", "Ccy").required().with(currency_code()))
//! });
//!
//! let errors = validate(&json!({ "Value": "0", "Currency": "usd" }), &AMOUNT).unwrap_err();
//! assert_eq!(errors.paths(), ["Value", "Currency"]);
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::schema::{FieldSpec, Node, Slot};

impl Node for Value {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match self.get(field.name()) {
            Some(value) => to_slot(value),
            None => Slot::Unset,
        }
    }
}

fn to_slot(value: &Value) -> Slot<'_> {
    match value {
        Value::Null => Slot::Unset,
        Value::String(s) => Slot::Text(Cow::Borrowed(s)),
        Value::Number(n) => Slot::Text(Cow::Owned(n.to_string())),
        Value::Bool(true) => Slot::Text(Cow::Borrowed("true")),
        Value::Bool(false) => Slot::Text(Cow::Borrowed("false")),
        Value::Object(_) => Slot::Node(value),
        Value::Array(items) => Slot::List(items.iter().map(to_slot).collect()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::validate;
    use crate::foundation::ConstraintKind;
    use crate::schema::{ChoiceSpec, Schema};
    use crate::validators::{iban, max_text};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::LazyLock;

    static ACCOUNT_ID: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("AccountIdentification4").choice(ChoiceSpec::whole(vec![
            FieldSpec::text("Iban", "IBAN").with(iban()),
            FieldSpec::text("Other", "Othr").with(max_text(34)),
        ]))
    });

    fn account_id() -> &'static Schema {
        &ACCOUNT_ID
    }

    static ACCOUNT: LazyLock<Schema> = LazyLock::new(|| {
        Schema::new("CashAccount")
            .field(FieldSpec::structure("Id", "Id", account_id).required())
            .field(FieldSpec::text("Lines", "Ln").repeated(0, Some(2)).with(max_text(5)))
    });

    #[test]
    fn object_fields_and_choice() {
        let doc = json!({ "Id": { "Iban": "GB82WEST12345698765432" } });
        assert!(validate(&doc, &ACCOUNT).is_ok());
    }

    #[test]
    fn choice_with_both_alternatives() {
        let doc = json!({ "Id": { "Iban": "GB82WEST12345698765432", "Other": "123" } });
        let errors = validate(&doc, &ACCOUNT).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.errors()[0].kind, ConstraintKind::ChoiceCardinality);
        assert_eq!(errors.errors()[0].path.to_string(), "Id");
    }

    #[test]
    fn arrays_are_repeated_fields() {
        let doc = json!({ "Id": { "Other": "1" }, "Lines": ["a", "toolong", "b"] });
        let errors = validate(&doc, &ACCOUNT).unwrap_err();
        assert_eq!(errors.paths(), ["Lines", "Lines[1]"]);
    }

    #[test]
    fn empty_array_items_keep_later_indices() {
        let doc = json!({ "Id": { "Other": "1" }, "Lines": ["ok", "", "toolong"] });
        let errors = validate(&doc, &ACCOUNT).unwrap_err();
        assert_eq!(errors.paths(), ["Lines[2]"]);
        assert_eq!(errors.errors()[0].kind, ConstraintKind::Length);
    }

    #[test]
    fn null_counts_as_unset() {
        let doc = json!({ "Id": null });
        let errors = validate(&doc, &ACCOUNT).unwrap_err();
        assert_eq!(errors.errors()[0].kind, ConstraintKind::Presence);
    }

    #[test]
    fn scalar_where_structure_expected() {
        let doc = json!({ "Id": "GB82WEST12345698765432" });
        let errors = validate(&doc, &ACCOUNT).unwrap_err();
        assert_eq!(errors.errors()[0].kind, ConstraintKind::Pattern);
    }
}
