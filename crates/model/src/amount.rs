//! Currency amounts.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `ActiveCurrencyAndAmount`: a positive decimal with its ISO 4217 currency
/// in the `Ccy` attribute.
///
/// Both parts are optional in memory so that an amount read off the wire
/// without a currency stays representable and fails validation instead of
/// decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveCurrencyAndAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ActiveCurrencyAndAmount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            currency: Some(currency.into()),
        }
    }
}

static ACTIVE_CURRENCY_AND_AMOUNT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("ActiveCurrencyAndAmount")
        .field(
            FieldSpec::decimal("Value", "Value")
                .required()
                .content()
                .with(amount_digits())
                .with(positive()),
        )
        .field(
            FieldSpec::text("Currency", "Ccy")
                .required()
                .attribute()
                .with(currency_code()),
        )
});

impl Node for ActiveCurrencyAndAmount {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Value" => Slot::display(self.value.as_ref()),
            "Currency" => Slot::text(self.currency.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for ActiveCurrencyAndAmount {
    fn schema() -> &'static Schema {
        &ACTIVE_CURRENCY_AND_AMOUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn summary(amount: &ActiveCurrencyAndAmount) -> Vec<(String, ConstraintKind)> {
        amount
            .validate()
            .err()
            .map(|errors| {
                errors
                    .iter()
                    .map(|e| (e.path.to_string(), e.kind))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn valid_amount() {
        assert!(summary(&ActiveCurrencyAndAmount::new(dec("1000.50"), "EUR")).is_empty());
    }

    #[test]
    fn zero_and_negative_are_range_violations() {
        for value in [Decimal::ZERO, dec("-5")] {
            assert_eq!(
                summary(&ActiveCurrencyAndAmount::new(value, "USD")),
                vec![("Value".to_string(), ConstraintKind::Range)]
            );
        }
    }

    #[test]
    fn unset_amount_is_not_zero() {
        let amount = ActiveCurrencyAndAmount {
            value: None,
            currency: Some("usd".into()),
        };
        assert_eq!(
            summary(&amount),
            vec![
                ("Value".to_string(), ConstraintKind::Presence),
                ("Currency".to_string(), ConstraintKind::DomainFormat),
            ]
        );
    }

    #[test]
    fn too_many_fraction_digits() {
        let amount = ActiveCurrencyAndAmount::new(dec("1.123456"), "EUR");
        assert_eq!(
            summary(&amount),
            vec![("Value".to_string(), ConstraintKind::Pattern)]
        );
    }
}
