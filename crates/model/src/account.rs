//! Cash accounts.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codes::CodeOrProprietary;

/// `CashAccount38`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CashAccount38 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<AccountIdentification4Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<ProxyAccountIdentification1>,
}

impl CashAccount38 {
    pub fn from_iban(iban: impl Into<String>) -> Self {
        Self {
            identification: Some(AccountIdentification4Choice::Iban(iban.into())),
            ..Self::default()
        }
    }
}

static CASH_ACCOUNT_38: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("CashAccount38")
        .field(
            FieldSpec::structure(
                "Identification",
                "Id",
                AccountIdentification4Choice::schema,
            )
            .required(),
        )
        .field(FieldSpec::structure("AccountType", "Tp", CodeOrProprietary::schema))
        .field(FieldSpec::text("Currency", "Ccy").with(currency_code()))
        .field(FieldSpec::text("Name", "Nm").with(max_text(70)))
        .field(FieldSpec::structure(
            "Proxy",
            "Prxy",
            ProxyAccountIdentification1::schema,
        ))
});

impl Node for CashAccount38 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Identification" => Slot::node(self.identification.as_ref()),
            "AccountType" => Slot::node(self.account_type.as_ref()),
            "Currency" => Slot::text(self.currency.as_deref()),
            "Name" => Slot::text(self.name.as_deref()),
            "Proxy" => Slot::node(self.proxy.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for CashAccount38 {
    fn schema() -> &'static Schema {
        &CASH_ACCOUNT_38
    }
}

/// `AccountIdentification4Choice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountIdentification4Choice {
    Iban(String),
    Other(GenericAccountIdentification1),
}

static ACCOUNT_IDENTIFICATION_4_CHOICE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("AccountIdentification4Choice").choice(ChoiceSpec::whole(vec![
        FieldSpec::text("Iban", "IBAN").with(iban()),
        FieldSpec::structure("Other", "Othr", GenericAccountIdentification1::schema),
    ]))
});

impl Node for AccountIdentification4Choice {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match (self, field.name()) {
            (Self::Iban(iban), "Iban") => Slot::Text(iban.into()),
            (Self::Other(other), "Other") => Slot::Node(other),
            _ => Slot::Unset,
        }
    }
}

impl Structure for AccountIdentification4Choice {
    fn schema() -> &'static Schema {
        &ACCOUNT_IDENTIFICATION_4_CHOICE
    }
}

/// `GenericAccountIdentification1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenericAccountIdentification1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

static GENERIC_ACCOUNT_IDENTIFICATION_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("GenericAccountIdentification1")
        .field(FieldSpec::text("Id", "Id").required().with(max_text(34)))
        .field(FieldSpec::structure(
            "SchemeName",
            "SchmeNm",
            CodeOrProprietary::schema,
        ))
        .field(FieldSpec::text("Issuer", "Issr").with(max_text(35)))
});

impl Node for GenericAccountIdentification1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Id" => Slot::text(self.id.as_deref()),
            "SchemeName" => Slot::node(self.scheme_name.as_ref()),
            "Issuer" => Slot::text(self.issuer.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for GenericAccountIdentification1 {
    fn schema() -> &'static Schema {
        &GENERIC_ACCOUNT_IDENTIFICATION_1
    }
}

/// `ProxyAccountIdentification1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProxyAccountIdentification1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_type: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

static PROXY_ACCOUNT_IDENTIFICATION_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("ProxyAccountIdentification1")
        .field(FieldSpec::structure("ProxyType", "Tp", CodeOrProprietary::schema))
        .field(FieldSpec::text("Id", "Id").required().with(max_text(2048)))
});

impl Node for ProxyAccountIdentification1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "ProxyType" => Slot::node(self.proxy_type.as_ref()),
            "Id" => Slot::text(self.id.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for ProxyAccountIdentification1 {
    fn schema() -> &'static Schema {
        &PROXY_ACCOUNT_IDENTIFICATION_1
    }
}
