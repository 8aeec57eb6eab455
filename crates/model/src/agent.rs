//! Financial institution identification.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codes::CodeOrProprietary;
use crate::party::PostalAddress24;

/// `BranchAndFinancialInstitutionIdentification6`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BranchAndFinancialInstitutionIdentification6 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_institution_id: Option<FinancialInstitutionIdentification18>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<BranchData3>,
}

impl BranchAndFinancialInstitutionIdentification6 {
    /// An agent identified by BIC alone.
    pub fn from_bic(bic: impl Into<String>) -> Self {
        Self {
            financial_institution_id: Some(FinancialInstitutionIdentification18 {
                bic_fi: Some(bic.into()),
                ..FinancialInstitutionIdentification18::default()
            }),
            branch_id: None,
        }
    }
}

static BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6: LazyLock<Schema> =
    LazyLock::new(|| {
        Schema::new("BranchAndFinancialInstitutionIdentification6")
            .field(
                FieldSpec::structure(
                    "FinancialInstitutionId",
                    "FinInstnId",
                    FinancialInstitutionIdentification18::schema,
                )
                .required(),
            )
            .field(FieldSpec::structure("BranchId", "BrnchId", BranchData3::schema))
    });

impl Node for BranchAndFinancialInstitutionIdentification6 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "FinancialInstitutionId" => Slot::node(self.financial_institution_id.as_ref()),
            "BranchId" => Slot::node(self.branch_id.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for BranchAndFinancialInstitutionIdentification6 {
    fn schema() -> &'static Schema {
        &BRANCH_AND_FINANCIAL_INSTITUTION_IDENTIFICATION_6
    }
}

/// `FinancialInstitutionIdentification18`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FinancialInstitutionIdentification18 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bic_fi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_system_member_id: Option<ClearingSystemMemberIdentification2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress24>,
}

static FINANCIAL_INSTITUTION_IDENTIFICATION_18: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("FinancialInstitutionIdentification18")
        .field(FieldSpec::text("BicFi", "BICFI").with(bic()))
        .field(FieldSpec::structure(
            "ClearingSystemMemberId",
            "ClrSysMmbId",
            ClearingSystemMemberIdentification2::schema,
        ))
        .field(FieldSpec::text("Lei", "LEI").with(lei()))
        .field(FieldSpec::text("Name", "Nm").with(max_text(140)))
        .field(FieldSpec::structure(
            "PostalAddress",
            "PstlAdr",
            PostalAddress24::schema,
        ))
});

impl Node for FinancialInstitutionIdentification18 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "BicFi" => Slot::text(self.bic_fi.as_deref()),
            "ClearingSystemMemberId" => Slot::node(self.clearing_system_member_id.as_ref()),
            "Lei" => Slot::text(self.lei.as_deref()),
            "Name" => Slot::text(self.name.as_deref()),
            "PostalAddress" => Slot::node(self.postal_address.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for FinancialInstitutionIdentification18 {
    fn schema() -> &'static Schema {
        &FINANCIAL_INSTITUTION_IDENTIFICATION_18
    }
}

/// `ClearingSystemMemberIdentification2`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ClearingSystemMemberIdentification2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_system_id: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

static CLEARING_SYSTEM_MEMBER_IDENTIFICATION_2: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("ClearingSystemMemberIdentification2")
        .field(FieldSpec::structure(
            "ClearingSystemId",
            "ClrSysId",
            CodeOrProprietary::schema,
        ))
        .field(FieldSpec::text("MemberId", "MmbId").required().with(max_text(35)))
});

impl Node for ClearingSystemMemberIdentification2 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "ClearingSystemId" => Slot::node(self.clearing_system_id.as_ref()),
            "MemberId" => Slot::text(self.member_id.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for ClearingSystemMemberIdentification2 {
    fn schema() -> &'static Schema {
        &CLEARING_SYSTEM_MEMBER_IDENTIFICATION_2
    }
}

/// `BranchData3`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BranchData3 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress24>,
}

static BRANCH_DATA_3: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("BranchData3")
        .field(FieldSpec::text("Id", "Id").with(max_text(35)))
        .field(FieldSpec::text("Lei", "LEI").with(lei()))
        .field(FieldSpec::text("Name", "Nm").with(max_text(140)))
        .field(FieldSpec::structure(
            "PostalAddress",
            "PstlAdr",
            PostalAddress24::schema,
        ))
});

impl Node for BranchData3 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Id" => Slot::text(self.id.as_deref()),
            "Lei" => Slot::text(self.lei.as_deref()),
            "Name" => Slot::text(self.name.as_deref()),
            "PostalAddress" => Slot::node(self.postal_address.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for BranchData3 {
    fn schema() -> &'static Schema {
        &BRANCH_DATA_3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("DEUTDEFF")]
    #[case("DEUTDEFF500")]
    fn bic_only_agent_is_valid(#[case] code: &str) {
        assert!(
            BranchAndFinancialInstitutionIdentification6::from_bic(code)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn missing_institution_and_bad_member_id() {
        let errors = BranchAndFinancialInstitutionIdentification6::default()
            .validate()
            .unwrap_err();
        assert_eq!(errors.paths(), ["FinancialInstitutionId"]);

        let agent = BranchAndFinancialInstitutionIdentification6 {
            financial_institution_id: Some(FinancialInstitutionIdentification18 {
                bic_fi: Some("deutdeff".into()),
                clearing_system_member_id: Some(ClearingSystemMemberIdentification2 {
                    clearing_system_id: Some(CodeOrProprietary::code("USABA")),
                    member_id: None,
                }),
                ..FinancialInstitutionIdentification18::default()
            }),
            branch_id: None,
        };
        let errors = agent.validate().unwrap_err();
        assert_eq!(
            errors.paths(),
            [
                "FinancialInstitutionId.BicFi",
                "FinancialInstitutionId.ClearingSystemMemberId.MemberId",
            ]
        );
    }
}
