//! Payment identification, type, settlement, charges and remittance
//! components shared by the credit transfer transaction and group header.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::account::CashAccount38;
use crate::agent::BranchAndFinancialInstitutionIdentification6;
use crate::amount::ActiveCurrencyAndAmount;
use crate::codes::{
    CLEARING_CHANNEL, CREDITOR_AGENT_INSTRUCTION, CodeOrProprietary, NEXT_AGENT_INSTRUCTION, PRIORITY,
    SETTLEMENT_METHOD,
};

// ============================================================================
// PAYMENT IDENTIFICATION
// ============================================================================

/// `PaymentIdentification7`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentIdentification7 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_to_end_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uetr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_system_reference: Option<String>,
}

impl PaymentIdentification7 {
    pub fn end_to_end(id: impl Into<String>) -> Self {
        Self {
            end_to_end_id: Some(id.into()),
            ..Self::default()
        }
    }
}

static PAYMENT_IDENTIFICATION_7: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("PaymentIdentification7")
        .field(FieldSpec::text("InstructionId", "InstrId").with(max_text(35)))
        .field(FieldSpec::text("EndToEndId", "EndToEndId").required().with(max_text(35)))
        .field(FieldSpec::text("TransactionId", "TxId").with(max_text(35)))
        .field(FieldSpec::text("Uetr", "UETR").with(uuid_v4()))
        .field(FieldSpec::text("ClearingSystemReference", "ClrSysRef").with(max_text(35)))
});

impl Node for PaymentIdentification7 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "InstructionId" => Slot::text(self.instruction_id.as_deref()),
            "EndToEndId" => Slot::text(self.end_to_end_id.as_deref()),
            "TransactionId" => Slot::text(self.transaction_id.as_deref()),
            "Uetr" => Slot::text(self.uetr.as_deref()),
            "ClearingSystemReference" => Slot::text(self.clearing_system_reference.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for PaymentIdentification7 {
    fn schema() -> &'static Schema {
        &PAYMENT_IDENTIFICATION_7
    }
}

// ============================================================================
// PAYMENT TYPE
// ============================================================================

/// `PaymentTypeInformation28`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PaymentTypeInformation28 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_channel: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_level: Vec<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_instrument: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_purpose: Option<CodeOrProprietary>,
}

static PAYMENT_TYPE_INFORMATION_28: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("PaymentTypeInformation28")
        .field(FieldSpec::text("InstructionPriority", "InstrPrty").with(enumeration(PRIORITY)))
        .field(FieldSpec::text("ClearingChannel", "ClrChanl").with(enumeration(CLEARING_CHANNEL)))
        .field(
            FieldSpec::structure("ServiceLevel", "SvcLvl", CodeOrProprietary::schema)
                .repeated(0, None),
        )
        .field(FieldSpec::structure(
            "LocalInstrument",
            "LclInstrm",
            CodeOrProprietary::schema,
        ))
        .field(FieldSpec::structure(
            "CategoryPurpose",
            "CtgyPurp",
            CodeOrProprietary::schema,
        ))
});

impl Node for PaymentTypeInformation28 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "InstructionPriority" => Slot::text(self.instruction_priority.as_deref()),
            "ClearingChannel" => Slot::text(self.clearing_channel.as_deref()),
            "ServiceLevel" => Slot::nodes(&self.service_level),
            "LocalInstrument" => Slot::node(self.local_instrument.as_ref()),
            "CategoryPurpose" => Slot::node(self.category_purpose.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for PaymentTypeInformation28 {
    fn schema() -> &'static Schema {
        &PAYMENT_TYPE_INFORMATION_28
    }
}

// ============================================================================
// SETTLEMENT
// ============================================================================

/// `SettlementInstruction7`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SettlementInstruction7 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearing_system: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructing_reimbursement_agent: Option<BranchAndFinancialInstitutionIdentification6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructing_reimbursement_agent_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_reimbursement_agent: Option<BranchAndFinancialInstitutionIdentification6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_reimbursement_agent_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_reimbursement_agent: Option<BranchAndFinancialInstitutionIdentification6>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_reimbursement_agent_account: Option<CashAccount38>,
}

impl SettlementInstruction7 {
    pub fn method(method: impl Into<String>) -> Self {
        Self {
            settlement_method: Some(method.into()),
            ..Self::default()
        }
    }
}

static SETTLEMENT_INSTRUCTION_7: LazyLock<Schema> = LazyLock::new(|| {
    type Agent = BranchAndFinancialInstitutionIdentification6;

    Schema::new("SettlementInstruction7")
        .field(
            FieldSpec::text("SettlementMethod", "SttlmMtd")
                .required()
                .with(enumeration(SETTLEMENT_METHOD)),
        )
        .field(FieldSpec::structure(
            "SettlementAccount",
            "SttlmAcct",
            CashAccount38::schema,
        ))
        .field(FieldSpec::structure("ClearingSystem", "ClrSys", CodeOrProprietary::schema))
        .field(FieldSpec::structure(
            "InstructingReimbursementAgent",
            "InstgRmbrsmntAgt",
            Agent::schema,
        ))
        .field(FieldSpec::structure(
            "InstructingReimbursementAgentAccount",
            "InstgRmbrsmntAgtAcct",
            CashAccount38::schema,
        ))
        .field(FieldSpec::structure(
            "InstructedReimbursementAgent",
            "InstdRmbrsmntAgt",
            Agent::schema,
        ))
        .field(FieldSpec::structure(
            "InstructedReimbursementAgentAccount",
            "InstdRmbrsmntAgtAcct",
            CashAccount38::schema,
        ))
        .field(FieldSpec::structure(
            "ThirdReimbursementAgent",
            "ThrdRmbrsmntAgt",
            Agent::schema,
        ))
        .field(FieldSpec::structure(
            "ThirdReimbursementAgentAccount",
            "ThrdRmbrsmntAgtAcct",
            CashAccount38::schema,
        ))
});

impl Node for SettlementInstruction7 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "SettlementMethod" => Slot::text(self.settlement_method.as_deref()),
            "SettlementAccount" => Slot::node(self.settlement_account.as_ref()),
            "ClearingSystem" => Slot::node(self.clearing_system.as_ref()),
            "InstructingReimbursementAgent" => {
                Slot::node(self.instructing_reimbursement_agent.as_ref())
            }
            "InstructingReimbursementAgentAccount" => {
                Slot::node(self.instructing_reimbursement_agent_account.as_ref())
            }
            "InstructedReimbursementAgent" => {
                Slot::node(self.instructed_reimbursement_agent.as_ref())
            }
            "InstructedReimbursementAgentAccount" => {
                Slot::node(self.instructed_reimbursement_agent_account.as_ref())
            }
            "ThirdReimbursementAgent" => Slot::node(self.third_reimbursement_agent.as_ref()),
            "ThirdReimbursementAgentAccount" => {
                Slot::node(self.third_reimbursement_agent_account.as_ref())
            }
            _ => Slot::Unset,
        }
    }
}

impl Structure for SettlementInstruction7 {
    fn schema() -> &'static Schema {
        &SETTLEMENT_INSTRUCTION_7
    }
}

/// `SettlementDateTimeIndication1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SettlementDateTimeIndication1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_date_time: Option<String>,
}

static SETTLEMENT_DATE_TIME_INDICATION_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("SettlementDateTimeIndication1")
        .field(FieldSpec::text("DebitDateTime", "DbtDtTm").with(iso_date_time()))
        .field(FieldSpec::text("CreditDateTime", "CdtDtTm").with(iso_date_time()))
});

impl Node for SettlementDateTimeIndication1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "DebitDateTime" => Slot::text(self.debit_date_time.as_deref()),
            "CreditDateTime" => Slot::text(self.credit_date_time.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for SettlementDateTimeIndication1 {
    fn schema() -> &'static Schema {
        &SETTLEMENT_DATE_TIME_INDICATION_1
    }
}

// ============================================================================
// CHARGES
// ============================================================================

/// `Charges7`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Charges7 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<ActiveCurrencyAndAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<BranchAndFinancialInstitutionIdentification6>,
}

static CHARGES_7: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("Charges7")
        .field(FieldSpec::structure("Amount", "Amt", ActiveCurrencyAndAmount::schema).required())
        .field(
            FieldSpec::structure(
                "Agent",
                "Agt",
                BranchAndFinancialInstitutionIdentification6::schema,
            )
            .required(),
        )
});

impl Node for Charges7 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Amount" => Slot::node(self.amount.as_ref()),
            "Agent" => Slot::node(self.agent.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for Charges7 {
    fn schema() -> &'static Schema {
        &CHARGES_7
    }
}

// ============================================================================
// AGENT INSTRUCTIONS
// ============================================================================

/// `InstructionForCreditorAgent1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructionForCreditorAgent1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_information: Option<String>,
}

static INSTRUCTION_FOR_CREDITOR_AGENT_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("InstructionForCreditorAgent1")
        .field(FieldSpec::text("Code", "Cd").with(enumeration(CREDITOR_AGENT_INSTRUCTION)))
        .field(FieldSpec::text("InstructionInformation", "InstrInf").with(max_text(140)))
});

impl Node for InstructionForCreditorAgent1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Code" => Slot::text(self.code.as_deref()),
            "InstructionInformation" => Slot::text(self.instruction_information.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for InstructionForCreditorAgent1 {
    fn schema() -> &'static Schema {
        &INSTRUCTION_FOR_CREDITOR_AGENT_1
    }
}

/// `InstructionForNextAgent1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructionForNextAgent1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_information: Option<String>,
}

static INSTRUCTION_FOR_NEXT_AGENT_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("InstructionForNextAgent1")
        .field(FieldSpec::text("Code", "Cd").with(enumeration(NEXT_AGENT_INSTRUCTION)))
        .field(FieldSpec::text("InstructionInformation", "InstrInf").with(max_text(140)))
});

impl Node for InstructionForNextAgent1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Code" => Slot::text(self.code.as_deref()),
            "InstructionInformation" => Slot::text(self.instruction_information.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for InstructionForNextAgent1 {
    fn schema() -> &'static Schema {
        &INSTRUCTION_FOR_NEXT_AGENT_1
    }
}

// ============================================================================
// REMITTANCE
// ============================================================================

/// `RemittanceInformation16`, unstructured lines only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RemittanceInformation16 {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unstructured: Vec<String>,
}

impl RemittanceInformation16 {
    pub fn unstructured(line: impl Into<String>) -> Self {
        Self {
            unstructured: vec![line.into()],
        }
    }
}

static REMITTANCE_INFORMATION_16: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("RemittanceInformation16").field(
        FieldSpec::text("Unstructured", "Ustrd")
            .repeated(0, None)
            .with(max_text(140)),
    )
});

impl Node for RemittanceInformation16 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Unstructured" => Slot::texts(&self.unstructured),
            _ => Slot::Unset,
        }
    }
}

impl Structure for RemittanceInformation16 {
    fn schema() -> &'static Schema {
        &REMITTANCE_INFORMATION_16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Some("eb6305c9-1f7f-49de-aed0-16487c27b42d"), true)]
    #[case(Some("EB6305C9-1F7F-49DE-AED0-16487C27B42D"), false)]
    #[case(Some("eb6305c9-1f7f-19de-aed0-16487c27b42d"), false)]
    #[case(None, true)]
    fn uetr_is_lowercase_uuid_v4(#[case] uetr: Option<&str>, #[case] ok: bool) {
        let id = PaymentIdentification7 {
            uetr: uetr.map(str::to_owned),
            ..PaymentIdentification7::end_to_end("E2E-1")
        };
        assert_eq!(id.validate().is_ok(), ok);
    }

    #[test]
    fn settlement_method_must_be_a_known_code() {
        assert!(SettlementInstruction7::method("CLRG").validate().is_ok());

        let errors = SettlementInstruction7::method("WIRE").validate().unwrap_err();
        assert_eq!(errors.paths(), ["SettlementMethod"]);
        assert_eq!(errors.errors()[0].kind, ConstraintKind::Enumeration);

        let errors = SettlementInstruction7::default().validate().unwrap_err();
        assert_eq!(errors.errors()[0].kind, ConstraintKind::Presence);
    }

    #[test]
    fn charges_require_amount_and_agent() {
        let errors = Charges7::default().validate().unwrap_err();
        assert_eq!(errors.paths(), ["Amount", "Agent"]);
    }

    #[test]
    fn service_levels_are_indexed() {
        let info = PaymentTypeInformation28 {
            instruction_priority: Some("NORM".into()),
            service_level: vec![
                CodeOrProprietary::code("SEPA"),
                CodeOrProprietary::proprietary("x".repeat(36)),
            ],
            ..PaymentTypeInformation28::default()
        };
        let errors = info.validate().unwrap_err();
        assert_eq!(errors.paths(), ["ServiceLevel[1].Proprietary"]);
    }

    #[test]
    fn remittance_lines_are_bounded() {
        let info = RemittanceInformation16 {
            unstructured: vec!["Invoice 42".into(), "y".repeat(141)],
        };
        let errors = info.validate().unwrap_err();
        assert_eq!(errors.paths(), ["Unstructured[1]"]);
    }
}
