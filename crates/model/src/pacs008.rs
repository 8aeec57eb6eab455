//! `pacs.008.001.08` FI to FI customer credit transfer.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use isomsg_codec::MessageDefinition;
use isomsg_validator::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::CashAccount38;
use crate::agent::BranchAndFinancialInstitutionIdentification6;
use crate::amount::ActiveCurrencyAndAmount;
use crate::codes::{CHARGE_BEARER, CodeOrProprietary, SETTLEMENT_PRIORITY, max15_numeric_text};
use crate::party::PartyIdentification135;
use crate::payment::{
    Charges7, InstructionForCreditorAgent1, InstructionForNextAgent1, PaymentIdentification7,
    PaymentTypeInformation28, RemittanceInformation16, SettlementDateTimeIndication1,
    SettlementInstruction7,
};

type Agent = BranchAndFinancialInstitutionIdentification6;

// ============================================================================
// MESSAGE
// ============================================================================

/// `FIToFICustomerCreditTransferV08`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FIToFICustomerCreditTransferV08 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_header: Option<GroupHeader93>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub credit_transfer_transaction_info: Vec<CreditTransferTransaction39>,
}

impl FIToFICustomerCreditTransferV08 {
    /// A message over `transactions` whose header counts them.
    ///
    /// The header's `NumberOfTransactions` is overwritten with the
    /// transaction count.
    pub fn new(mut header: GroupHeader93, transactions: Vec<CreditTransferTransaction39>) -> Self {
        header.number_of_transactions = Some(transactions.len().to_string());
        Self {
            group_header: Some(header),
            credit_transfer_transaction_info: transactions,
        }
    }
}

static FI_TO_FI_CUSTOMER_CREDIT_TRANSFER_V08: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("FIToFICustomerCreditTransferV08")
        .field(FieldSpec::structure("GroupHeader", "GrpHdr", GroupHeader93::schema).required())
        .field(
            FieldSpec::structure(
                "CreditTransferTransactionInfo",
                "CdtTrfTxInf",
                CreditTransferTransaction39::schema,
            )
            .required()
            .repeated(1, None),
        )
});

impl Node for FIToFICustomerCreditTransferV08 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "GroupHeader" => Slot::node(self.group_header.as_ref()),
            "CreditTransferTransactionInfo" => Slot::nodes(&self.credit_transfer_transaction_info),
            _ => Slot::Unset,
        }
    }
}

impl Structure for FIToFICustomerCreditTransferV08 {
    fn schema() -> &'static Schema {
        &FI_TO_FI_CUSTOMER_CREDIT_TRANSFER_V08
    }
}

impl MessageDefinition for FIToFICustomerCreditTransferV08 {
    const NAMESPACE: &'static str = "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08";
    const ROOT: &'static str = "FIToFICstmrCdtTrf";
}

// ============================================================================
// GROUP HEADER
// ============================================================================

/// `GroupHeader93`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupHeader93 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_booking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_transactions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_sum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_interbank_settlement_amount: Option<ActiveCurrencyAndAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_information: Option<SettlementInstruction7>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation28>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructing_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_agent: Option<Agent>,
}

impl GroupHeader93 {
    pub fn new(
        message_id: impl Into<String>,
        created: NaiveDateTime,
        settlement: SettlementInstruction7,
    ) -> Self {
        Self {
            message_id: Some(message_id.into()),
            creation_date_time: Some(format_iso_date_time(created)),
            number_of_transactions: Some("1".into()),
            settlement_information: Some(settlement),
            ..Self::default()
        }
    }

    /// The creation timestamp, if set and well formed.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.creation_date_time.as_deref().and_then(parse_iso_date_time)
    }
}

static GROUP_HEADER_93: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("GroupHeader93")
        .field(FieldSpec::text("MessageId", "MsgId").required().with(max_text(35)))
        .field(
            FieldSpec::text("CreationDateTime", "CreDtTm")
                .required()
                .with(iso_date_time()),
        )
        .field(FieldSpec::boolean("BatchBooking", "BtchBookg"))
        .field(
            FieldSpec::text("NumberOfTransactions", "NbOfTxs")
                .required()
                .with(max15_numeric_text()),
        )
        .field(FieldSpec::decimal("ControlSum", "CtrlSum").with(decimal_digits(18, 17)))
        .field(FieldSpec::structure(
            "TotalInterbankSettlementAmount",
            "TtlIntrBkSttlmAmt",
            ActiveCurrencyAndAmount::schema,
        ))
        .field(FieldSpec::text("InterbankSettlementDate", "IntrBkSttlmDt").with(iso_date()))
        .field(
            FieldSpec::structure(
                "SettlementInformation",
                "SttlmInf",
                SettlementInstruction7::schema,
            )
            .required(),
        )
        .field(FieldSpec::structure(
            "PaymentTypeInformation",
            "PmtTpInf",
            PaymentTypeInformation28::schema,
        ))
        .field(FieldSpec::structure("InstructingAgent", "InstgAgt", Agent::schema))
        .field(FieldSpec::structure("InstructedAgent", "InstdAgt", Agent::schema))
});

impl Node for GroupHeader93 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "MessageId" => Slot::text(self.message_id.as_deref()),
            "CreationDateTime" => Slot::text(self.creation_date_time.as_deref()),
            "BatchBooking" => Slot::flag(self.batch_booking),
            "NumberOfTransactions" => Slot::text(self.number_of_transactions.as_deref()),
            "ControlSum" => Slot::display(self.control_sum.as_ref()),
            "TotalInterbankSettlementAmount" => {
                Slot::node(self.total_interbank_settlement_amount.as_ref())
            }
            "InterbankSettlementDate" => Slot::text(self.interbank_settlement_date.as_deref()),
            "SettlementInformation" => Slot::node(self.settlement_information.as_ref()),
            "PaymentTypeInformation" => Slot::node(self.payment_type_information.as_ref()),
            "InstructingAgent" => Slot::node(self.instructing_agent.as_ref()),
            "InstructedAgent" => Slot::node(self.instructed_agent.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for GroupHeader93 {
    fn schema() -> &'static Schema {
        &GROUP_HEADER_93
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// `CreditTransferTransaction39`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreditTransferTransaction39 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentIdentification7>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type_information: Option<PaymentTypeInformation28>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_amount: Option<ActiveCurrencyAndAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interbank_settlement_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_time_indication: Option<SettlementDateTimeIndication1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pooling_adjustment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_amount: Option<ActiveCurrencyAndAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charge_bearer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub charges_information: Vec<Charges7>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent1: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent1_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent2: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent2_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent3: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_instructing_agent3_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructing_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructed_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent1: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent1_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent2: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent2_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent3: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intermediary_agent3_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimate_debtor: Option<PartyIdentification135>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiating_party: Option<PartyIdentification135>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor: Option<PartyIdentification135>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debtor_agent_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_agent: Option<Agent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_agent_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor: Option<PartyIdentification135>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_account: Option<CashAccount38>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultimate_creditor: Option<PartyIdentification135>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instruction_for_creditor_agent: Vec<InstructionForCreditorAgent1>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instruction_for_next_agent: Vec<InstructionForNextAgent1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remittance_information: Option<RemittanceInformation16>,
}

static CREDIT_TRANSFER_TRANSACTION_39: LazyLock<Schema> = LazyLock::new(|| {
    let agent = |name, tag| FieldSpec::structure(name, tag, Agent::schema);
    let account = |name, tag| FieldSpec::structure(name, tag, CashAccount38::schema);
    let party = |name, tag| FieldSpec::structure(name, tag, PartyIdentification135::schema);

    Schema::new("CreditTransferTransaction39")
        .field(
            FieldSpec::structure("PaymentId", "PmtId", PaymentIdentification7::schema).required(),
        )
        .field(FieldSpec::structure(
            "PaymentTypeInformation",
            "PmtTpInf",
            PaymentTypeInformation28::schema,
        ))
        .field(
            FieldSpec::structure(
                "InterbankSettlementAmount",
                "IntrBkSttlmAmt",
                ActiveCurrencyAndAmount::schema,
            )
            .required(),
        )
        .field(FieldSpec::text("InterbankSettlementDate", "IntrBkSttlmDt").with(iso_date()))
        .field(
            FieldSpec::text("SettlementPriority", "SttlmPrty")
                .with(enumeration(SETTLEMENT_PRIORITY)),
        )
        .field(FieldSpec::structure(
            "SettlementTimeIndication",
            "SttlmTmIndctn",
            SettlementDateTimeIndication1::schema,
        ))
        .field(FieldSpec::text("AcceptanceDateTime", "AccptncDtTm").with(iso_date_time()))
        .field(FieldSpec::text("PoolingAdjustmentDate", "PoolgAdjstmntDt").with(iso_date()))
        .field(FieldSpec::structure(
            "InstructedAmount",
            "InstdAmt",
            ActiveCurrencyAndAmount::schema,
        ))
        .field(FieldSpec::decimal("ExchangeRate", "XchgRate").with(decimal_digits(11, 10)))
        .field(
            FieldSpec::text("ChargeBearer", "ChrgBr")
                .required()
                .with(enumeration(CHARGE_BEARER)),
        )
        .field(
            FieldSpec::structure("ChargesInformation", "ChrgsInf", Charges7::schema)
                .repeated(0, None),
        )
        .field(agent("PreviousInstructingAgent1", "PrvsInstgAgt1"))
        .field(account("PreviousInstructingAgent1Account", "PrvsInstgAgt1Acct"))
        .field(agent("PreviousInstructingAgent2", "PrvsInstgAgt2"))
        .field(account("PreviousInstructingAgent2Account", "PrvsInstgAgt2Acct"))
        .field(agent("PreviousInstructingAgent3", "PrvsInstgAgt3"))
        .field(account("PreviousInstructingAgent3Account", "PrvsInstgAgt3Acct"))
        .field(agent("InstructingAgent", "InstgAgt"))
        .field(agent("InstructedAgent", "InstdAgt"))
        .field(agent("IntermediaryAgent1", "IntrmyAgt1"))
        .field(account("IntermediaryAgent1Account", "IntrmyAgt1Acct"))
        .field(agent("IntermediaryAgent2", "IntrmyAgt2"))
        .field(account("IntermediaryAgent2Account", "IntrmyAgt2Acct"))
        .field(agent("IntermediaryAgent3", "IntrmyAgt3"))
        .field(account("IntermediaryAgent3Account", "IntrmyAgt3Acct"))
        .field(party("UltimateDebtor", "UltmtDbtr"))
        .field(party("InitiatingParty", "InitgPty"))
        .field(party("Debtor", "Dbtr").required())
        .field(account("DebtorAccount", "DbtrAcct"))
        .field(agent("DebtorAgent", "DbtrAgt").required())
        .field(account("DebtorAgentAccount", "DbtrAgtAcct"))
        .field(agent("CreditorAgent", "CdtrAgt").required())
        .field(account("CreditorAgentAccount", "CdtrAgtAcct"))
        .field(party("Creditor", "Cdtr").required())
        .field(account("CreditorAccount", "CdtrAcct"))
        .field(party("UltimateCreditor", "UltmtCdtr"))
        .field(
            FieldSpec::structure(
                "InstructionForCreditorAgent",
                "InstrForCdtrAgt",
                InstructionForCreditorAgent1::schema,
            )
            .repeated(0, None),
        )
        .field(
            FieldSpec::structure(
                "InstructionForNextAgent",
                "InstrForNxtAgt",
                InstructionForNextAgent1::schema,
            )
            .repeated(0, Some(6)),
        )
        .field(FieldSpec::structure("Purpose", "Purp", CodeOrProprietary::schema))
        .field(FieldSpec::structure(
            "RemittanceInformation",
            "RmtInf",
            RemittanceInformation16::schema,
        ))
});

impl Node for CreditTransferTransaction39 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "PaymentId" => Slot::node(self.payment_id.as_ref()),
            "PaymentTypeInformation" => Slot::node(self.payment_type_information.as_ref()),
            "InterbankSettlementAmount" => Slot::node(self.interbank_settlement_amount.as_ref()),
            "InterbankSettlementDate" => Slot::text(self.interbank_settlement_date.as_deref()),
            "SettlementPriority" => Slot::text(self.settlement_priority.as_deref()),
            "SettlementTimeIndication" => Slot::node(self.settlement_time_indication.as_ref()),
            "AcceptanceDateTime" => Slot::text(self.acceptance_date_time.as_deref()),
            "PoolingAdjustmentDate" => Slot::text(self.pooling_adjustment_date.as_deref()),
            "InstructedAmount" => Slot::node(self.instructed_amount.as_ref()),
            "ExchangeRate" => Slot::display(self.exchange_rate.as_ref()),
            "ChargeBearer" => Slot::text(self.charge_bearer.as_deref()),
            "ChargesInformation" => Slot::nodes(&self.charges_information),
            "PreviousInstructingAgent1" => Slot::node(self.previous_instructing_agent1.as_ref()),
            "PreviousInstructingAgent1Account" => {
                Slot::node(self.previous_instructing_agent1_account.as_ref())
            }
            "PreviousInstructingAgent2" => Slot::node(self.previous_instructing_agent2.as_ref()),
            "PreviousInstructingAgent2Account" => {
                Slot::node(self.previous_instructing_agent2_account.as_ref())
            }
            "PreviousInstructingAgent3" => Slot::node(self.previous_instructing_agent3.as_ref()),
            "PreviousInstructingAgent3Account" => {
                Slot::node(self.previous_instructing_agent3_account.as_ref())
            }
            "InstructingAgent" => Slot::node(self.instructing_agent.as_ref()),
            "InstructedAgent" => Slot::node(self.instructed_agent.as_ref()),
            "IntermediaryAgent1" => Slot::node(self.intermediary_agent1.as_ref()),
            "IntermediaryAgent1Account" => Slot::node(self.intermediary_agent1_account.as_ref()),
            "IntermediaryAgent2" => Slot::node(self.intermediary_agent2.as_ref()),
            "IntermediaryAgent2Account" => Slot::node(self.intermediary_agent2_account.as_ref()),
            "IntermediaryAgent3" => Slot::node(self.intermediary_agent3.as_ref()),
            "IntermediaryAgent3Account" => Slot::node(self.intermediary_agent3_account.as_ref()),
            "UltimateDebtor" => Slot::node(self.ultimate_debtor.as_ref()),
            "InitiatingParty" => Slot::node(self.initiating_party.as_ref()),
            "Debtor" => Slot::node(self.debtor.as_ref()),
            "DebtorAccount" => Slot::node(self.debtor_account.as_ref()),
            "DebtorAgent" => Slot::node(self.debtor_agent.as_ref()),
            "DebtorAgentAccount" => Slot::node(self.debtor_agent_account.as_ref()),
            "CreditorAgent" => Slot::node(self.creditor_agent.as_ref()),
            "CreditorAgentAccount" => Slot::node(self.creditor_agent_account.as_ref()),
            "Creditor" => Slot::node(self.creditor.as_ref()),
            "CreditorAccount" => Slot::node(self.creditor_account.as_ref()),
            "UltimateCreditor" => Slot::node(self.ultimate_creditor.as_ref()),
            "InstructionForCreditorAgent" => Slot::nodes(&self.instruction_for_creditor_agent),
            "InstructionForNextAgent" => Slot::nodes(&self.instruction_for_next_agent),
            "Purpose" => Slot::node(self.purpose.as_ref()),
            "RemittanceInformation" => Slot::node(self.remittance_information.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for CreditTransferTransaction39 {
    fn schema() -> &'static Schema {
        &CREDIT_TRANSFER_TRANSACTION_39
    }
}
