//! End-to-end checks on `pacs.008.001.08` credit transfers: typed
//! validation, XML and JSON round trips, and wire-level validation.

use chrono::{NaiveDate, NaiveDateTime};
use isomsg_codec::{
    CodecConfig, CodecError, decode_document, decode_json, encode_document, encode_json,
    validate_document,
};
use isomsg_model::prelude::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;

type Agent = BranchAndFinancialInstitutionIdentification6;

const CREDITOR_IBAN: &str = "FR1420041010050500013M02606";

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn created() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

fn transaction(n: usize) -> CreditTransferTransaction39 {
    CreditTransferTransaction39 {
        payment_id: Some(PaymentIdentification7 {
            instruction_id: Some(format!("INSTR-{n}")),
            end_to_end_id: Some(format!("E2E-{n}")),
            uetr: Some("eb6305c9-1f7f-49de-aed0-16487c27b42d".into()),
            ..PaymentIdentification7::default()
        }),
        interbank_settlement_amount: Some(ActiveCurrencyAndAmount::new(dec("1500.00"), "EUR")),
        interbank_settlement_date: Some("2024-03-01".into()),
        charge_bearer: Some("SLEV".into()),
        debtor: Some(PartyIdentification135::named("ACME Corp")),
        debtor_account: Some(CashAccount38::from_iban("DE89370400440532013000")),
        debtor_agent: Some(Agent::from_bic("DEUTDEFF")),
        creditor_agent: Some(Agent::from_bic("BNPAFRPP")),
        creditor: Some(PartyIdentification135::named("Widget SARL")),
        creditor_account: Some(CashAccount38::from_iban(CREDITOR_IBAN)),
        remittance_information: Some(RemittanceInformation16::unstructured("Invoice 42")),
        ..CreditTransferTransaction39::default()
    }
}

fn message(transactions: usize) -> FIToFICustomerCreditTransferV08 {
    let header = GroupHeader93::new("MSG-20240301-1", created(), SettlementInstruction7::method("CLRG"));
    FIToFICustomerCreditTransferV08::new(header, (0..transactions).map(transaction).collect())
}

fn summary(errors: &ValidationErrors) -> Vec<(String, ConstraintKind)> {
    errors
        .iter()
        .map(|e| (e.path.to_string(), e.kind))
        .collect()
}

// ── typed validation ───────────────────────────────────────────────────────

#[test]
fn valid_message_has_no_violations() {
    assert!(message(3).validate().is_ok());
}

#[test]
fn missing_charge_bearer_and_long_creditor_name() {
    let mut tx = transaction(0);
    tx.charge_bearer = None;
    tx.creditor = Some(PartyIdentification135::named("C".repeat(141)));

    let errors = tx.validate().unwrap_err();
    assert_eq!(
        summary(&errors),
        vec![
            ("ChargeBearer".to_string(), ConstraintKind::Presence),
            ("Creditor.Name".to_string(), ConstraintKind::Length),
        ]
    );
}

#[test]
fn violation_paths_carry_transaction_index() {
    let mut message = message(3);
    message.credit_transfer_transaction_info[2].debtor =
        Some(PartyIdentification135::named("D".repeat(200)));

    let errors = message.validate().unwrap_err();
    assert_eq!(errors.paths(), ["CreditTransferTransactionInfo[2].Debtor.Name"]);
    let third: FieldPath = "CreditTransferTransactionInfo[2]".parse().unwrap();
    let second: FieldPath = "CreditTransferTransactionInfo[1]".parse().unwrap();
    assert_eq!(errors.under(&third).count(), 1);
    assert_eq!(errors.under(&second).count(), 0);
}

#[test]
fn siblings_are_checked_after_a_failure() {
    let mut message = message(2);
    let header = message.group_header.as_mut().unwrap();
    header.message_id = None;
    header.interbank_settlement_date = Some("2024-02-30".into());
    let tx = &mut message.credit_transfer_transaction_info[0];
    tx.charge_bearer = Some("OUR".into());
    tx.interbank_settlement_amount = Some(ActiveCurrencyAndAmount::new(Decimal::ZERO, "EUR"));
    tx.debtor_agent = Some(Agent::default());

    let errors = message.validate().unwrap_err();
    assert_eq!(
        summary(&errors),
        vec![
            ("GroupHeader.MessageId".to_string(), ConstraintKind::Presence),
            ("GroupHeader.InterbankSettlementDate".to_string(), ConstraintKind::Calendar),
            (
                "CreditTransferTransactionInfo[0].InterbankSettlementAmount.Value".to_string(),
                ConstraintKind::Range
            ),
            (
                "CreditTransferTransactionInfo[0].ChargeBearer".to_string(),
                ConstraintKind::Enumeration
            ),
            (
                "CreditTransferTransactionInfo[0].DebtorAgent.FinancialInstitutionId".to_string(),
                ConstraintKind::Presence
            ),
        ]
    );
}

#[test]
fn validation_is_repeatable() {
    let mut message = message(1);
    message.credit_transfer_transaction_info[0].debtor = None;
    assert_eq!(message.validate(), message.validate());
}

// ── XML ────────────────────────────────────────────────────────────────────

#[test]
fn xml_round_trip() {
    let config = CodecConfig::default();
    let original = message(2);

    let xml = encode_document(&original, &config).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08"));
    assert!(xml.contains("<IntrBkSttlmAmt Ccy=\"EUR\">1500.00</IntrBkSttlmAmt>"));

    let decoded: FIToFICustomerCreditTransferV08 = decode_document(&xml, &config).unwrap();
    assert_eq!(decoded, original);
    assert!(decoded.validate().is_ok());

    let tx = &decoded.credit_transfer_transaction_info[0];
    assert_eq!(tx.instructed_amount, None);
    assert_eq!(tx.exchange_rate, None);
    assert_eq!(decoded.group_header.as_ref().unwrap().batch_booking, None);
}

#[test]
fn xml_round_trip_keeps_surrounding_whitespace() {
    let mut original = message(1);
    original.group_header.as_mut().unwrap().message_id = Some("   ".into());
    let tx = &mut original.credit_transfer_transaction_info[0];
    tx.creditor = Some(PartyIdentification135::named(format!("{} ", "C".repeat(140))));
    tx.debtor = Some(PartyIdentification135::named("  ACME Corp"));
    let before = original.validate().unwrap_err();

    for config in [CodecConfig::default(), CodecConfig::compact()] {
        let xml = encode_document(&original, &config).unwrap();
        let decoded: FIToFICustomerCreditTransferV08 = decode_document(&xml, &config).unwrap();

        assert_eq!(decoded, original);
        assert_eq!(decoded.validate().unwrap_err(), before);
        assert_eq!(
            validate_document::<FIToFICustomerCreditTransferV08>(&xml, &config).unwrap(),
            before
        );
    }
    assert_eq!(
        summary(&before),
        vec![(
            "CreditTransferTransactionInfo[0].Creditor.Name".to_string(),
            ConstraintKind::Length
        )]
    );
}

#[test]
fn wire_tree_and_typed_tree_agree() {
    let config = CodecConfig::compact();
    let mut original = message(2);
    original.credit_transfer_transaction_info[1].charge_bearer = Some("XXXX".into());
    original.credit_transfer_transaction_info[1].creditor = None;

    let xml = encode_document(&original, &config).unwrap();
    let wire = validate_document::<FIToFICustomerCreditTransferV08>(&xml, &config).unwrap();

    assert_eq!(wire, original.validate().unwrap_err());
    assert_eq!(
        wire.paths(),
        [
            "CreditTransferTransactionInfo[1].ChargeBearer",
            "CreditTransferTransactionInfo[1].Creditor",
        ]
    );
}

#[test]
fn both_account_alternatives_on_the_wire() {
    let config = CodecConfig::compact();
    let xml = encode_document(&message(1), &config).unwrap();
    let iban = format!("<IBAN>{CREDITOR_IBAN}</IBAN>");
    let both = xml.replacen(&iban, &format!("{iban}<Othr><Id>0532013000</Id></Othr>"), 1);
    assert_ne!(both, xml);

    let errors = validate_document::<FIToFICustomerCreditTransferV08>(&both, &config).unwrap();
    assert_eq!(
        summary(&errors),
        vec![(
            "CreditTransferTransactionInfo[0].CreditorAccount.Identification".to_string(),
            ConstraintKind::ChoiceCardinality
        )]
    );

    assert!(matches!(
        decode_document::<FIToFICustomerCreditTransferV08>(&both, &config),
        Err(CodecError::Json(_))
    ));
}

// ── JSON ───────────────────────────────────────────────────────────────────

#[test]
fn json_round_trip_omits_unset_fields() {
    let original = message(1);
    let json = encode_json(&original).unwrap();

    assert!(!json.contains("null"));
    assert!(!json.contains("InstructedAmount"));
    assert!(json.contains("\"Iban\": \"DE89370400440532013000\""));

    let decoded: FIToFICustomerCreditTransferV08 = decode_json(&json).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn json_document_validates_with_the_same_paths() {
    let mut original = message(2);
    let tx = &mut original.credit_transfer_transaction_info[1];
    tx.creditor_account = Some(CashAccount38::from_iban("not an iban"));
    tx.payment_id = Some(PaymentIdentification7::default());

    let document = serde_json::to_value(&original).unwrap();
    let from_json = validate(&document, FIToFICustomerCreditTransferV08::schema()).unwrap_err();

    assert_eq!(from_json, original.validate().unwrap_err());
    assert_eq!(
        from_json.paths(),
        [
            "CreditTransferTransactionInfo[1].PaymentId.EndToEndId",
            "CreditTransferTransactionInfo[1].CreditorAccount.Identification.Iban",
        ]
    );
}

// ── properties ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn overlong_creditor_names_yield_one_length_violation(name in "[A-Za-z ]{141,300}") {
        let mut tx = transaction(0);
        tx.creditor = Some(PartyIdentification135::named(name));

        let errors = tx.validate().unwrap_err();
        prop_assert_eq!(
            summary(&errors),
            vec![("Creditor.Name".to_string(), ConstraintKind::Length)]
        );
    }

    #[test]
    fn charge_bearer_outside_the_code_list(code in "[A-Z]{4}") {
        prop_assume!(!["DEBT", "CRED", "SHAR", "SLEV"].contains(&code.as_str()));
        let mut tx = transaction(0);
        tx.charge_bearer = Some(code);

        let errors = tx.validate().unwrap_err();
        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(errors.errors()[0].kind, ConstraintKind::Enumeration);
    }
}
