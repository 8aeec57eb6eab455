//! Business Application Header on the wire.

use chrono::NaiveDate;
use isomsg_codec::{CodecConfig, decode_document, encode_document, validate_document};
use isomsg_model::prelude::*;
use pretty_assertions::assert_eq;

const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:head.001.001.02";

fn header() -> BusinessApplicationHeaderV02 {
    let created = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let mut header = BusinessApplicationHeaderV02::between(
        Party44Choice::agent("DEUTDEFF"),
        Party44Choice::OrganisationId(PartyIdentification135::named("Clearing House")),
        "BIZ-20240301-1",
        "pacs.008.001.08",
        created,
    );
    header.business_service = Some("swift.cbprplus.02".into());
    header.possible_duplicate = Some(false);
    header
}

#[test]
fn compact_wire_form() {
    let xml = encode_document(&header(), &CodecConfig::compact()).unwrap();
    assert_eq!(
        xml,
        format!(
            "<Document xmlns=\"{NAMESPACE}\"><AppHdr>\
             <Fr><FIId><FinInstnId><BICFI>DEUTDEFF</BICFI></FinInstnId></FIId></Fr>\
             <To><OrgId><Nm>Clearing House</Nm></OrgId></To>\
             <BizMsgIdr>BIZ-20240301-1</BizMsgIdr>\
             <MsgDefIdr>pacs.008.001.08</MsgDefIdr>\
             <BizSvc>swift.cbprplus.02</BizSvc>\
             <CreDt>2024-03-01T09:30:00</CreDt>\
             <PssblDplct>false</PssblDplct>\
             </AppHdr></Document>"
        )
    );
}

#[test]
fn xml_round_trip() {
    let config = CodecConfig::default();
    let original = header();

    let xml = encode_document(&original, &config).unwrap();
    let decoded: BusinessApplicationHeaderV02 = decode_document(&xml, &config).unwrap();

    assert_eq!(decoded, original);
    assert_eq!(decoded.possible_duplicate, Some(false));
    assert_eq!(decoded.priority, None);
    assert!(decoded.validate().is_ok());
}

#[test]
fn sender_with_both_identifications() {
    let xml = format!(
        "<Document xmlns=\"{NAMESPACE}\"><AppHdr>\
         <Fr><OrgId><Nm>ACME</Nm></OrgId><FIId><FinInstnId><BICFI>DEUTDEFF</BICFI></FinInstnId></FIId></Fr>\
         <To><FIId><FinInstnId><BICFI>BNPAFRPP</BICFI></FinInstnId></FIId></To>\
         <BizMsgIdr>BIZ-1</BizMsgIdr>\
         <MsgDefIdr>pacs.008.001.08</MsgDefIdr>\
         <CreDt>2024-03-01T09:30:00.123Z</CreDt>\
         </AppHdr></Document>"
    );
    let errors =
        validate_document::<BusinessApplicationHeaderV02>(&xml, &CodecConfig::default()).unwrap();

    let summary: Vec<_> = errors
        .iter()
        .map(|e| (e.path.to_string(), e.kind))
        .collect();
    assert_eq!(
        summary,
        vec![("From".to_string(), ConstraintKind::ChoiceCardinality)]
    );
    assert_eq!(
        errors.to_string(),
        "Field 'From': mutually exclusive alternatives both provided: \
         OrganisationId, FinancialInstitutionId"
    );
}

#[test]
fn missing_routing_and_bad_dates() {
    let xml = format!(
        "<Document xmlns=\"{NAMESPACE}\"><AppHdr>\
         <BizMsgIdr>BIZ-1</BizMsgIdr>\
         <MsgDefIdr>pacs.008.001.08</MsgDefIdr>\
         <CreDt>2024-03-01T09:30:00+02:00</CreDt>\
         <BizPrcgDt>2024-13-01T09:30:00</BizPrcgDt>\
         <CpyDplct>ORIG</CpyDplct>\
         </AppHdr></Document>"
    );
    let errors =
        validate_document::<BusinessApplicationHeaderV02>(&xml, &CodecConfig::default()).unwrap();

    let summary: Vec<_> = errors
        .iter()
        .map(|e| (e.path.to_string(), e.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("From".to_string(), ConstraintKind::Presence),
            ("To".to_string(), ConstraintKind::Presence),
            ("CreationDate".to_string(), ConstraintKind::Pattern),
            ("BusinessProcessingDate".to_string(), ConstraintKind::Calendar),
            ("CopyDuplicate".to_string(), ConstraintKind::Enumeration),
        ]
    );
}
