//! `head.001.001.02` Business Application Header.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use isomsg_codec::MessageDefinition;
use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::agent::BranchAndFinancialInstitutionIdentification6;
use crate::codes::{BUSINESS_PRIORITY, COPY_DUPLICATE, message_definition_identifier};
use crate::party::PartyIdentification135;

// ============================================================================
// HEADER
// ============================================================================

/// `BusinessApplicationHeaderV02`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusinessApplicationHeaderV02 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Party44Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Party44Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_practice: Option<ImplementationSpecification1>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_processing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_duplicate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<BusinessApplicationHeader5>,
}

impl BusinessApplicationHeaderV02 {
    /// A header routing `message_definition_id` between two agents.
    pub fn between(
        from: Party44Choice,
        to: Party44Choice,
        business_message_id: impl Into<String>,
        message_definition_id: impl Into<String>,
        created: NaiveDateTime,
    ) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            business_message_id: Some(business_message_id.into()),
            message_definition_id: Some(message_definition_id.into()),
            creation_date: Some(format_iso_date_time(created)),
            ..Self::default()
        }
    }
}

static BUSINESS_APPLICATION_HEADER_V02: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("BusinessApplicationHeaderV02")
        .field(FieldSpec::text("CharacterSet", "CharSet").with(max_text(35)))
        .field(FieldSpec::structure("From", "Fr", Party44Choice::schema).required())
        .field(FieldSpec::structure("To", "To", Party44Choice::schema).required())
        .field(
            FieldSpec::text("BusinessMessageId", "BizMsgIdr")
                .required()
                .with(max_text(35)),
        )
        .field(
            FieldSpec::text("MessageDefinitionId", "MsgDefIdr")
                .required()
                .with(max_text(35))
                .with(message_definition_identifier()),
        )
        .field(FieldSpec::text("BusinessService", "BizSvc").with(max_text(35)))
        .field(FieldSpec::structure(
            "MarketPractice",
            "MktPrctc",
            ImplementationSpecification1::schema,
        ))
        .field(
            FieldSpec::text("CreationDate", "CreDt")
                .required()
                .with(iso_date_time()),
        )
        .field(FieldSpec::text("BusinessProcessingDate", "BizPrcgDt").with(iso_date_time()))
        .field(FieldSpec::text("CopyDuplicate", "CpyDplct").with(enumeration(COPY_DUPLICATE)))
        .field(FieldSpec::boolean("PossibleDuplicate", "PssblDplct"))
        .field(FieldSpec::text("Priority", "Prty").with(enumeration(BUSINESS_PRIORITY)))
        .field(
            FieldSpec::structure("Related", "Rltd", BusinessApplicationHeader5::schema)
                .repeated(0, None),
        )
});

impl Node for BusinessApplicationHeaderV02 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "CharacterSet" => Slot::text(self.character_set.as_deref()),
            "From" => Slot::node(self.from.as_ref()),
            "To" => Slot::node(self.to.as_ref()),
            "BusinessMessageId" => Slot::text(self.business_message_id.as_deref()),
            "MessageDefinitionId" => Slot::text(self.message_definition_id.as_deref()),
            "BusinessService" => Slot::text(self.business_service.as_deref()),
            "MarketPractice" => Slot::node(self.market_practice.as_ref()),
            "CreationDate" => Slot::text(self.creation_date.as_deref()),
            "BusinessProcessingDate" => Slot::text(self.business_processing_date.as_deref()),
            "CopyDuplicate" => Slot::text(self.copy_duplicate.as_deref()),
            "PossibleDuplicate" => Slot::flag(self.possible_duplicate),
            "Priority" => Slot::text(self.priority.as_deref()),
            "Related" => Slot::nodes(&self.related),
            _ => Slot::Unset,
        }
    }
}

impl Structure for BusinessApplicationHeaderV02 {
    fn schema() -> &'static Schema {
        &BUSINESS_APPLICATION_HEADER_V02
    }
}

impl MessageDefinition for BusinessApplicationHeaderV02 {
    const NAMESPACE: &'static str = "urn:iso:std:iso:20022:tech:xsd:head.001.001.02";
    const ROOT: &'static str = "AppHdr";
}

// ============================================================================
// RELATED HEADER
// ============================================================================

/// `BusinessApplicationHeader5`: a header this one refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BusinessApplicationHeader5 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Party44Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Party44Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_duplicate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possible_duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

static BUSINESS_APPLICATION_HEADER_5: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("BusinessApplicationHeader5")
        .field(FieldSpec::text("CharacterSet", "CharSet").with(max_text(35)))
        .field(FieldSpec::structure("From", "Fr", Party44Choice::schema).required())
        .field(FieldSpec::structure("To", "To", Party44Choice::schema).required())
        .field(
            FieldSpec::text("BusinessMessageId", "BizMsgIdr")
                .required()
                .with(max_text(35)),
        )
        .field(
            FieldSpec::text("MessageDefinitionId", "MsgDefIdr")
                .required()
                .with(max_text(35))
                .with(message_definition_identifier()),
        )
        .field(FieldSpec::text("BusinessService", "BizSvc").with(max_text(35)))
        .field(
            FieldSpec::text("CreationDate", "CreDt")
                .required()
                .with(iso_date_time()),
        )
        .field(FieldSpec::text("CopyDuplicate", "CpyDplct").with(enumeration(COPY_DUPLICATE)))
        .field(FieldSpec::boolean("PossibleDuplicate", "PssblDplct"))
        .field(FieldSpec::text("Priority", "Prty").with(enumeration(BUSINESS_PRIORITY)))
});

impl Node for BusinessApplicationHeader5 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "CharacterSet" => Slot::text(self.character_set.as_deref()),
            "From" => Slot::node(self.from.as_ref()),
            "To" => Slot::node(self.to.as_ref()),
            "BusinessMessageId" => Slot::text(self.business_message_id.as_deref()),
            "MessageDefinitionId" => Slot::text(self.message_definition_id.as_deref()),
            "BusinessService" => Slot::text(self.business_service.as_deref()),
            "CreationDate" => Slot::text(self.creation_date.as_deref()),
            "CopyDuplicate" => Slot::text(self.copy_duplicate.as_deref()),
            "PossibleDuplicate" => Slot::flag(self.possible_duplicate),
            "Priority" => Slot::text(self.priority.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for BusinessApplicationHeader5 {
    fn schema() -> &'static Schema {
        &BUSINESS_APPLICATION_HEADER_5
    }
}

// ============================================================================
// PARTIES
// ============================================================================

/// `Party44Choice`: sender or receiver of a business message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party44Choice {
    OrganisationId(PartyIdentification135),
    FinancialInstitutionId(BranchAndFinancialInstitutionIdentification6),
}

impl Party44Choice {
    pub fn agent(bic: impl Into<String>) -> Self {
        Self::FinancialInstitutionId(BranchAndFinancialInstitutionIdentification6::from_bic(bic))
    }
}

static PARTY_44_CHOICE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("Party44Choice").choice(ChoiceSpec::whole(vec![
        FieldSpec::structure("OrganisationId", "OrgId", PartyIdentification135::schema),
        FieldSpec::structure(
            "FinancialInstitutionId",
            "FIId",
            BranchAndFinancialInstitutionIdentification6::schema,
        ),
    ]))
});

impl Node for Party44Choice {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match (self, field.name()) {
            (Self::OrganisationId(party), "OrganisationId") => Slot::Node(party),
            (Self::FinancialInstitutionId(agent), "FinancialInstitutionId") => Slot::Node(agent),
            _ => Slot::Unset,
        }
    }
}

impl Structure for Party44Choice {
    fn schema() -> &'static Schema {
        &PARTY_44_CHOICE
    }
}

/// `ImplementationSpecification1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ImplementationSpecification1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

static IMPLEMENTATION_SPECIFICATION_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("ImplementationSpecification1")
        .field(FieldSpec::text("Registry", "Regy").required().with(max_text(350)))
        .field(FieldSpec::text("Id", "Id").required().with(max_text(2048)))
});

impl Node for ImplementationSpecification1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Registry" => Slot::text(self.registry.as_deref()),
            "Id" => Slot::text(self.id.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for ImplementationSpecification1 {
    fn schema() -> &'static Schema {
        &IMPLEMENTATION_SPECIFICATION_1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn header() -> BusinessApplicationHeaderV02 {
        let created = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        BusinessApplicationHeaderV02::between(
            Party44Choice::agent("DEUTDEFF"),
            Party44Choice::agent("BNPAFRPP"),
            "BIZ-1",
            "pacs.008.001.08",
            created,
        )
    }

    #[test]
    fn minimal_header_is_valid() {
        assert!(header().validate().is_ok());
    }

    #[test]
    fn message_definition_id_format() {
        let mut header = header();
        header.message_definition_id = Some("pacs008".into());
        let errors = header.validate().unwrap_err();
        assert_eq!(errors.paths(), ["MessageDefinitionId"]);
        assert_eq!(errors.errors()[0].kind, ConstraintKind::DomainFormat);
    }

    #[test]
    fn related_headers_are_indexed() {
        let mut header = header();
        header.priority = Some("LOW".into());
        header.related = vec![BusinessApplicationHeader5 {
            from: Some(Party44Choice::agent("DEUTDEFF")),
            business_message_id: Some("BIZ-0".into()),
            message_definition_id: Some("pacs.008.001.08".into()),
            creation_date: Some("2024-02-29T10:00:00Z".into()),
            ..BusinessApplicationHeader5::default()
        }];

        let errors = header.validate().unwrap_err();
        let summary: Vec<_> = errors
            .iter()
            .map(|e| (e.path.to_string(), e.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Priority".to_string(), ConstraintKind::Enumeration),
                ("Related[0].To".to_string(), ConstraintKind::Presence),
            ]
        );
    }
}
