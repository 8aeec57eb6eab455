//! Party identification: names, postal addresses, contacts and the
//! organisation/private identification choice.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

use crate::codes::{CodeOrProprietary, NAME_PREFIX};

// ============================================================================
// PARTY IDENTIFICATION
// ============================================================================

/// `PartyIdentification135`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PartyIdentification135 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress24>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<Party38Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<Contact4>,
}

impl PartyIdentification135 {
    /// A party known by name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

static PARTY_IDENTIFICATION_135: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("PartyIdentification135")
        .field(FieldSpec::text("Name", "Nm").with(max_text(140)))
        .field(FieldSpec::structure(
            "PostalAddress",
            "PstlAdr",
            PostalAddress24::schema,
        ))
        .field(FieldSpec::structure("Identification", "Id", Party38Choice::schema))
        .field(FieldSpec::text("CountryOfResidence", "CtryOfRes").with(country_code()))
        .field(FieldSpec::structure("ContactDetails", "CtctDtls", Contact4::schema))
});

impl Node for PartyIdentification135 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Name" => Slot::text(self.name.as_deref()),
            "PostalAddress" => Slot::node(self.postal_address.as_ref()),
            "Identification" => Slot::node(self.identification.as_ref()),
            "CountryOfResidence" => Slot::text(self.country_of_residence.as_deref()),
            "ContactDetails" => Slot::node(self.contact_details.as_ref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for PartyIdentification135 {
    fn schema() -> &'static Schema {
        &PARTY_IDENTIFICATION_135
    }
}

// ============================================================================
// POSTAL ADDRESS
// ============================================================================

/// `PostalAddress24`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PostalAddress24 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town_location_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_sub_division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub address_line: Vec<String>,
}

static POSTAL_ADDRESS_24: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("PostalAddress24")
        .field(FieldSpec::text("Department", "Dept").with(max_text(70)))
        .field(FieldSpec::text("SubDepartment", "SubDept").with(max_text(70)))
        .field(FieldSpec::text("StreetName", "StrtNm").with(max_text(70)))
        .field(FieldSpec::text("BuildingNumber", "BldgNb").with(max_text(16)))
        .field(FieldSpec::text("BuildingName", "BldgNm").with(max_text(35)))
        .field(FieldSpec::text("Floor", "Flr").with(max_text(70)))
        .field(FieldSpec::text("PostBox", "PstBx").with(max_text(16)))
        .field(FieldSpec::text("Room", "Room").with(max_text(70)))
        .field(FieldSpec::text("PostCode", "PstCd").with(max_text(16)))
        .field(FieldSpec::text("TownName", "TwnNm").with(max_text(35)))
        .field(FieldSpec::text("TownLocationName", "TwnLctnNm").with(max_text(35)))
        .field(FieldSpec::text("DistrictName", "DstrctNm").with(max_text(35)))
        .field(FieldSpec::text("CountrySubDivision", "CtrySubDvsn").with(max_text(35)))
        .field(FieldSpec::text("Country", "Ctry").with(country_code()))
        .field(
            FieldSpec::text("AddressLine", "AdrLine")
                .repeated(0, Some(7))
                .with(max_text(70)),
        )
});

impl Node for PostalAddress24 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Department" => Slot::text(self.department.as_deref()),
            "SubDepartment" => Slot::text(self.sub_department.as_deref()),
            "StreetName" => Slot::text(self.street_name.as_deref()),
            "BuildingNumber" => Slot::text(self.building_number.as_deref()),
            "BuildingName" => Slot::text(self.building_name.as_deref()),
            "Floor" => Slot::text(self.floor.as_deref()),
            "PostBox" => Slot::text(self.post_box.as_deref()),
            "Room" => Slot::text(self.room.as_deref()),
            "PostCode" => Slot::text(self.post_code.as_deref()),
            "TownName" => Slot::text(self.town_name.as_deref()),
            "TownLocationName" => Slot::text(self.town_location_name.as_deref()),
            "DistrictName" => Slot::text(self.district_name.as_deref()),
            "CountrySubDivision" => Slot::text(self.country_sub_division.as_deref()),
            "Country" => Slot::text(self.country.as_deref()),
            "AddressLine" => Slot::texts(&self.address_line),
            _ => Slot::Unset,
        }
    }
}

impl Structure for PostalAddress24 {
    fn schema() -> &'static Schema {
        &POSTAL_ADDRESS_24
    }
}

// ============================================================================
// CONTACT
// ============================================================================

/// `Contact4`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Contact4 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

static CONTACT_4: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("Contact4")
        .field(FieldSpec::text("NamePrefix", "NmPrfx").with(enumeration(NAME_PREFIX)))
        .field(FieldSpec::text("Name", "Nm").with(max_text(140)))
        .field(FieldSpec::text("PhoneNumber", "PhneNb").with(max_text(35)))
        .field(FieldSpec::text("MobileNumber", "MobNb").with(max_text(35)))
        .field(FieldSpec::text("FaxNumber", "FaxNb").with(max_text(35)))
        .field(FieldSpec::text("EmailAddress", "EmailAdr").with(max_text(2048)))
        .field(FieldSpec::text("EmailPurpose", "EmailPurp").with(max_text(35)))
        .field(FieldSpec::text("JobTitle", "JobTitl").with(max_text(35)))
        .field(FieldSpec::text("Responsibility", "Rspnsblty").with(max_text(35)))
        .field(FieldSpec::text("Department", "Dept").with(max_text(70)))
});

impl Node for Contact4 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "NamePrefix" => Slot::text(self.name_prefix.as_deref()),
            "Name" => Slot::text(self.name.as_deref()),
            "PhoneNumber" => Slot::text(self.phone_number.as_deref()),
            "MobileNumber" => Slot::text(self.mobile_number.as_deref()),
            "FaxNumber" => Slot::text(self.fax_number.as_deref()),
            "EmailAddress" => Slot::text(self.email_address.as_deref()),
            "EmailPurpose" => Slot::text(self.email_purpose.as_deref()),
            "JobTitle" => Slot::text(self.job_title.as_deref()),
            "Responsibility" => Slot::text(self.responsibility.as_deref()),
            "Department" => Slot::text(self.department.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for Contact4 {
    fn schema() -> &'static Schema {
        &CONTACT_4
    }
}

// ============================================================================
// ORGANISATION / PRIVATE IDENTIFICATION
// ============================================================================

/// `Party38Choice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Party38Choice {
    OrganisationId(OrganisationIdentification29),
    PrivateId(PersonIdentification13),
}

static PARTY_38_CHOICE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("Party38Choice").choice(ChoiceSpec::whole(vec![
        FieldSpec::structure(
            "OrganisationId",
            "OrgId",
            OrganisationIdentification29::schema,
        ),
        FieldSpec::structure("PrivateId", "PrvtId", PersonIdentification13::schema),
    ]))
});

impl Node for Party38Choice {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match (self, field.name()) {
            (Self::OrganisationId(org), "OrganisationId") => Slot::Node(org),
            (Self::PrivateId(person), "PrivateId") => Slot::Node(person),
            _ => Slot::Unset,
        }
    }
}

impl Structure for Party38Choice {
    fn schema() -> &'static Schema {
        &PARTY_38_CHOICE
    }
}

/// `OrganisationIdentification29`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OrganisationIdentification29 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_bic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lei: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<GenericIdentification>,
}

static ORGANISATION_IDENTIFICATION_29: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("OrganisationIdentification29")
        .field(FieldSpec::text("AnyBic", "AnyBIC").with(bic()))
        .field(FieldSpec::text("Lei", "LEI").with(lei()))
        .field(FieldSpec::structure("Other", "Othr", GenericIdentification::schema).repeated(0, None))
});

impl Node for OrganisationIdentification29 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "AnyBic" => Slot::text(self.any_bic.as_deref()),
            "Lei" => Slot::text(self.lei.as_deref()),
            "Other" => Slot::nodes(&self.other),
            _ => Slot::Unset,
        }
    }
}

impl Structure for OrganisationIdentification29 {
    fn schema() -> &'static Schema {
        &ORGANISATION_IDENTIFICATION_29
    }
}

/// `PersonIdentification13`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonIdentification13 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_and_place_of_birth: Option<DateAndPlaceOfBirth1>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<GenericIdentification>,
}

static PERSON_IDENTIFICATION_13: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("PersonIdentification13")
        .field(FieldSpec::structure(
            "DateAndPlaceOfBirth",
            "DtAndPlcOfBirth",
            DateAndPlaceOfBirth1::schema,
        ))
        .field(FieldSpec::structure("Other", "Othr", GenericIdentification::schema).repeated(0, None))
});

impl Node for PersonIdentification13 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "DateAndPlaceOfBirth" => Slot::node(self.date_and_place_of_birth.as_ref()),
            "Other" => Slot::nodes(&self.other),
            _ => Slot::Unset,
        }
    }
}

impl Structure for PersonIdentification13 {
    fn schema() -> &'static Schema {
        &PERSON_IDENTIFICATION_13
    }
}

/// `DateAndPlaceOfBirth1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateAndPlaceOfBirth1 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_birth: Option<String>,
}

static DATE_AND_PLACE_OF_BIRTH_1: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("DateAndPlaceOfBirth1")
        .field(FieldSpec::text("BirthDate", "BirthDt").required().with(iso_date()))
        .field(FieldSpec::text("ProvinceOfBirth", "PrvcOfBirth").with(max_text(35)))
        .field(FieldSpec::text("CityOfBirth", "CityOfBirth").required().with(max_text(35)))
        .field(FieldSpec::text("CountryOfBirth", "CtryOfBirth").required().with(country_code()))
});

impl Node for DateAndPlaceOfBirth1 {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "BirthDate" => Slot::text(self.birth_date.as_deref()),
            "ProvinceOfBirth" => Slot::text(self.province_of_birth.as_deref()),
            "CityOfBirth" => Slot::text(self.city_of_birth.as_deref()),
            "CountryOfBirth" => Slot::text(self.country_of_birth.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for DateAndPlaceOfBirth1 {
    fn schema() -> &'static Schema {
        &DATE_AND_PLACE_OF_BIRTH_1
    }
}

/// `GenericOrganisationIdentification1` / `GenericPersonIdentification1`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GenericIdentification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_name: Option<CodeOrProprietary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

static GENERIC_IDENTIFICATION: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("GenericIdentification")
        .field(FieldSpec::text("Id", "Id").required().with(max_text(35)))
        .field(FieldSpec::structure(
            "SchemeName",
            "SchmeNm",
            CodeOrProprietary::schema,
        ))
        .field(FieldSpec::text("Issuer", "Issr").with(max_text(35)))
});

impl Node for GenericIdentification {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.name() {
            "Id" => Slot::text(self.id.as_deref()),
            "SchemeName" => Slot::node(self.scheme_name.as_ref()),
            "Issuer" => Slot::text(self.issuer.as_deref()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for GenericIdentification {
    fn schema() -> &'static Schema {
        &GENERIC_IDENTIFICATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn named_party_is_valid() {
        assert!(PartyIdentification135::named("ACME Corp").validate().is_ok());
    }

    #[test]
    fn nested_violations_carry_full_paths() {
        let party = PartyIdentification135 {
            name: Some("N".repeat(141)),
            postal_address: Some(PostalAddress24 {
                country: Some("Germany".into()),
                address_line: vec!["Main Street 1".into(), "x".repeat(71)],
                ..PostalAddress24::default()
            }),
            identification: Some(Party38Choice::PrivateId(PersonIdentification13 {
                date_and_place_of_birth: Some(DateAndPlaceOfBirth1 {
                    birth_date: Some("1990-02-30".into()),
                    city_of_birth: Some("Berlin".into()),
                    ..DateAndPlaceOfBirth1::default()
                }),
                other: Vec::new(),
            })),
            ..PartyIdentification135::default()
        };

        let errors = party.validate().unwrap_err();
        let summary: Vec<_> = errors
            .iter()
            .map(|e| (e.path.to_string(), e.kind))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Name".to_string(), ConstraintKind::Length),
                ("PostalAddress.Country".to_string(), ConstraintKind::DomainFormat),
                ("PostalAddress.AddressLine[1]".to_string(), ConstraintKind::Length),
                (
                    "Identification.PrivateId.DateAndPlaceOfBirth.BirthDate".to_string(),
                    ConstraintKind::Calendar
                ),
                (
                    "Identification.PrivateId.DateAndPlaceOfBirth.CountryOfBirth".to_string(),
                    ConstraintKind::Presence
                ),
            ]
        );
    }

    #[test]
    fn repeated_generic_identifications_are_indexed() {
        let org = OrganisationIdentification29 {
            any_bic: Some("DEUTDEFF".into()),
            lei: None,
            other: vec![
                GenericIdentification {
                    id: Some("A-1".into()),
                    ..GenericIdentification::default()
                },
                GenericIdentification::default(),
            ],
        };
        let errors = org.validate().unwrap_err();
        assert_eq!(errors.paths(), ["Other[1].Id"]);
    }
}
