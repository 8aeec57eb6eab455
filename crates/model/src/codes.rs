//! Code lists, code-or-proprietary choices and message-specific lexical types.

use std::sync::LazyLock;

use isomsg_validator::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// CODE LISTS
// ============================================================================

/// `ChargeBearerType1Code`
pub const CHARGE_BEARER: &[&str] = &["DEBT", "CRED", "SHAR", "SLEV"];

/// `SettlementMethod1Code`
pub const SETTLEMENT_METHOD: &[&str] = &["INDA", "INGA", "COVE", "CLRG"];

/// `Priority2Code`
pub const PRIORITY: &[&str] = &["HIGH", "NORM"];

/// `ClearingChannel2Code`
pub const CLEARING_CHANNEL: &[&str] = &["RTGS", "RTNS", "MPNS", "BOOK"];

/// `Priority3Code`
pub const SETTLEMENT_PRIORITY: &[&str] = &["URGT", "HIGH", "NORM"];

/// `NamePrefix2Code`
pub const NAME_PREFIX: &[&str] = &["DOCT", "MADM", "MISS", "MIST", "MIKS"];

/// `CopyDuplicate1Code`
pub const COPY_DUPLICATE: &[&str] = &["CODU", "COPY", "DUPL"];

/// `BusinessMessagePriorityCode`
pub const BUSINESS_PRIORITY: &[&str] = &["HIGH", "NORM", "URGT"];

/// `Instruction3Code`
pub const CREDITOR_AGENT_INSTRUCTION: &[&str] = &["CHQB", "HOLD", "PHOB", "TELB"];

/// `Instruction4Code`
pub const NEXT_AGENT_INSTRUCTION: &[&str] = &["PHOA", "TELA"];

// ============================================================================
// LEXICAL TYPES
// ============================================================================

static MAX15_NUMERIC: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{1,15}$").expect("static regex"));

static MESSAGE_DEFINITION: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-z]{4}\.[0-9]{3}\.[0-9]{3}\.[0-9]{2}$").expect("static regex")
});

isomsg_validator::validator! {
    /// `Max15NumericText`: one to fifteen ASCII digits.
    pub Max15NumericText for str;
    rule(input) { MAX15_NUMERIC.is_match(input) }
    error(input) { ValidationError::pattern(MAX15_NUMERIC.as_str().to_owned()) }
    fn max15_numeric_text();
}

isomsg_validator::validator! {
    /// Message definition identifier such as `pacs.008.001.08`.
    pub MessageDefinitionIdentifier for str;
    rule(input) { MESSAGE_DEFINITION.is_match(input) }
    error(input) { ValidationError::domain_format("message definition identifier", input) }
    fn message_definition_identifier();
}

// ============================================================================
// CODE OR PROPRIETARY
// ============================================================================

/// Either an external code or a proprietary value.
///
/// Shared by `ServiceLevel8Choice`, `LocalInstrument2Choice`,
/// `CategoryPurpose1Choice`, `CashAccountType2Choice`, scheme names and
/// clearing system identifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodeOrProprietary {
    Code(String),
    Proprietary(String),
}

impl CodeOrProprietary {
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    pub fn proprietary(value: impl Into<String>) -> Self {
        Self::Proprietary(value.into())
    }
}

static CODE_OR_PROPRIETARY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new("CodeOrProprietaryChoice").choice(ChoiceSpec::whole(vec![
        FieldSpec::text("Code", "Cd").with(max_text(35)),
        FieldSpec::text("Proprietary", "Prtry").with(max_text(35)),
    ]))
});

impl Node for CodeOrProprietary {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match (self, field.name()) {
            (Self::Code(code), "Code") => Slot::Text(code.into()),
            (Self::Proprietary(value), "Proprietary") => Slot::Text(value.into()),
            _ => Slot::Unset,
        }
    }
}

impl Structure for CodeOrProprietary {
    fn schema() -> &'static Schema {
        &CODE_OR_PROPRIETARY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("123456789012345", true)]
    #[case("1234567890123456", false)]
    #[case("1a", false)]
    #[case("", false)]
    fn number_of_transactions(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(max15_numeric_text().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("pacs.008.001.08", true)]
    #[case("head.001.001.02", true)]
    #[case("PACS.008.001.08", false)]
    #[case("pacs.8.1.8", false)]
    fn message_definition(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(message_definition_identifier().validate(input).is_ok(), ok);
    }

    #[test]
    fn code_or_proprietary_is_a_whole_choice() {
        assert!(CodeOrProprietary::code("SEPA").validate().is_ok());

        let errors = CodeOrProprietary::proprietary("x".repeat(36))
            .validate()
            .unwrap_err();
        assert_eq!(errors.paths(), ["Proprietary"]);
    }
}
