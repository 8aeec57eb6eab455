//! Domain identifier validators: ISO 4217 currency, ISO 3166 country,
//! ISO 9362 BIC, ISO 13616 IBAN, ISO 17442 LEI and the UETR (UUID v4).
//!
//! These check shape only by default. Code-list membership (is `XYZ` an
//! issued currency?) is out of scope; IBAN and LEI can opt into their
//! ISO 7064 mod-97 check digits.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

static CURRENCY_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z]{3}$").expect("static regex"));

static COUNTRY_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z]{2}$").expect("static regex"));

static BIC_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("static regex")
});

static IBAN_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{1,30}$").expect("static regex")
});

static LEI_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Z0-9]{18}[0-9]{2}$").expect("static regex"));

static UUID_V4_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}$")
        .expect("static regex")
});

// ============================================================================
// CURRENCY / COUNTRY
// ============================================================================

crate::validator! {
    /// Three uppercase ASCII letters (`ActiveCurrencyCode` shape).
    pub CurrencyCode for str;
    rule(input) { CURRENCY_REGEX.is_match(input) }
    error(input) { ValidationError::domain_format("currency code", input) }
    fn currency_code();
}

crate::validator! {
    /// Two uppercase ASCII letters (`CountryCode` shape).
    pub CountryCode for str;
    rule(input) { COUNTRY_REGEX.is_match(input) }
    error(input) { ValidationError::domain_format("country code", input) }
    fn country_code();
}

// ============================================================================
// BIC
// ============================================================================

crate::validator! {
    /// Business identifier code: 4 letters institution, 2 letters country,
    /// 2 alphanumeric location, optional 3 alphanumeric branch.
    pub Bic for str;
    rule(input) { BIC_REGEX.is_match(input) }
    error(input) { ValidationError::domain_format("BIC", input) }
    fn bic();
}

// ============================================================================
// IBAN
// ============================================================================

crate::validator! {
    /// International bank account number: 2 letters, 2 check digits,
    /// up to 30 alphanumeric characters, 15 to 34 in total.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Iban { verify_checksum: bool } for str;
    rule(self, input) {
        (15..=34).contains(&input.len())
            && IBAN_REGEX.is_match(input)
            && (!self.verify_checksum || iban_checksum_ok(input))
    }
    error(self, input) { ValidationError::domain_format("IBAN", input) }
    new() { Self { verify_checksum: false } }
    fn iban();
}

impl Iban {
    /// Also require the mod-97 check digits to be correct.
    #[must_use = "builder methods must be chained or built"]
    pub fn verify_checksum(mut self) -> Self {
        self.verify_checksum = true;
        self
    }
}

fn iban_checksum_ok(iban: &str) -> bool {
    let (head, tail) = iban.split_at(4);
    mod97(tail.chars().chain(head.chars())) == Some(1)
}

// ============================================================================
// LEI
// ============================================================================

crate::validator! {
    /// Legal entity identifier: 18 alphanumeric characters and 2 check digits.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Lei { verify_checksum: bool } for str;
    rule(self, input) {
        LEI_REGEX.is_match(input) && (!self.verify_checksum || mod97(input.chars()) == Some(1))
    }
    error(self, input) { ValidationError::domain_format("LEI", input) }
    new() { Self { verify_checksum: false } }
    fn lei();
}

impl Lei {
    /// Also require the mod-97 check digits to be correct.
    #[must_use = "builder methods must be chained or built"]
    pub fn verify_checksum(mut self) -> Self {
        self.verify_checksum = true;
        self
    }
}

/// ISO 7064 MOD 97-10 over digits and letters (`A` = 10 ... `Z` = 35).
fn mod97(chars: impl Iterator<Item = char>) -> Option<u32> {
    let mut remainder = 0u32;
    for c in chars {
        let value = c.to_digit(36)?;
        remainder = if value < 10 {
            (remainder * 10 + value) % 97
        } else {
            (remainder * 100 + value) % 97
        };
    }
    Some(remainder)
}

// ============================================================================
// UETR
// ============================================================================

crate::validator! {
    /// Lowercase UUID version 4, as used by the `UETR` element.
    pub UuidV4 for str;
    rule(input) { UUID_V4_REGEX.is_match(input) }
    error(input) { ValidationError::domain_format("UUIDv4 identifier", input) }
    fn uuid_v4();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{ConstraintKind, Validate};
    use rstest::rstest;

    #[rstest]
    #[case("USD", true)]
    #[case("EUR", true)]
    #[case("US", false)]
    #[case("usd", false)]
    #[case("", false)]
    #[case("USDX", false)]
    fn currency(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(currency_code().validate(input).is_ok(), ok);
    }

    #[test]
    fn currency_error_kind() {
        let err = currency_code().validate("usd").unwrap_err();
        assert_eq!(err.kind, ConstraintKind::DomainFormat);
        assert_eq!(err.message, "'usd' is not a valid currency code");
    }

    #[rstest]
    #[case("US", true)]
    #[case("DE", true)]
    #[case("U", false)]
    #[case("us", false)]
    #[case("USA", false)]
    fn country(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(country_code().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("DEUTDEFF", true)]
    #[case("DEUTDEFF500", true)]
    #[case("BOFAUS3N", true)]
    #[case("DEUTDEF", false)]
    #[case("DEUTDEFF50", false)]
    #[case("1EUTDEFF", false)]
    #[case("deutdeff", false)]
    fn bic_shape(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(bic().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("GB82WEST12345698765432", true)]
    #[case("DE89370400440532013000", true)]
    #[case("GB82WEST", false)]
    #[case("gb82west12345698765432", false)]
    #[case("GBXXWEST12345698765432", false)]
    fn iban_shape(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(iban().validate(input).is_ok(), ok);
    }

    #[test]
    fn iban_checksum_is_opt_in() {
        // valid shape, wrong check digits
        let wrong = "GB00WEST12345698765432";
        assert!(iban().validate(wrong).is_ok());
        assert!(iban().verify_checksum().validate(wrong).is_err());
        assert!(
            iban()
                .verify_checksum()
                .validate("GB82WEST12345698765432")
                .is_ok()
        );
    }

    #[test]
    fn lei_shape_and_checksum() {
        let lei_ok = "529900T8BM49AURSDO55";
        assert!(lei().validate(lei_ok).is_ok());
        assert!(lei().verify_checksum().validate(lei_ok).is_ok());
        assert!(lei().validate("529900T8BM49AURSDO5").is_err());
        assert!(lei().verify_checksum().validate("529900T8BM49AURSDO56").is_err());
    }

    #[test]
    fn uetr() {
        assert!(uuid_v4().validate("eb6305c9-1f7f-49de-aed0-16487c27b42d").is_ok());
        assert!(uuid_v4().validate("eb6305c9-1f7f-19de-aed0-16487c27b42d").is_err());
        assert!(uuid_v4().validate("EB6305C9-1F7F-49DE-AED0-16487C27B42D").is_err());
    }
}
