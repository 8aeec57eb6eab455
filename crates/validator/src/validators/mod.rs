//! Built-in primitive constraints
//!
//! Stateless checks over scalar text values. Each reports at most one
//! violation and knows nothing about where the value sits in a message.
//!
//! # Categories
//!
//! - **Presence and length**: [`required`], [`length`], [`max_text`]
//! - **Lexical**: [`pattern`], [`enumeration`], [`boolean`]
//! - **Domain identifiers**: [`currency_code`], [`country_code`], [`bic`],
//!   [`iban`], [`lei`], [`uuid_v4`]
//! - **Temporal**: [`iso_date`], [`iso_date_time`]
//! - **Amounts**: [`decimal_digits`], [`amount_digits`], [`positive`]
//!
//! # Examples
//!
//! ```
//! use isomsg_validator::prelude::*;
//!
//! let msg_id = max_text(35);
//! assert!(msg_id.validate("MSG-0001").is_ok());
//! assert!(currency_code().validate("usd").is_err());
//! ```

pub mod amount;
pub mod identifiers;
pub mod length;
pub mod pattern;
pub mod temporal;

pub use amount::{DecimalDigits, Positive, amount_digits, decimal_digits, positive};
pub use identifiers::{
    Bic, CountryCode, CurrencyCode, Iban, Lei, UuidV4, bic, country_code, currency_code, iban,
    lei, uuid_v4,
};
pub use length::{Length, LengthMode, Required, length, max_text, required};
pub use pattern::{Boolean, Enumeration, Pattern, boolean, enumeration, parse_boolean, pattern};
pub use temporal::{
    IsoDate, IsoDateTime, format_iso_date, format_iso_date_time, iso_date, iso_date_time,
    parse_iso_date, parse_iso_date_time,
};
