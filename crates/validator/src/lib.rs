//! # isomsg-validator
//!
//! Constraint validation for ISO 20022 message trees.
//!
//! A message is a tree of optional fields, required fields and choice
//! groups. This crate describes such trees as [`Schema`](schema::Schema)
//! data, reads values through the [`Node`](schema::Node) view trait and
//! walks them in one fail-slow pass, returning every violation with its
//! path.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use isomsg_validator::prelude::*;
//! use serde_json::json;
//!
//! static HEADER: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::new("GroupHeader93")
//!         .field(FieldSpec::text("MessageId", "MsgId").required().with(max_text(35)))
//!         .field(FieldSpec::text("CreationDateTime", "CreDtTm").required().with(iso_date_time()))
//! });
//!
//! let header = json!({ "CreationDateTime": "2023-12-25 14:30:00" });
//! let errors = validate(&header, &HEADER).unwrap_err();
//!
//! assert_eq!(
//!     errors.to_string(),
//!     "Field 'MessageId': is required; \
//!      Field 'CreationDateTime': datetime must be in YYYY-MM-DDTHH:MM:SS format"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait, violations, paths
//! - [`validators`]: primitive constraints (length, pattern, BIC, IBAN, dates, ...)
//! - [`schema`]: field, choice and structure descriptions; the `Node` view
//! - [`engine`]: the structural walker
//! - [`json`]: `Node` for `serde_json::Value`

pub mod engine;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
