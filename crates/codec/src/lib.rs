//! # isomsg-codec
//!
//! Wire codec for ISO 20022 message trees.
//!
//! Everything is driven by the same [`Schema`](isomsg_validator::schema::Schema)
//! data the validator uses: wire tags, attribute/text placement and
//! declaration order come from the field descriptors, so typed models need
//! no codec-specific annotations beyond `serde` field names.
//!
//! - [`Element`]: generic tree, also a validator [`Node`](isomsg_validator::schema::Node)
//! - [`xml`]: `quick-xml` reader and writer for element trees
//! - [`to_element`] / [`to_value`]: schema-guided encode and decode
//! - [`encode_document`] / [`decode_document`] / [`validate_document`]:
//!   the `<Document xmlns=…>` envelope around a [`MessageDefinition`]
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use isomsg_codec::{CodecConfig, Element, to_element, xml};
//! use isomsg_validator::prelude::*;
//! use serde_json::json;
//!
//! static AMOUNT: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::new("ActiveCurrencyAndAmount")
//!         .field(FieldSpec::decimal("Value", "Value").required().content())
//!         .field(FieldSpec::text("Currency", "Ccy").required().attribute())
//! });
//!
//! let amount = json!({ "Value": "99.95", "Currency": "EUR" });
//! let element = to_element(&amount, &AMOUNT, "IntrBkSttlmAmt");
//! let wire = xml::write(&element, &CodecConfig::compact()).unwrap();
//! assert_eq!(wire, r#"<IntrBkSttlmAmt Ccy="EUR">99.95</IntrBkSttlmAmt>"#);
//! ```

mod config;
mod decode;
mod document;
mod element;
mod encode;
mod error;
pub mod xml;

pub use config::CodecConfig;
pub use decode::{from_element, to_value};
pub use document::{
    DOCUMENT_TAG, MessageDefinition, decode_document, decode_json, encode_document, encode_json,
    open_envelope, validate_document,
};
pub use element::Element;
pub use encode::to_element;
pub use error::{CodecError, Result};
