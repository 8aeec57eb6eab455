//! ISO 20022 document envelope.
//!
//! A message travels as `<Document xmlns="urn:iso:std:iso:20022:tech:xsd:…">`
//! with the message root element as its only child. The namespace appears
//! on the envelope only.

use isomsg_validator::engine;
use isomsg_validator::foundation::ValidationErrors;
use isomsg_validator::schema::Structure;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, debug_span};

use crate::config::CodecConfig;
use crate::decode::from_element;
use crate::element::Element;
use crate::encode::to_element;
use crate::error::{CodecError, Result};
use crate::xml;

/// Local name of the envelope element.
pub const DOCUMENT_TAG: &str = "Document";

/// A top-level message type with its wire identity.
pub trait MessageDefinition: Structure + Serialize + DeserializeOwned {
    /// Namespace URN declared on the envelope.
    const NAMESPACE: &'static str;
    /// Tag of the message root element inside the envelope.
    const ROOT: &'static str;
}

/// Encodes `message` as a complete XML document.
pub fn encode_document<M: MessageDefinition>(message: &M, config: &CodecConfig) -> Result<String> {
    let span = debug_span!("encode_document", root = M::ROOT);
    let _guard = span.enter();

    let body = to_element(message, M::schema(), M::ROOT);
    let document = Element::new(DOCUMENT_TAG)
        .with_namespace(M::NAMESPACE)
        .with_child(body);
    let xml = xml::write(&document, config)?;

    debug!(bytes = xml.len(), "document encoded");
    Ok(xml)
}

/// Decodes an XML document into `M`.
///
/// Fails on malformed XML, a wrong envelope, or content that does not fit
/// the typed model (both alternatives of a choice, or a single-valued
/// element given twice). Constraint
/// violations are not checked; call [`Structure::validate`] on the result or
/// use [`validate_document`].
pub fn decode_document<M: MessageDefinition>(xml: &str, config: &CodecConfig) -> Result<M> {
    let span = debug_span!("decode_document", root = M::ROOT);
    let _guard = span.enter();

    let body = open_envelope::<M>(xml, config)?;
    let message = from_element(&body, M::schema())?;

    debug!(bytes = xml.len(), "document decoded");
    Ok(message)
}

/// Validates an XML document against `M`'s schema without decoding it.
///
/// Wire-level problems a typed tree cannot represent, like two choice
/// alternatives or a repeated single field, come back as violations.
pub fn validate_document<M: MessageDefinition>(
    xml: &str,
    config: &CodecConfig,
) -> Result<ValidationErrors> {
    let body = open_envelope::<M>(xml, config)?;
    Ok(engine::collect(&body, M::schema()))
}

/// Parses `xml` and returns the message root element after envelope checks.
pub fn open_envelope<M: MessageDefinition>(xml: &str, config: &CodecConfig) -> Result<Element> {
    let document = xml::parse(xml)?;

    if document.name() != DOCUMENT_TAG {
        return Err(CodecError::UnexpectedRoot {
            expected: DOCUMENT_TAG,
            found: document.name().to_owned(),
        });
    }
    if config.enforce_namespace && document.namespace() != Some(M::NAMESPACE) {
        return Err(CodecError::NamespaceMismatch {
            expected: M::NAMESPACE,
            found: document.namespace().map(str::to_owned),
        });
    }

    document
        .into_child(M::ROOT)
        .ok_or(CodecError::MissingBody(M::ROOT))
}

// ============================================================================
// JSON
// ============================================================================

/// Serializes a message as pretty JSON keyed by field names.
pub fn encode_json<M: MessageDefinition>(message: &M) -> Result<String> {
    Ok(serde_json::to_string_pretty(message)?)
}

/// Deserializes a message from JSON keyed by field names.
pub fn decode_json<M: MessageDefinition>(json: &str) -> Result<M> {
    Ok(serde_json::from_str(json)?)
}
