//! Codec error type.

use quick_xml::events::attributes::AttrError;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Failures while reading or writing a message.
///
/// Constraint violations are never reported here; a document that parses
/// but breaks its schema decodes fine and fails validation instead.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Malformed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute
    #[error("XML attribute error: {0}")]
    Attr(#[from] AttrError),

    /// Output sink failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON tree does not fit the target type
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non UTF-8 bytes in names or output
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document root is not the expected element
    #[error("unexpected root element '{found}', expected '{expected}'")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// The document namespace does not match the message definition
    #[error("namespace mismatch: expected '{expected}', found '{}'", found.as_deref().unwrap_or("<none>"))]
    NamespaceMismatch {
        expected: &'static str,
        found: Option<String>,
    },

    /// The envelope lacks the message body element
    #[error("document has no '{0}' element")]
    MissingBody(&'static str),

    /// Structural problem in the input
    #[error("malformed document: {0}")]
    Malformed(String),
}
