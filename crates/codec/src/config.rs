//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Controls XML output layout and decode strictness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Spaces per nesting level; `None` writes compact XML.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` before the document.
    pub xml_declaration: bool,
    /// Reject documents whose namespace differs from the message definition.
    pub enforce_namespace: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            enforce_namespace: true,
        }
    }
}

impl CodecConfig {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(indent) = std::env::var("ISOMSG_XML_INDENT") {
            config.indent = parse_indent(&indent, config.indent);
        }

        if let Some(flag) = env_flag("ISOMSG_XML_DECLARATION") {
            config.xml_declaration = flag;
        }

        if let Some(flag) = env_flag("ISOMSG_ENFORCE_NAMESPACE") {
            config.enforce_namespace = flag;
        }

        config
    }

    /// Compact output without declaration (message buses, fixtures)
    #[must_use]
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
            ..Self::default()
        }
    }

    /// Tolerant decoding (namespace not checked)
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            enforce_namespace: false,
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_enforce_namespace(mut self, enabled: bool) -> Self {
        self.enforce_namespace = enabled;
        self
    }
}

fn env_flag(name: &str) -> Option<bool> {
    parse_flag(&std::env::var(name).ok()?)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `none`, `0` or empty disable indentation; unparsable values keep `current`.
fn parse_indent(value: &str, current: Option<usize>) -> Option<usize> {
    match value.trim().to_lowercase().as_str() {
        "none" | "0" | "" => None,
        other => other.parse().ok().or(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("true", Some(true))]
    #[case(" ON ", Some(true))]
    #[case("0", Some(false))]
    #[case("No", Some(false))]
    #[case("maybe", None)]
    fn flags(#[case] input: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_flag(input), expected);
    }

    #[rstest]
    #[case("4", Some(4))]
    #[case("none", None)]
    #[case("0", None)]
    #[case("", None)]
    #[case("wide", Some(2))]
    fn indent(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(parse_indent(input, Some(2)), expected);
    }

    #[test]
    fn presets() {
        let compact = CodecConfig::compact();
        assert_eq!(compact.indent, None);
        assert!(!compact.xml_declaration);
        assert!(compact.enforce_namespace);

        assert!(!CodecConfig::lenient().enforce_namespace);
    }

    #[test]
    fn deserializes_partial_config() {
        let config: CodecConfig = serde_json::from_str(r#"{ "indent": 4 }"#).unwrap();
        assert_eq!(
            config,
            CodecConfig {
                indent: Some(4),
                ..CodecConfig::default()
            }
        );
    }

    #[test]
    fn builder_setters() {
        let config = CodecConfig::default()
            .with_indent(None)
            .with_xml_declaration(false)
            .with_enforce_namespace(false);
        assert_eq!(config.indent, None);
        assert!(!config.xml_declaration);
        assert!(!config.enforce_namespace);
    }
}
