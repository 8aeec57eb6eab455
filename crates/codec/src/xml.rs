//! XML reader and writer over [`Element`] trees.
//!
//! Built on `quick-xml` events. Element and attribute prefixes are dropped,
//! leaving local names; an `xmlns` declaration that binds the element's own
//! prefix becomes [`Element::namespace`]. Text content is kept verbatim;
//! only whitespace-only runs between child elements or outside the root
//! are dropped.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::config::CodecConfig;
use crate::element::Element;
use crate::error::{CodecError, Result};

// ============================================================================
// READ
// ============================================================================

/// Parses a complete XML document into its root element.
///
/// # Examples
///
/// ```
/// let root = isomsg_codec::xml::parse(r#"<Amt Ccy="EUR">10.00</Amt>"#).unwrap();
/// assert_eq!(root.attribute("Ccy"), Some("EUR"));
/// assert_eq!(root.text(), Some("10.00"));
/// ```
pub fn parse(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);

    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => open.push(start_element(&start)?),
            Event::Empty(start) => {
                let element = start_element(&start)?;
                close(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| CodecError::Malformed("unbalanced end tag".into()))?;
                close(element, &mut open, &mut root)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                append_text(&mut open, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)?;
                append_text(&mut open, text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(CodecError::Malformed(format!(
            "element '{}' is never closed",
            unclosed.name()
        )));
    }
    root.ok_or_else(|| CodecError::Malformed("document has no root element".into()))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = start.name();
    let prefix = name.prefix().map(|p| p.into_inner());
    let mut element = Element::new(std::str::from_utf8(start.local_name().into_inner())?);

    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = attribute.key.as_ref();
        let value = attribute.unescape_value()?;

        if key == b"xmlns" {
            if prefix.is_none() {
                element.set_namespace(value);
            }
        } else if let Some(declared) = key.strip_prefix(b"xmlns:") {
            if prefix == Some(declared) {
                element.set_namespace(value);
            }
        } else {
            let local = std::str::from_utf8(attribute.key.local_name().into_inner())?;
            element.set_attribute(local, value);
        }
    }
    Ok(element)
}

fn close(mut element: Element, open: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    element.drop_layout_text();
    if let Some(parent) = open.last_mut() {
        parent.push_child(element);
    } else if root.is_some() {
        return Err(CodecError::Malformed("multiple root elements".into()));
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn append_text(open: &mut [Element], text: &str) -> Result<()> {
    match open.last_mut() {
        Some(current) => {
            current.push_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(CodecError::Malformed(
            "text outside the root element".into(),
        )),
    }
}

// ============================================================================
// WRITE
// ============================================================================

/// Renders `element` as an XML document.
///
/// # Examples
///
/// ```
/// use isomsg_codec::{CodecConfig, Element};
///
/// let amount = Element::new("Amt").with_attribute("Ccy", "EUR").with_text("10.00");
/// let xml = isomsg_codec::xml::write(&amount, &CodecConfig::compact()).unwrap();
/// assert_eq!(xml, r#"<Amt Ccy="EUR">10.00</Amt>"#);
/// ```
pub fn write(element: &Element, config: &CodecConfig) -> Result<String> {
    let buffer = Vec::new();
    let mut writer = match config.indent {
        Some(width) if width > 0 => Writer::new_with_indent(buffer, b' ', width),
        _ => Writer::new(buffer),
    };

    if config.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_element(&mut writer, element)?;

    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|e| CodecError::Utf8(e.utf8_error()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    if let Some(namespace) = element.namespace() {
        start.push_attribute(("xmlns", namespace));
    }
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    let text = element.text().filter(|t| !t.is_empty());
    if text.is_none() && element.is_leaf() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_nested_elements() {
        let root = parse(
            r#"<?xml version="1.0"?>
            <Document xmlns="urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08">
                <GrpHdr>
                    <MsgId>MSG-1</MsgId>
                    <NbOfTxs>1</NbOfTxs>
                </GrpHdr>
            </Document>"#,
        )
        .unwrap();

        assert_eq!(root.name(), "Document");
        assert_eq!(
            root.namespace(),
            Some("urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08")
        );
        let header = root.child("GrpHdr").unwrap();
        assert_eq!(header.child("MsgId").unwrap().text(), Some("MSG-1"));
        assert_eq!(header.children().len(), 2);
    }

    #[test]
    fn prefixes_are_stripped() {
        let root = parse(
            r#"<doc:Document xmlns:doc="urn:x" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
                <doc:Amt xsi:type="Amount" Ccy="EUR">1</doc:Amt>
            </doc:Document>"#,
        )
        .unwrap();
        assert_eq!(root.name(), "Document");
        assert_eq!(root.namespace(), Some("urn:x"));
        let amount = root.child("Amt").unwrap();
        assert_eq!(amount.attribute("Ccy"), Some("EUR"));
        assert_eq!(amount.attribute("type"), Some("Amount"));
    }

    #[test]
    fn entities_and_cdata() {
        let root = parse("<Nm>A &amp; B<![CDATA[ <C>]]></Nm>").unwrap();
        assert_eq!(root.text(), Some("A & B <C>"));
    }

    #[test]
    fn leaf_text_keeps_surrounding_whitespace() {
        let root = parse(
            "<GrpHdr>\n  <MsgId>   </MsgId>\n  <Nm> ACME Corp </Nm>\n</GrpHdr>\n",
        )
        .unwrap();
        assert_eq!(root.text(), None);
        assert_eq!(root.child("MsgId").unwrap().text(), Some("   "));
        assert_eq!(root.child("Nm").unwrap().text(), Some(" ACME Corp "));
    }

    #[test]
    fn rejects_broken_documents() {
        assert!(matches!(parse("<A><B></A>"), Err(CodecError::Xml(_))));
        assert!(parse("<A>").is_err());
        assert!(matches!(parse(""), Err(CodecError::Malformed(_))));
        assert!(matches!(parse("<A/><B/>"), Err(CodecError::Malformed(_))));
        assert!(matches!(parse("<A/>stray"), Err(CodecError::Malformed(_))));
    }

    #[test]
    fn writes_indented_with_declaration() {
        let document = Element::new("Document").with_namespace("urn:x").with_child(
            Element::new("GrpHdr")
                .with_child(Element::new("MsgId").with_text("A<B"))
                .with_child(Element::new("Empty")),
        );
        let xml = write(&document, &CodecConfig::default()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Document xmlns=\"urn:x\">\n  \
             <GrpHdr>\n    \
             <MsgId>A&lt;B</MsgId>\n    \
             <Empty/>\n  \
             </GrpHdr>\n\
             </Document>"
        );
    }

    #[test]
    fn write_then_read_is_lossless() {
        let document = Element::new("Document")
            .with_namespace("urn:x")
            .with_child(
                Element::new("Amt")
                    .with_attribute("Ccy", "EUR")
                    .with_text("1.50"),
            )
            .with_child(Element::new("Nm").with_text(" padded "));
        for config in [CodecConfig::default(), CodecConfig::compact()] {
            let xml = write(&document, &config).unwrap();
            assert_eq!(parse(&xml).unwrap(), document);
        }
    }
}
