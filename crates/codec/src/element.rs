//! Generic element tree.
//!
//! An [`Element`] is what the XML reader produces and the writer consumes.
//! It also implements [`Node`], so a document straight off the wire can be
//! validated before (or instead of) decoding it into typed structs.

use indexmap::IndexMap;
use isomsg_validator::schema::{FieldSpec, Node, Placement, Slot};

/// One XML element with local names only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    // ── mutation ───────────────────────────────────────────────────────────

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = Some(namespace.into());
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Appends to the text content, joining split text and CDATA runs.
    pub fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_owned()),
        }
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Drops whitespace-only text from an element that has children; it is
    /// layout between child elements, not content.
    pub(crate) fn drop_layout_text(&mut self) {
        if !self.children.is_empty()
            && self.text.as_deref().is_some_and(|t| t.trim().is_empty())
        {
            self.text = None;
        }
    }

    // ── access ─────────────────────────────────────────────────────────────

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The namespace URN declared on this element, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The first child with the given local name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Takes the first child with the given local name out of this element.
    #[must_use]
    pub fn into_child(self, name: &str) -> Option<Element> {
        self.children.into_iter().find(|c| c.name == name)
    }

    /// Whether the element has no child elements.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Node for Element {
    fn slot(&self, field: &FieldSpec) -> Slot<'_> {
        match field.placement() {
            Placement::Attribute => Slot::text(self.attribute(field.tag())),
            Placement::Content => Slot::text(self.text()),
            Placement::Element => {
                let mut items: Vec<_> = self
                    .children_named(field.tag())
                    .map(|child| child_slot(child, field))
                    .collect();
                match items.len() {
                    0 => Slot::Unset,
                    1 => items.remove(0),
                    _ => Slot::List(items),
                }
            }
        }
    }
}

fn child_slot<'a>(child: &'a Element, field: &FieldSpec) -> Slot<'a> {
    if field.kind().is_structure() || !child.is_leaf() {
        Slot::Node(child)
    } else {
        // `<Tag/>` reads as empty text, which counts as unset.
        Slot::Text(child.text().unwrap_or_default().into())
    }
}
