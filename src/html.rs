//! Structured element tree for everything the listing renders.
//!
//! Server-sourced strings only ever enter the tree as text nodes or attribute
//! values, and both are escaped when the tree is serialized.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => {
                encode_text_to_string(text, out);
            }
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        match self {
            Self::Element(element) => element.text_content(),
            Self::Text(text) => text.clone(),
        }
    }

    #[must_use]
    pub const fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Descendant elements with the given tag, in document order.
    #[must_use]
    pub fn find_all(&self, tag: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_tagged(tag, &mut found);
        found
    }

    fn collect_tagged<'a>(&'a self, tag: &str, found: &mut Vec<&'a Self>) {
        for child in self.children.iter().filter_map(Node::as_element) {
            if child.tag == tag {
                found.push(child);
            }
            child.collect_tagged(tag, found);
        }
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            encode_double_quoted_attribute_to_string(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

/// Keeps `http`/`https` and site-relative URLs; anything else becomes `#`.
/// Browsers read `/\host` like `//host`, so neither counts as site-relative.
#[must_use]
pub fn safe_url(raw: &str) -> String {
    let raw = raw.trim();

    if raw.starts_with('/') && !raw.starts_with("//") && !raw.starts_with("/\\") {
        return raw.to_string();
    }

    match url::Url::parse(raw) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => raw.to_string(),
        _ => "#".to_string(),
    }
}
