//! The parts of the page the controllers read from and write to.

use crate::constants::dom;
use crate::html::{Element, Node};
use crate::models::SearchQuery;

/// The element every render pass replaces the contents of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<Node>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(dom::CAFES_CONTAINER)
    }
}

impl Container {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.clear();
        self.children.extend(children);
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Top-level child carrying the given DOM id, e.g. `cafe-3`.
    #[must_use]
    pub fn child_by_id(&self, id: &str) -> Option<&Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find(|element| element.attribute("id") == Some(id))
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut element = Element::new("div").id(self.id.clone());
        for child in &self.children {
            element = element.child(child.clone());
        }
        element.to_html()
    }
}

/// Current state of the search box and its "by name" checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBox {
    pub value: String,
    pub by_name_checked: bool,
}

impl SearchBox {
    #[must_use]
    pub fn new(value: impl Into<String>, by_name_checked: bool) -> Self {
        Self {
            value: value.into(),
            by_name_checked,
        }
    }

    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::from_input(&self.value, self.by_name_checked)
    }

    /// The search input followed by the by-name checkbox.
    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut checkbox = Element::new("input")
            .id(dom::BY_NAME_CHECKBOX)
            .attr("type", "checkbox");
        if self.by_name_checked {
            checkbox = checkbox.attr("checked", "checked");
        }

        Element::new("div")
            .child(
                Element::new("input")
                    .id(dom::SEARCH_INPUT)
                    .attr("type", "text")
                    .attr("value", self.value.clone()),
            )
            .child(checkbox)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMethod {
    Get,
    Post,
}

impl FormMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Url,
    Select,
    Checkbox,
    Hidden,
}

/// One control inside a form. Only controls with a `name` are submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: InputKind,
    pub value: String,
}

impl FormField {
    #[must_use]
    pub fn named(name: &str, kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.to_string()),
            kind,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn unnamed(id: &str, kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            id: Some(id.to_string()),
            name: None,
            kind,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn hidden(name: &str, value: impl Into<String>) -> Self {
        Self::named(name, InputKind::Hidden, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub id: String,
    pub action: String,
    pub method: FormMethod,
    fields: Vec<FormField>,
}

impl Form {
    #[must_use]
    pub fn new(id: impl Into<String>, action: impl Into<String>, method: FormMethod) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            method,
            fields: Vec::new(),
        }
    }

    pub fn append(&mut self, field: FormField) {
        self.fields.push(field);
    }

    #[must_use]
    pub fn with_field(mut self, field: FormField) -> Self {
        self.append(field);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Value of the control with the given DOM id.
    #[must_use]
    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id.as_deref() == Some(id))
            .map(|field| field.value.as_str())
    }

    #[must_use]
    pub fn fields_named(&self, name: &str) -> Vec<&FormField> {
        self.fields
            .iter()
            .filter(|field| field.name.as_deref() == Some(name))
            .collect()
    }

    /// Name/value pairs in document order, as a browser would submit them.
    #[must_use]
    pub fn submission_pairs(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .name
                    .as_ref()
                    .map(|name| (name.clone(), field.value.clone()))
            })
            .collect()
    }
}
