//! Node kinds of the document tree.

use serde::{Deserialize, Serialize};

use crate::properties::{Properties, PropertyValue};

/// Node in a document tree.
///
/// Serialized as HAST JSON, with the node kind in the `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// Document root. Only valid at top level, but tolerated when nested.
    Root(Root),
    /// Element with tag name, properties and children.
    Element(Element),
    /// Literal text.
    Text(Text),
    /// HTML comment.
    Comment(Text),
    /// `<!doctype html>`.
    Doctype,
}

impl Node {
    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(Text::new(value))
    }

    /// Create a comment node.
    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Self::Comment(Text::new(value))
    }

    /// HAST kind name of this node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Root(_) => "root",
            Self::Element(_) => "element",
            Self::Text(_) => "text",
            Self::Comment(_) => "comment",
            Self::Doctype => "doctype",
        }
    }

    /// Element payload, if this is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Mutable element payload, if this is an element.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Children of a parent node, or `None` for leaves.
    #[must_use]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Self::Root(root) => Some(&root.children),
            Self::Element(element) => Some(&element.children),
            Self::Text(_) | Self::Comment(_) | Self::Doctype => None,
        }
    }

    /// Whether this is an element with the given tag name.
    #[must_use]
    pub fn is_element_named(&self, tag_name: &str) -> bool {
        self.as_element().is_some_and(|e| e.tag_name == tag_name)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

/// Top-level container of a document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Root {
    /// Top-level nodes in document order.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Root {
    /// Create a root with the given children.
    #[must_use]
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Whether the document has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Element node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Tag name (e.g. `pre`, `code`, `div`).
    pub tag_name: String,
    /// Element properties.
    #[serde(default)]
    pub properties: Properties,
    /// Child nodes. Missing in JSON decodes as empty.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an element with no properties or children.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            ..Default::default()
        }
    }

    /// Set a property.
    #[must_use]
    pub fn with_property(
        mut self,
        name: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Self {
        self.properties.insert(name, value);
        self
    }

    /// Add a class token.
    #[must_use]
    pub fn with_class(mut self, token: impl Into<String>) -> Self {
        self.properties.add_class(token);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// First child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Node> {
        self.children.first()
    }

    /// Whether the class list contains `token`.
    #[must_use]
    pub fn has_class(&self, token: &str) -> bool {
        self.properties.has_class(token)
    }
}

/// Literal string payload of a text or comment node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Text {
    /// The payload. Missing in JSON decodes as empty.
    #[serde(default)]
    pub value: String,
}

impl Text {
    /// Create a text payload.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
