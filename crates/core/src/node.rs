//! Content nodes for Telegraph page bodies.
//!
//! A page body is an ordered list of [`Node`]s. Each node is either raw text or
//! a [`NodeElement`] carrying a tag, attributes, and its own children, which
//! makes the body a strict tree owned top-down.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use telegraph_core::Node;
//!
//! let link = Node::element(
//!     "a",
//!     HashMap::from([("href".to_string(), "https://example.com".to_string())]),
//!     vec![Node::text("example")],
//! );
//! let body = vec![Node::text("See "), link];
//!
//! let json = serde_json::to_string(&body).unwrap();
//! assert_eq!(json, r#"["See ",{"tag":"a","attrs":{"href":"https://example.com"},"children":["example"]}]"#);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single content node: raw text or an element.
///
/// Serializes to a JSON string for [`Node::Text`] and to a JSON object for
/// [`Node::Element`], which is the shape the Telegraph API expects in the
/// `content` field of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Character data, stored verbatim.
    Text(String),
    /// A tagged container.
    Element(NodeElement),
}

/// An element node with a tag name, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeElement {
    /// Tag name, optionally prefixed with a namespace as `namespace.name`.
    pub tag: String,
    /// Attributes; omitted on the wire when empty.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attrs: HashMap<String, String>,
    /// Children in document order; omitted on the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a text node from the given value without any transformation.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Creates an element node from a tag, attributes, and children.
    ///
    /// The inputs are stored as given; the tag is not validated.
    pub fn element(tag: impl Into<String>, attrs: HashMap<String, String>, children: Vec<Node>) -> Self {
        Node::Element(NodeElement { tag: tag.into(), attrs, children })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns the text of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }

    /// Returns the element of an element node.
    pub fn as_element(&self) -> Option<&NodeElement> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(element),
        }
    }

    /// Concatenated character data of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl NodeElement {
    /// Creates an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Default::default() }
    }

    /// Sets an attribute, replacing any previous value for the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Appends children after any existing ones.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<NodeElement> for Node {
    fn from(element: NodeElement) -> Self {
        Node::Element(element)
    }
}
