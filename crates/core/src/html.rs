//! HTML fragment to content-node conversion.
//!
//! This module parses an HTML fragment with the HTML5 fragment algorithm
//! (as if the markup were placed inside `<body>`) and translates the parsed
//! DOM into [`Node`]s. It performs no cleanup: whitespace-only text is kept,
//! adjacent text is not merged, and unknown tags pass through. Comments,
//! doctypes, and processing instructions are dropped.
//!
//! # Example
//!
//! ```rust
//! use telegraph_core::{Node, nodes_from_html};
//!
//! let nodes = nodes_from_html("a<b>x</b>c").unwrap();
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[0], Node::text("a"));
//! assert_eq!(nodes[1].as_element().unwrap().tag, "b");
//! assert_eq!(nodes[2], Node::text("c"));
//! ```

use std::collections::HashMap;

use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node as DomNode};

use crate::node::Node;
use crate::{Result, TelegraphError};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const MATHML_NAMESPACE: &str = "http://www.w3.org/1998/Math/MathML";

/// Converts an HTML fragment into content nodes.
///
/// Returns one node per top-level text or element child of the parsed
/// fragment, in document order. HTML5 parsing never rejects markup, so for
/// string input this only fails if the parser itself cannot run.
///
/// # Example
///
/// ```rust
/// use telegraph_core::nodes_from_html;
///
/// let nodes = nodes_from_html(r#"<img src="x.png" alt="y">"#).unwrap();
/// let img = nodes[0].as_element().unwrap();
/// assert_eq!(img.tag, "img");
/// assert_eq!(img.attr("src"), Some("x.png"));
/// assert!(img.children.is_empty());
/// ```
pub fn nodes_from_html(html: &str) -> Result<Vec<Node>> {
    let fragment = Html::parse_fragment(html);

    for error in &fragment.errors {
        tracing::trace!(%error, "recovered from HTML parse error");
    }

    let nodes = convert_children(*fragment.root_element());
    tracing::debug!(input_len = html.len(), nodes = nodes.len(), "converted HTML fragment");

    Ok(nodes)
}

/// Converts an HTML byte stream into content nodes.
///
/// # Errors
///
/// Returns [`TelegraphError::HtmlParseError`] if the bytes are not valid
/// UTF-8. No partial tree is produced.
pub fn nodes_from_html_bytes(bytes: &[u8]) -> Result<Vec<Node>> {
    let html = std::str::from_utf8(bytes).map_err(|e| TelegraphError::HtmlParseError(e.to_string()))?;
    nodes_from_html(html)
}

/// Convert the child list of a parsed node, skipping non-content nodes
fn convert_children(parent: NodeRef<'_, DomNode>) -> Vec<Node> {
    let mut nodes = Vec::new();
    append_children(parent, &mut nodes);
    nodes
}

fn append_children(parent: NodeRef<'_, DomNode>, nodes: &mut Vec<Node>) {
    for child in parent.children() {
        match child.value() {
            DomNode::Text(text) => nodes.push(Node::text(&**text)),
            DomNode::Element(element) => nodes.push(convert_element(child, element)),
            // <template> contents live in a fragment under the element
            DomNode::Fragment => append_children(child, nodes),
            _ => {}
        }
    }
}

fn convert_element(node: NodeRef<'_, DomNode>, value: &Element) -> Node {
    let attrs: HashMap<String, String> = value
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    let tag = match namespace_prefix(&value.name.ns) {
        Some(prefix) => format!("{}.{}", prefix, value.name()),
        None => value.name().to_string(),
    };

    Node::element(tag, attrs, convert_children(node))
}

/// Short namespace name for a namespace URI, `None` for plain HTML elements.
///
/// Foreign content is named the way HTML5 tree builders report it (`svg`,
/// `math`) so that tags come out as `svg.svg`, `math.mi`, and so on.
fn namespace_prefix(ns: &str) -> Option<&str> {
    match ns {
        "" | HTML_NAMESPACE => None,
        SVG_NAMESPACE => Some("svg"),
        MATHML_NAMESPACE => Some("math"),
        other => Some(other),
    }
}
