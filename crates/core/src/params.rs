//! Form parameters for Telegraph API requests.
//!
//! The API takes `application/x-www-form-urlencoded` bodies. String values are
//! sent as-is; every other value (booleans, numbers, field lists, and the
//! content node tree) is sent as its JSON encoding.

use serde::Serialize;

use crate::Result;
use crate::node::Node;

/// Encodes a content tree into the JSON array expected by the `content` field.
///
/// # Example
///
/// ```rust
/// use telegraph_core::{Node, content_to_json};
///
/// let json = content_to_json(&[Node::text("Hello, "), Node::element("b", Default::default(), vec![Node::text("world")])]).unwrap();
/// assert_eq!(json, r#"["Hello, ",{"tag":"b","children":["world"]}]"#);
/// ```
pub fn content_to_json(nodes: &[Node]) -> Result<String> {
    Ok(serde_json::to_string(nodes)?)
}

/// Ordered list of form parameters for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string parameter verbatim.
    pub fn insert_str(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.set(key, value.into());
        self
    }

    /// Adds a string parameter only if the value is present and non-empty.
    pub fn insert_opt_str(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.set(key, value.to_string());
        }
        self
    }

    /// Adds a parameter as its JSON encoding.
    pub fn insert_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<&mut Self> {
        let encoded = serde_json::to_string(value)?;
        self.set(key, encoded);
        Ok(self)
    }

    /// Adds the content tree under `content`.
    pub fn insert_content(&mut self, nodes: &[Node]) -> Result<&mut Self> {
        let encoded = content_to_json(nodes)?;
        self.set("content", encoded);
        Ok(self)
    }

    /// Gets the encoded value of a parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The key/value pairs, ready for form encoding.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeElement;

    #[test]
    fn test_strings_are_verbatim() {
        let mut params = Params::new();
        params.insert_str("title", "Quotes \"stay\" raw");
        assert_eq!(params.get("title"), Some("Quotes \"stay\" raw"));
    }

    #[test]
    fn test_optional_strings_skip_empty() {
        let mut params = Params::new();
        params
            .insert_opt_str("author_name", Some(""))
            .insert_opt_str("author_url", None)
            .insert_opt_str("short_name", Some("sandbox"));

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("short_name"), Some("sandbox"));
    }

    #[test]
    fn test_non_strings_are_json() {
        let mut params = Params::new();
        params.insert_json("return_content", &true).unwrap();
        params.insert_json("limit", &50).unwrap();
        params.insert_json("fields", &["short_name", "page_count"]).unwrap();

        assert_eq!(params.get("return_content"), Some("true"));
        assert_eq!(params.get("limit"), Some("50"));
        assert_eq!(params.get("fields"), Some(r#"["short_name","page_count"]"#));
    }

    #[test]
    fn test_content_encoding() {
        let nodes = vec![
            Node::text("a"),
            NodeElement::new("img").with_attr("src", "/x.png").into(),
            NodeElement::new("p").into(),
        ];
        let mut params = Params::new();
        params.insert_content(&nodes).unwrap();

        assert_eq!(
            params.get("content"),
            Some(r#"["a",{"tag":"img","attrs":{"src":"/x.png"}},{"tag":"p"}]"#)
        );
    }

    #[test]
    fn test_empty_content_is_empty_array() {
        assert_eq!(content_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_replacing_key_keeps_position() {
        let mut params = Params::new();
        params.insert_str("a", "1").insert_str("b", "2").insert_str("a", "3");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some("3"));
    }
}
