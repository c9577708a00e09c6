//! HAST JSON interchange.
//!
//! Upstream parsers hand trees over as HAST JSON:
//!
//! ```json
//! {"type": "root", "children": [
//!   {"type": "element", "tagName": "pre", "properties": {}, "children": [
//!     {"type": "element", "tagName": "code",
//!      "properties": {"className": ["language-mermaid"]},
//!      "children": [{"type": "text", "value": "A-->B"}]}
//!   ]}
//! ]}
//! ```
//!
//! Missing `children` and `properties` decode as empty. Unknown fields such
//! as `position` and `data` are ignored.

use serde::Serialize;

use crate::error::TreeError;
use crate::node::{Node, Root};

/// Borrowed view used to emit the `type` tag for a root without cloning.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RootRef<'a> {
    Root(&'a Root),
}

impl Root {
    /// Decode a root from HAST JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] on malformed JSON and
    /// [`TreeError::NotRoot`] when the top-level node is not a root.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        match serde_json::from_str::<Node>(json)? {
            Node::Root(root) => Ok(root),
            other => Err(TreeError::NotRoot { kind: other.kind() }),
        }
    }

    /// Encode as compact HAST JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string(&RootRef::Root(self))?)
    }

    /// Encode as indented HAST JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(&RootRef::Root(self))?)
    }
}
