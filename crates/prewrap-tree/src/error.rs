//! Error types for tree interchange.

/// Error while decoding or encoding a document tree.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// JSON syntax or shape error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level node was not a `root`.
    #[error("expected a root node at top level, found {kind}")]
    NotRoot {
        /// Kind of the node found instead.
        kind: &'static str,
    },
}
