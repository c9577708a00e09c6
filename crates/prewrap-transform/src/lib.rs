//! Diagram code block wrapping for document tree pipelines.
//!
//! [`CodeBlockWrapper`] rewrites `pre > code.language-mermaid` blocks into a
//! wrapper element that records the raw source in an attribute and keeps the
//! original block as its only child, so that a diagram renderer running later
//! can still convert it.
//!
//! # Ordering
//!
//! The wrapper must run before the diagram renderer (`rehype-mermaid` by
//! default). Stages declare such requirements through
//! [`TreeTransform::runs_before`], and [`Pipeline`] rejects orderings that
//! break them.
//!
//! # Example
//!
//! ```
//! use prewrap_transform::{CodeBlockWrapper, Pipeline, transform};
//! use prewrap_tree::{Element, Node, Root};
//!
//! let root = Root::new(vec![
//!     Element::new("pre")
//!         .with_child(
//!             Element::new("code")
//!                 .with_class("language-mermaid")
//!                 .with_child(Node::text("A-->B")),
//!         )
//!         .into(),
//! ]);
//!
//! let root = transform(root);
//! let wrapper = root.children[0].as_element().unwrap();
//! assert_eq!(wrapper.tag_name, "div");
//! assert!(wrapper.children[0].is_element_named("pre"));
//!
//! // The same stage inside a pipeline.
//! let pipeline = Pipeline::new().with_stage(CodeBlockWrapper::default()).unwrap();
//! let mut again = root.clone();
//! let reports = pipeline.run(&mut again).unwrap();
//! assert_eq!(reports[0].rewritten, 0);
//! ```

mod error;
mod pipeline;
mod stage;
mod target;
mod wrapper;

use prewrap_tree::Root;

pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use stage::{TransformReport, TreeTransform};
pub use target::{DEFAULT_LANGUAGE, DEFAULT_MARKER_CLASS, DEFAULT_RAW_CODE_ATTRIBUTE, TargetBlock};
pub use wrapper::{
    CodeBlockWrapper, DIAGRAM_RENDERER_STAGE, FoundBlock, STAGE_NAME, is_default_wrapper,
};

/// Wrap every default target block in `root`.
///
/// Uses [`TargetBlock::default`] (`pre > code.language-mermaid` into
/// `div.mermaid-wrapper[data-mermaid-code]`). A tree without target blocks
/// is returned unchanged.
#[must_use]
pub fn transform(mut root: Root) -> Root {
    CodeBlockWrapper::default().wrap(&mut root);
    root
}
