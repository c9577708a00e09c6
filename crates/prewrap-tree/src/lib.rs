//! Document tree model for the prewrap pipeline.
//!
//! The tree mirrors the HAST shape produced by markdown-to-HTML parsers:
//! a [`Root`] holding an ordered sequence of [`Node`]s, where elements carry
//! a tag name, typed [`Properties`] and children, and text nodes carry a
//! literal string payload.
//!
//! # Modules
//!
//! - [`node`]: node kinds and builder helpers
//! - [`properties`]: typed property values with class-list lookup
//! - [`text`]: order-preserving text extraction
//! - [`json`]: HAST JSON interchange
//! - [`html`]: HTML serialization
//!
//! # Example
//!
//! ```
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
//! assert_eq!(root.text_content(), "A-->B");
//! assert_eq!(
//!     prewrap_tree::to_html(&root),
//!     r#"<pre><code class="language-mermaid">A--&gt;B</code></pre>"#
//! );
//! ```

mod error;
pub mod html;
pub mod json;
pub mod node;
pub mod properties;
pub mod text;

pub use error::TreeError;
pub use html::{node_to_html, to_html};
pub use node::{Element, Node, Root, Text};
pub use properties::{CLASS_NAME, Properties, PropertyValue};
pub use text::text_content;
