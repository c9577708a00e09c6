//! Code block wrapping transform.
//!
//! [`CodeBlockWrapper`] replaces every target block with a wrapper element
//! that records the block's raw source and keeps the original block as its
//! only child:
//!
//! ```text
//! pre > code.language-mermaid > "A-->B"
//! ```
//!
//! becomes
//!
//! ```text
//! div.mermaid-wrapper[data-mermaid-code="A-->B"] > pre > code.language-mermaid > "A-->B"
//! ```
//!
//! The diagram renderer downstream still finds the nested `pre > code` and
//! converts it, while consumers such as a "view source" toggle read the
//! attribute. The wrapper must therefore run before that renderer, which it
//! declares through [`TreeTransform::runs_before`].
//!
//! A block whose parent is already a wrapper is never a candidate, so a tree
//! can be passed through the transform any number of times without nesting
//! wrappers.

use prewrap_tree::{Element, Node, Root};

use crate::stage::TreeTransform;
use crate::target::TargetBlock;

/// Pipeline name of the wrapper stage.
pub const STAGE_NAME: &str = "prewrap-code-block-wrapper";

/// Pipeline name of the downstream diagram renderer the wrapper must precede.
pub const DIAGRAM_RENDERER_STAGE: &str = "rehype-mermaid";

/// A target block located without rewriting the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundBlock {
    /// Zero-based position among target blocks in document order.
    pub index: usize,
    /// Concatenated text of the block.
    pub raw_code: String,
}

/// Wraps target code blocks, preserving their raw source.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of documents, including concurrently.
#[derive(Debug, Clone)]
pub struct CodeBlockWrapper {
    target: TargetBlock,
    runs_before: Vec<String>,
}

impl Default for CodeBlockWrapper {
    fn default() -> Self {
        Self::new(TargetBlock::default())
    }
}

impl CodeBlockWrapper {
    /// Create a wrapper for `target`, ordered before the diagram renderer.
    #[must_use]
    pub fn new(target: TargetBlock) -> Self {
        Self {
            target,
            runs_before: vec![DIAGRAM_RENDERER_STAGE.to_owned()],
        }
    }

    /// Replace the stages this wrapper must precede.
    #[must_use]
    pub fn with_runs_before(mut self, stages: Vec<String>) -> Self {
        self.runs_before = stages;
        self
    }

    /// Target description.
    #[must_use]
    pub fn target(&self) -> &TargetBlock {
        &self.target
    }

    /// Wrap every target block in `root`, returning the number wrapped.
    ///
    /// A tree without target blocks is left untouched.
    pub fn wrap(&self, root: &mut Root) -> usize {
        let mut wrapped = 0;
        self.visit_children(&mut root.children, false, &mut wrapped);
        tracing::debug!(wrapped, class = %self.target.language_class, "Code block wrapping finished");
        wrapped
    }

    /// Locate target blocks without modifying the tree.
    ///
    /// Returns exactly the blocks [`wrap`](Self::wrap) would rewrite.
    #[must_use]
    pub fn find(&self, root: &Root) -> Vec<FoundBlock> {
        let mut found = Vec::new();
        self.find_in_children(&root.children, false, &mut found);
        found
    }

    fn visit_children(&self, children: &mut [Node], parent_is_wrapper: bool, wrapped: &mut usize) {
        for child in children {
            self.visit(child, parent_is_wrapper, wrapped);
        }
    }

    fn visit(&self, node: &mut Node, parent_is_wrapper: bool, wrapped: &mut usize) {
        match node {
            Node::Element(element) => {
                if !parent_is_wrapper && self.target.matches(element) {
                    self.replace_with_wrapper(element);
                    *wrapped += 1;
                }
                // The slot now holds the wrapper, whose original block is not a candidate.
                let is_wrapper = self.target.is_wrapper(element);
                self.visit_children(&mut element.children, is_wrapper, wrapped);
            }
            Node::Root(root) => self.visit_children(&mut root.children, false, wrapped),
            Node::Text(_) | Node::Comment(_) | Node::Doctype => {}
        }
    }

    /// Swap the block in `slot` for its wrapper, keeping the block as the wrapper's child.
    fn replace_with_wrapper(&self, slot: &mut Element) {
        let raw_code = slot.text_content();
        tracing::debug!(
            tag = %slot.tag_name,
            bytes = raw_code.len(),
            "Wrapping code block"
        );
        let original = std::mem::take(slot);
        *slot = self.target.wrap(original, raw_code);
    }

    fn find_in_children(&self, children: &[Node], parent_is_wrapper: bool, found: &mut Vec<FoundBlock>) {
        for child in children {
            match child {
                Node::Element(element) => {
                    if !parent_is_wrapper && self.target.matches(element) {
                        found.push(FoundBlock {
                            index: found.len(),
                            raw_code: element.text_content(),
                        });
                    }
                    let is_wrapper = self.target.is_wrapper(element);
                    self.find_in_children(&element.children, is_wrapper, found);
                }
                Node::Root(root) => self.find_in_children(&root.children, false, found),
                Node::Text(_) | Node::Comment(_) | Node::Doctype => {}
            }
        }
    }
}

impl TreeTransform for CodeBlockWrapper {
    fn name(&self) -> &str {
        STAGE_NAME
    }

    fn runs_before(&self) -> &[String] {
        &self.runs_before
    }

    fn apply(&self, root: &mut Root) -> usize {
        self.wrap(root)
    }
}

/// Whether `element` is the default wrapper shape.
///
/// Convenience for downstream consumers that use the default target.
#[must_use]
pub fn is_default_wrapper(element: &Element) -> bool {
    TargetBlock::default().is_wrapper(element)
}
