//! Text extraction.

use crate::node::{Element, Node, Root};

/// Concatenate every text payload under `node` in document order.
///
/// Text nodes contribute their value verbatim. Other nodes contribute
/// nothing themselves, but their children are still walked. Comments are
/// not text and are skipped.
#[must_use]
pub fn text_content(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::Root(Root { children }) | Node::Element(Element { children, .. }) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Node::Comment(_) | Node::Doctype => {}
    }
}

impl Element {
    /// Concatenated text of all descendants, see [`text_content`].
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }
}

impl Root {
    /// Concatenated text of the whole document, see [`text_content`].
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            collect_text(child, &mut out);
        }
        out
    }
}
