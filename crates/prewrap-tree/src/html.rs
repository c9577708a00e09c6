//! HTML serialization of document trees.

use crate::node::{Element, Node, Root};
use crate::properties::{CLASS_NAME, PropertyValue};

/// Elements that never have closing tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Serialize a document to an HTML string.
#[must_use]
pub fn to_html(root: &Root) -> String {
    let mut out = String::with_capacity(4096);
    for child in &root.children {
        serialize_node(child, false, &mut out);
    }
    out
}

/// Serialize a single node (and its subtree) to an HTML string.
#[must_use]
pub fn node_to_html(node: &Node) -> String {
    let mut out = String::new();
    serialize_node(node, false, &mut out);
    out
}

fn serialize_node(node: &Node, raw_text: bool, out: &mut String) {
    match node {
        Node::Root(root) => {
            for child in &root.children {
                serialize_node(child, false, out);
            }
        }
        Node::Element(element) => serialize_element(element, out),
        Node::Text(text) if raw_text => out.push_str(&text.value),
        Node::Text(text) => out.push_str(&escape_text(&text.value)),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(&comment.value);
            out.push_str("-->");
        }
        Node::Doctype => out.push_str("<!doctype html>"),
    }
}

fn serialize_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag_name);

    for (name, value) in element.properties.iter() {
        serialize_attribute(name, value, out);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag_name.as_str()) {
        return;
    }

    let raw_text = RAW_TEXT_ELEMENTS.contains(&element.tag_name.as_str());
    for child in &element.children {
        serialize_node(child, raw_text, out);
    }

    out.push_str("</");
    out.push_str(&element.tag_name);
    out.push('>');
}

fn serialize_attribute(name: &str, value: &PropertyValue, out: &mut String) {
    let rendered = match value {
        PropertyValue::Bool(false) => return,
        PropertyValue::Bool(true) => None,
        PropertyValue::Number(n) => Some(n.to_string()),
        PropertyValue::String(s) => Some(s.clone()),
        PropertyValue::List(items) => Some(items.join(" ")),
    };

    out.push(' ');
    out.push_str(&attribute_name(name));
    if let Some(rendered) = rendered {
        out.push_str("=\"");
        out.push_str(&escape_attr(&rendered));
        out.push('"');
    }
}

/// Map a HAST property name to its HTML attribute name.
///
/// `dataFooBar` becomes `data-foo-bar`; names already in attribute form
/// (such as `data-mermaid-code`) pass through unchanged.
fn attribute_name(property: &str) -> String {
    match property {
        CLASS_NAME => return "class".to_owned(),
        "htmlFor" => return "for".to_owned(),
        "httpEquiv" => return "http-equiv".to_owned(),
        "acceptCharset" => return "accept-charset".to_owned(),
        _ => {}
    }

    if property
        .strip_prefix("data")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
    {
        let mut name = String::with_capacity(property.len() + 4);
        name.push_str("data");
        for c in property["data".len()..].chars() {
            if c.is_ascii_uppercase() {
                name.push('-');
                name.push(c.to_ascii_lowercase());
            } else {
                name.push(c);
            }
        }
        return name;
    }

    property.to_ascii_lowercase()
}

/// Escape text content.
fn escape_text(text: &str) -> String {
    escape(text, false)
}

/// Escape attribute values.
fn escape_attr(text: &str) -> String {
    escape(text, true)
}

fn escape(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}
