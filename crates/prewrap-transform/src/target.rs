//! Target block predicate and wrapper construction.

use prewrap_tree::{CLASS_NAME, Element, Node, PropertyValue};

/// Default target language.
pub const DEFAULT_LANGUAGE: &str = "mermaid";

/// Default marker class of wrapper nodes.
pub const DEFAULT_MARKER_CLASS: &str = "mermaid-wrapper";

/// Default attribute holding the extracted source.
pub const DEFAULT_RAW_CODE_ATTRIBUTE: &str = "data-mermaid-code";

/// Describes which code blocks are wrapped and what the wrapper looks like.
///
/// A target block is a `block_tag` element whose first child is a `code_tag`
/// element carrying `language_class` in its class list. Its wrapper is a
/// `wrapper_tag` element with `marker_class` and the `raw_code_attribute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBlock {
    /// Preformatted block tag (default: `pre`).
    pub block_tag: String,
    /// Code tag expected as the block's first child (default: `code`).
    pub code_tag: String,
    /// Class token identifying the content language (default: `language-mermaid`).
    pub language_class: String,
    /// Tag of the wrapper element (default: `div`).
    pub wrapper_tag: String,
    /// Marker class of the wrapper element (default: `mermaid-wrapper`).
    pub marker_class: String,
    /// Attribute receiving the raw source (default: `data-mermaid-code`).
    pub raw_code_attribute: String,
}

impl Default for TargetBlock {
    fn default() -> Self {
        Self::for_language(DEFAULT_LANGUAGE)
    }
}

impl TargetBlock {
    /// Target blocks fenced with `language`, using the default wrapper shape.
    #[must_use]
    pub fn for_language(language: &str) -> Self {
        Self {
            block_tag: "pre".to_owned(),
            code_tag: "code".to_owned(),
            language_class: format!("language-{language}"),
            wrapper_tag: "div".to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            raw_code_attribute: DEFAULT_RAW_CODE_ATTRIBUTE.to_owned(),
        }
    }

    /// Set the wrapper element tag.
    #[must_use]
    pub fn with_wrapper_tag(mut self, tag: impl Into<String>) -> Self {
        self.wrapper_tag = tag.into();
        self
    }

    /// Set the wrapper marker class.
    #[must_use]
    pub fn with_marker_class(mut self, class: impl Into<String>) -> Self {
        self.marker_class = class.into();
        self
    }

    /// Set the raw-code attribute name.
    #[must_use]
    pub fn with_raw_code_attribute(mut self, name: impl Into<String>) -> Self {
        self.raw_code_attribute = name.into();
        self
    }

    /// Set the full language class token (e.g. `language-diagram`).
    #[must_use]
    pub fn with_language_class(mut self, class: impl Into<String>) -> Self {
        self.language_class = class.into();
        self
    }

    /// Set the block and code tags.
    #[must_use]
    pub fn with_tags(mut self, block_tag: impl Into<String>, code_tag: impl Into<String>) -> Self {
        self.block_tag = block_tag.into();
        self.code_tag = code_tag.into();
        self
    }

    /// Whether `element` is a target block.
    ///
    /// Does not consider the parent; callers exclude blocks already nested
    /// in a wrapper. Malformed shapes never match.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        if element.tag_name != self.block_tag {
            return false;
        }
        let Some(Node::Element(code)) = element.first_child() else {
            return false;
        };
        if code.tag_name != self.code_tag {
            return false;
        }

        if let Some(class) = code.properties.get(CLASS_NAME)
            && class.is_scalar()
        {
            tracing::warn!(
                tag = %code.tag_name,
                "Ignoring code block with non-list className property"
            );
            return false;
        }

        code.has_class(&self.language_class)
    }

    /// Whether `element` has the shape of a wrapper produced for this target.
    ///
    /// Requires the wrapper tag, the marker class, a string raw-code
    /// attribute and exactly one child. An author-written element that only
    /// shares the tag and class does not qualify.
    #[must_use]
    pub fn is_wrapper(&self, element: &Element) -> bool {
        element.tag_name == self.wrapper_tag
            && element.has_class(&self.marker_class)
            && element.children.len() == 1
            && element
                .properties
                .get(&self.raw_code_attribute)
                .is_some_and(|value| value.as_str().is_some())
    }

    /// Build the wrapper around `original`, recording `raw_code`.
    #[must_use]
    pub fn wrap(&self, original: Element, raw_code: String) -> Element {
        Element::new(self.wrapper_tag.as_str())
            .with_property(
                CLASS_NAME,
                PropertyValue::List(vec![self.marker_class.clone()]),
            )
            .with_property(self.raw_code_attribute.as_str(), raw_code)
            .with_child(original)
    }
}
