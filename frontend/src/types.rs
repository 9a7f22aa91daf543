//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **View Types** - Framework-independent view tree
//! - **Error Types** - Frontend error handling

use serde::Serialize;
use std::fmt;

// =============================================================================
// View Types
// =============================================================================

/// Tags that accept user interaction.
const INTERACTIVE_TAGS: &[&str] = &[
    "a", "button", "input", "select", "textarea", "option", "details", "summary", "label", "form",
];

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A node of a rendered view.
///
/// Components build these as plain values; `components::render_node`
/// hands them to Leptos. Attributes keep their authoring order so that
/// [`ViewNode::to_html`] is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ViewNode {
    /// An HTML element
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<ViewNode>,
    },
    /// A text node
    Text { text: String },
}

impl ViewNode {
    /// Start an element with no attributes and no children.
    pub fn element(tag: &'static str) -> Self {
        ViewNode::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text { text: text.into() }
    }

    /// Add an attribute. No-op on text nodes.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let ViewNode::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.with_attr("class", class)
    }

    /// Append a child. No-op on text nodes.
    pub fn with_child(mut self, child: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    /// Element tag, `None` for text.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            ViewNode::Element { tag, .. } => Some(*tag),
            ViewNode::Text { .. } => None,
        }
    }

    /// First value of the named attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            ViewNode::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str()),
            ViewNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element { children, .. } => children,
            ViewNode::Text { .. } => &[],
        }
    }

    /// All nodes of the subtree in pre-order, starting with `self`.
    pub fn descendants(&self) -> Vec<&ViewNode> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Elements of the subtree with the given tag.
    pub fn find_all(&self, tag: &str) -> Vec<&ViewNode> {
        self.descendants()
            .into_iter()
            .filter(|node| node.tag() == Some(tag))
            .collect()
    }

    /// Concatenated text of the subtree.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Text { text } => text.clone(),
            ViewNode::Element { children, .. } => {
                children.iter().map(ViewNode::text_content).collect()
            }
        }
    }

    /// Whether the subtree contains anything a user can interact with.
    pub fn is_interactive(&self) -> bool {
        self.descendants().into_iter().any(|node| match node {
            ViewNode::Element { tag, attrs, .. } => {
                INTERACTIVE_TAGS.contains(tag) || attrs.iter().any(|(key, _)| key.starts_with("on"))
            }
            ViewNode::Text { .. } => false,
        })
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text { text } => out.push_str(&escape_html(text)),
            ViewNode::Element { tag, attrs, children } => {
                out.push('<');
                out.push_str(tag);
                for (key, value) in attrs {
                    out.push(' ');
                    out.push_str(key);
                    out.push_str("=\"");
                    out.push_str(&escape_html(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(tag) {
                    return;
                }
                for child in children {
                    child.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// The app could not be attached to the page.
    Mount(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Mount(msg) => write!(f, "Mount error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::element("section")
            .with_class("outer")
            .with_child(ViewNode::element("h2").with_child(ViewNode::text("Title")))
            .with_child(
                ViewNode::element("div")
                    .with_child(ViewNode::text("a "))
                    .with_child(ViewNode::element("em").with_child(ViewNode::text("b"))),
            )
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let tree = sample();
        let tags: Vec<_> = tree
            .descendants()
            .into_iter()
            .map(|node| node.tag().unwrap_or("#text"))
            .collect();

        assert_eq!(tags, ["section", "h2", "#text", "div", "#text", "em", "#text"]);
    }

    #[test]
    fn test_text_content_and_find_all() {
        let tree = sample();

        assert_eq!(tree.text_content(), "Titlea b");
        assert_eq!(tree.find_all("em").len(), 1);
        assert!(tree.find_all("img").is_empty());
        assert_eq!(tree.attr("class"), Some("outer"));
        assert_eq!(tree.attr("id"), None);
    }

    #[test]
    fn test_builders_ignore_text_nodes() {
        let node = ViewNode::text("plain")
            .with_class("ignored")
            .with_child(ViewNode::text("ignored"));

        assert_eq!(node, ViewNode::text("plain"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_interactive_detection() {
        assert!(!sample().is_interactive());

        let with_button = sample().with_child(ViewNode::element("button"));
        assert!(with_button.is_interactive());

        let with_handler = ViewNode::element("div").with_attr("onclick", "go()");
        assert!(with_handler.is_interactive());
    }

    #[test]
    fn test_to_html_escapes_and_closes_void_tags() {
        let node = ViewNode::element("div")
            .with_attr("title", "\"quoted\" & more")
            .with_child(ViewNode::element("img").with_attr("src", "a.png"))
            .with_child(ViewNode::text("What's <new>?"));

        assert_eq!(
            node.to_html(),
            "<div title=\"&quot;quoted&quot; &amp; more\"><img src=\"a.png\">What&#39;s &lt;new&gt;?</div>"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ViewNode::element("p").with_child(ViewNode::text("hi"))).unwrap();

        assert_eq!(json["kind"], "element");
        assert_eq!(json["tag"], "p");
        assert_eq!(json["children"][0]["kind"], "text");
        assert_eq!(json["children"][0]["text"], "hi");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Mount("no document".to_string());
        assert_eq!(err.to_string(), "Mount error: no document");
    }
}
