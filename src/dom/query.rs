use std::fmt;

use crate::dom::document::NodeId;

/// Coarse classification of an element, derived from tag and `type`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementType {
    Link,
    Button,
    Submit,
    Reset,
    Checkbox,
    Radio,
    File,
    Hidden,
    Select,
    TextArea,
    /// Text-like input; carries the `type` (text, email, password, ...)
    TextInput(String),
    Other(String),
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Link => write!(f, "link"),
            ElementType::Button => write!(f, "button"),
            ElementType::Submit => write!(f, "submit"),
            ElementType::Reset => write!(f, "reset"),
            ElementType::Checkbox => write!(f, "checkbox"),
            ElementType::Radio => write!(f, "radio"),
            ElementType::File => write!(f, "file"),
            ElementType::Hidden => write!(f, "hidden"),
            ElementType::Select => write!(f, "select"),
            ElementType::TextArea => write!(f, "textarea"),
            ElementType::TextInput(kind) => write!(f, "{}", kind),
            ElementType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Read-only element queries the model builder depends on.
///
/// Implementors answer each question about a single element (or its
/// ancestry and siblings) without mutating anything. Querying a node that
/// is not part of the tree is a caller error; use [`DomQuery::contains`]
/// to check first.
pub trait DomQuery {
    fn contains(&self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Element children in document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Uppercase tag name, e.g. `INPUT`.
    fn tag_name(&self, node: NodeId) -> String;

    /// Descendant text, trimmed.
    fn text_content(&self, node: NodeId) -> String;

    /// 0-based position among all elements sharing this tag, in document order.
    fn tag_index(&self, node: NodeId) -> usize;

    /// The `LABEL` element associated with a control, if any.
    fn label(&self, node: NodeId) -> Option<NodeId>;

    fn css_selector(&self, node: NodeId) -> String;

    fn xpath(&self, node: NodeId) -> String;

    /// Whether the element renders. Also decides whether its subtree is
    /// worth descending into.
    fn is_visible(&self, node: NodeId) -> bool;

    fn id(&self, node: NodeId) -> String {
        self.attribute(node, "id").unwrap_or_default().to_string()
    }

    fn name_attr(&self, node: NodeId) -> String {
        self.attribute(node, "name").unwrap_or_default().to_string()
    }

    fn class_name(&self, node: NodeId) -> String {
        self.attribute(node, "class").unwrap_or_default().trim().to_string()
    }

    fn value(&self, node: NodeId) -> String {
        self.attribute(node, "value").unwrap_or_default().to_string()
    }

    fn href(&self, node: NodeId) -> Option<String> {
        self.attribute(node, "href").map(str::to_string)
    }

    /// Lowercased `type`, with the HTML defaults for INPUT and BUTTON.
    fn input_type(&self, node: NodeId) -> String {
        match self.attribute(node, "type") {
            Some(t) if !t.trim().is_empty() => t.trim().to_lowercase(),
            _ => match self.tag_name(node).as_str() {
                "INPUT" => "text".to_string(),
                "BUTTON" => "submit".to_string(),
                _ => String::new(),
            },
        }
    }

    /// Visible text of an anchor; empty for anything else.
    fn link_text(&self, node: NodeId) -> String {
        if self.tag_name(node) == "A" {
            self.text_content(node)
        } else {
            String::new()
        }
    }

    fn element_type(&self, node: NodeId) -> ElementType {
        let tag = self.tag_name(node);
        match tag.as_str() {
            "A" => ElementType::Link,
            "BUTTON" => ElementType::Button,
            "SELECT" => ElementType::Select,
            "TEXTAREA" => ElementType::TextArea,
            "INPUT" => match self.input_type(node).as_str() {
                "submit" => ElementType::Submit,
                "reset" => ElementType::Reset,
                "button" | "image" => ElementType::Button,
                "checkbox" => ElementType::Checkbox,
                "radio" => ElementType::Radio,
                "file" => ElementType::File,
                "hidden" => ElementType::Hidden,
                kind => ElementType::TextInput(kind.to_string()),
            },
            _ => ElementType::Other(tag.to_lowercase()),
        }
    }
}
