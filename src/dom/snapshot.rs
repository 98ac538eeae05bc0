use std::collections::BTreeMap;

use serde::Deserialize;

/// One node of an extracted page snapshot, as emitted by the browser-side
/// extraction script.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    Element(ElementSnapshot),
    Text { text: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct ElementSnapshot {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Computed visibility reported by the extractor. When absent, visibility
    /// is inferred from attributes and inline style.
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

impl ElementSnapshot {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: BTreeMap::new(),
            visible: None,
            children: vec![],
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn child(mut self, child: ElementSnapshot) -> Self {
        self.children.push(SnapshotNode::Element(child));
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(SnapshotNode::Text {
            text: text.to_string(),
        });
        self
    }
}
