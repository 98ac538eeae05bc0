use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::dom::query::DomQuery;
use crate::dom::snapshot::{ElementSnapshot, SnapshotNode};
use crate::error::BuildError;

/// Index of an element inside a [`Document`]. Ids are assigned in document
/// (pre-order) order, so comparing ids compares document position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
enum Content {
    Element(NodeId),
    Text(String),
}

#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    attributes: BTreeMap<String, String>,
    visible: Option<bool>,
    parent: Option<NodeId>,
    content: Vec<Content>,
}

/// Arena-backed element tree built from an extraction snapshot.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
    /// Position of each node among all same-tag nodes, in document order.
    tag_indices: Vec<usize>,
    /// First `LABEL` in document order for each `for` value.
    labels_for: HashMap<String, NodeId>,
}

impl Document {
    pub fn from_snapshot(root: &SnapshotNode) -> Result<Self, BuildError> {
        let root = match root {
            SnapshotNode::Element(el) => el,
            SnapshotNode::Text { .. } => {
                return Err(BuildError::DomStructure(
                    "snapshot root is a text node".into(),
                ));
            }
        };

        Ok(Self::build(root))
    }

    pub fn from_element(root: ElementSnapshot) -> Self {
        Self::build(&root)
    }

    /// Parse a JSON snapshot. Nesting depth is unbounded; deep pages grow
    /// the stack on demand instead of hitting serde_json's default limit.
    pub fn from_json_str(json: &str) -> Result<Self, BuildError> {
        let parse_error = |e| BuildError::SnapshotParse {
            context: "element snapshot".into(),
            source: e,
        };

        let mut json_de = serde_json::Deserializer::from_str(json);
        json_de.disable_recursion_limit();
        let root = SnapshotNode::deserialize(serde_stacker::Deserializer::new(&mut json_de))
            .map_err(parse_error)?;
        json_de.end().map_err(parse_error)?;

        Self::from_snapshot(&root)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::SnapshotRead {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    fn build(root: &ElementSnapshot) -> Self {
        let mut doc = Document {
            nodes: vec![],
            tag_indices: vec![],
            labels_for: HashMap::new(),
        };
        let mut tag_counts: HashMap<String, usize> = HashMap::new();

        let root_id = doc.push_element(root, None, &mut tag_counts);
        let mut stack: Vec<(&ElementSnapshot, NodeId, usize)> = vec![(root, root_id, 0)];

        // Children are pushed as they are reached, which keeps ids in pre-order
        while let Some(frame) = stack.last_mut() {
            let (el, id, next) = *frame;
            let Some(child) = el.children.get(next) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;

            match child {
                SnapshotNode::Element(child_el) => {
                    let child_id = doc.push_element(child_el, Some(id), &mut tag_counts);
                    doc.nodes[id.0].content.push(Content::Element(child_id));
                    stack.push((child_el, child_id, 0));
                }
                SnapshotNode::Text { text } => {
                    doc.nodes[id.0].content.push(Content::Text(text.clone()));
                }
            }
        }

        doc
    }

    fn push_element(
        &mut self,
        el: &ElementSnapshot,
        parent: Option<NodeId>,
        tag_counts: &mut HashMap<String, usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let tag = el.tag.trim().to_uppercase();
        let attributes: BTreeMap<String, String> = el
            .attributes
            .iter()
            .map(|(k, v)| (k.to_lowercase(), v.clone()))
            .collect();

        let count = tag_counts.entry(tag.clone()).or_insert(0);
        self.tag_indices.push(*count);
        *count += 1;

        if tag == "LABEL" {
            if let Some(target) = attributes.get("for").filter(|v| !v.is_empty()) {
                self.labels_for.entry(target.clone()).or_insert(id);
            }
        }

        self.nodes.push(ElementData {
            tag,
            attributes,
            visible: el.visible,
            parent,
            content: vec![],
        });
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First element in document order whose `id` attribute matches.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.attributes.get("id").map(String::as_str) == Some(id))
            .map(NodeId)
    }

    fn node(&self, id: NodeId) -> &ElementData {
        &self.nodes[id.0]
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let mut stack: Vec<std::slice::Iter<'_, Content>> = vec![self.node(id).content.iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(Content::Text(text)) => out.push_str(text),
                Some(Content::Element(child)) => stack.push(self.node(*child).content.iter()),
                None => {
                    stack.pop();
                }
            }
        }
    }

    /// 1-based position among same-tag siblings, or `None` when the element
    /// has no same-tag siblings.
    fn same_tag_position(&self, id: NodeId) -> Option<usize> {
        let parent = self.node(id).parent?;
        let tag = &self.node(id).tag;
        let peers: Vec<NodeId> = self
            .children(parent)
            .into_iter()
            .filter(|c| &self.node(*c).tag == tag)
            .collect();

        if peers.len() < 2 {
            return None;
        }
        peers.iter().position(|p| *p == id).map(|i| i + 1)
    }

    fn css_anchor_id(&self, id: NodeId) -> Option<&str> {
        self.node(id)
            .attributes
            .get("id")
            .map(String::as_str)
            .filter(|v| is_css_identifier(v))
    }
}

impl DomQuery for Document {
    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .content
            .iter()
            .filter_map(|c| match c {
                Content::Element(id) => Some(*id),
                Content::Text(_) => None,
            })
            .collect()
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .attributes
            .get(&name.to_lowercase())
            .map(String::as_str)
    }

    fn tag_name(&self, node: NodeId) -> String {
        self.node(node).tag.clone()
    }

    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out.trim().to_string()
    }

    fn tag_index(&self, node: NodeId) -> usize {
        self.tag_indices[node.0]
    }

    fn label(&self, node: NodeId) -> Option<NodeId> {
        if let Some(id) = self.attribute(node, "id").filter(|v| !v.is_empty()) {
            if let Some(label) = self.labels_for.get(id) {
                return Some(*label);
            }
        }

        let mut current = self.parent(node);
        while let Some(ancestor) = current {
            if self.node(ancestor).tag == "LABEL" {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }

    fn css_selector(&self, node: NodeId) -> String {
        let mut steps = Vec::new();
        let mut current = Some(node);

        while let Some(id) = current {
            if let Some(anchor) = self.css_anchor_id(id) {
                steps.push(format!("#{}", anchor));
                break;
            }
            let tag = self.node(id).tag.to_lowercase();
            match self.same_tag_position(id) {
                Some(n) => steps.push(format!("{}:nth-of-type({})", tag, n)),
                None => steps.push(tag),
            }
            current = self.parent(id);
        }

        steps.reverse();
        steps.join(" > ")
    }

    fn xpath(&self, node: NodeId) -> String {
        if let Some(id) = self.attribute(node, "id").filter(|v| !v.is_empty()) {
            if !id.contains('"') {
                return format!("//*[@id=\"{}\"]", id);
            }
            if !id.contains('\'') {
                return format!("//*[@id='{}']", id);
            }
        }

        let mut segments = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let tag = self.node(id).tag.to_lowercase();
            match self.same_tag_position(id) {
                Some(n) => segments.push(format!("{}[{}]", tag, n)),
                None => segments.push(tag),
            }
            current = self.parent(id);
        }

        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    fn is_visible(&self, node: NodeId) -> bool {
        let data = self.node(node);
        if let Some(visible) = data.visible {
            return visible;
        }

        if data.attributes.contains_key("hidden") {
            return false;
        }

        if data.tag == "INPUT"
            && data
                .attributes
                .get("type")
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden"))
        {
            return false;
        }

        match data.attributes.get("style") {
            Some(style) => !style_hides(style),
            None => true,
        }
    }
}

/// Inline-style check for `display:none` / `visibility:hidden|collapse`.
fn style_hides(style: &str) -> bool {
    style.split(';').any(|decl| {
        let Some((prop, value)) = decl.split_once(':') else {
            return false;
        };
        let prop = prop.trim().to_lowercase();
        let value = value.trim().trim_end_matches("!important").trim().to_lowercase();
        match prop.as_str() {
            "display" => value == "none",
            "visibility" => value == "hidden" || value == "collapse",
            _ => false,
        }
    })
}

/// An id usable as a bare `#id` selector without escaping.
fn is_css_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
