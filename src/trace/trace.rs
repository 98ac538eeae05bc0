use serde::Serialize;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// Full subtree scan into a new model
    Fresh,
    /// Single element appended to an existing model
    Incremental,
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Fresh => write!(f, "fresh"),
            BuildMode::Incremental => write!(f, "incremental"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BuildEvent {
    pub timestamp_ms: u128,
    pub event: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BuildMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_count: Option<usize>,
}

impl BuildEvent {
    pub fn now(event: &'static str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            event,
            mode: None,
            profile: None,
            name: None,
            tag: None,
            strategy: None,
            xpath: None,
            entity_count: None,
        }
    }

    pub fn model_started(mode: BuildMode, profile: &str) -> Self {
        let mut e = Self::now("model_started");
        e.mode = Some(mode);
        e.profile = Some(profile.to_string());
        e
    }

    pub fn subtree_pruned(tag: &str, xpath: &str) -> Self {
        Self::now("subtree_pruned").with_tag(tag).with_xpath(xpath)
    }

    pub fn entity_added(name: &str, tag: &str, strategy: Option<impl ToString>) -> Self {
        let mut e = Self::now("entity_added").with_tag(tag);
        e.name = Some(name.to_string());
        e.strategy = strategy.map(|s| s.to_string());
        e
    }

    pub fn model_finished(mode: BuildMode, entity_count: usize) -> Self {
        let mut e = Self::now("model_finished");
        e.mode = Some(mode);
        e.entity_count = Some(entity_count);
        e
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_xpath(mut self, xpath: &str) -> Self {
        self.xpath = Some(xpath.to_string());
        self
    }
}
