use std::collections::HashMap;

use crate::dom::query::ElementType;
use crate::profile::profile_model::LocatorStrategy;

/// One candidate way of re-finding an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    pub strategy: LocatorStrategy,
    /// Computed value; empty means the strategy is not usable for this element.
    pub locator: String,
    pub selected: bool,
    /// Kept regardless of profile.
    pub always: bool,
    /// Not meant to be shown to users unless it ends up selected.
    pub hidden: bool,
}

impl Locator {
    pub fn new(strategy: LocatorStrategy, locator: impl Into<String>) -> Self {
        Self {
            strategy,
            locator: locator.into(),
            selected: false,
            always: false,
            hidden: false,
        }
    }

    /// The synthetic `<TAG><index>` locator of last resort.
    pub fn fallback(locator: impl Into<String>) -> Self {
        Self {
            strategy: LocatorStrategy::TagIndex,
            locator: locator.into(),
            selected: true,
            always: true,
            hidden: true,
        }
    }

    pub fn is_usable(&self) -> bool {
        !self.locator.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub locators: Vec<Locator>,
    pub tag_name: String,
    pub element_type: ElementType,
}

impl Entity {
    pub fn selected_locator(&self) -> Option<&Locator> {
        self.locators.iter().find(|l| l.selected)
    }

    pub fn locator(&self, strategy: LocatorStrategy) -> Option<&Locator> {
        self.locators.iter().find(|l| l.strategy == strategy)
    }
}

/// Catalogue of interactive entities plus the name registry that keeps their
/// names distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    /// Base name -> number of times it has been handed out.
    pub used_names: HashMap<String, u32>,
    /// Discovery order.
    pub entities: Vec<Entity>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }
}
