use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ways of re-finding an element, in fixed priority order.
///
/// The derived `Ord` follows declaration order, which is the order
/// candidates are offered and the order primary selection scans them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LocatorStrategy {
    Id,
    LinkText,
    PartialLinkText,
    Name,
    Css,
    ClassName,
    TagName,
    Xpath,
    TagIndex,
}

impl LocatorStrategy {
    pub const ALL: [LocatorStrategy; 9] = [
        LocatorStrategy::Id,
        LocatorStrategy::LinkText,
        LocatorStrategy::PartialLinkText,
        LocatorStrategy::Name,
        LocatorStrategy::Css,
        LocatorStrategy::ClassName,
        LocatorStrategy::TagName,
        LocatorStrategy::Xpath,
        LocatorStrategy::TagIndex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocatorStrategy::Id => "id",
            LocatorStrategy::LinkText => "linkText",
            LocatorStrategy::PartialLinkText => "partialLinkText",
            LocatorStrategy::Name => "name",
            LocatorStrategy::Css => "css",
            LocatorStrategy::ClassName => "className",
            LocatorStrategy::TagName => "tagName",
            LocatorStrategy::Xpath => "xpath",
            LocatorStrategy::TagIndex => "tagIndex",
        }
    }
}

impl fmt::Display for LocatorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocatorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LocatorStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown locator strategy '{}'", s))
    }
}

/// A named set of locator strategies a consumer is able to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub locators: BTreeSet<LocatorStrategy>,
}

impl Profile {
    pub fn new(name: &str, locators: &[LocatorStrategy]) -> Self {
        Self {
            name: name.to_string(),
            locators: locators.iter().copied().collect(),
        }
    }

    pub fn allows(&self, strategy: LocatorStrategy) -> bool {
        self.locators.contains(&strategy)
    }
}
