//! Navigation URL table for the page toolbox.
//!
//! The host builds a default mapping of tool name to link target; the skin
//! may force entries to the disabled marker so they stop appearing in the
//! generic toolbox. Disabled entries serialize as `false`, which the
//! host's templates treat as "skip this tool".

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

/// A single navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavUrl {
    /// Resolved link target.
    Href(String),
    /// Suppressed entry, rendered as `false` so templates skip it.
    Disabled,
}

impl NavUrl {
    pub fn is_disabled(&self) -> bool {
        matches!(self, NavUrl::Disabled)
    }
}

impl Serialize for NavUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavUrl::Href(href) => serializer.serialize_str(href),
            NavUrl::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Mapping of tool name to navigation entry.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct NavUrls {
    entries: BTreeMap<String, NavUrl>,
}

impl NavUrls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a tool's link target.
    pub fn insert(&mut self, name: impl Into<String>, href: impl Into<String>) {
        self.entries.insert(name.into(), NavUrl::Href(href.into()));
    }

    /// Force a tool to the disabled marker. The key is present afterwards
    /// whether or not the host defined it.
    pub fn disable(&mut self, name: impl Into<String>) {
        self.entries.insert(name.into(), NavUrl::Disabled);
    }

    pub fn get(&self, name: &str) -> Option<&NavUrl> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NavUrl)> {
        self.entries.iter()
    }
}
