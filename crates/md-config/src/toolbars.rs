use std::collections::BTreeMap;

use md_core::variant;
use serde_json::{Map, Value};

/// Toolbars every document knows about, with their visibility when unset.
pub const WELL_KNOWN_TOOLBARS: [(&str, bool); 5] = [
    ("connect", true),
    ("open_save", true),
    ("exec", true),
    ("explorer", true),
    ("logs", false),
];

/// Toolbar visibility by name. Names other than the well-known ones are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbars {
    visible: BTreeMap<String, bool>,
}

impl Default for Toolbars {
    fn default() -> Self {
        Self::from_map(&Map::new())
    }
}

impl Toolbars {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut visible: BTreeMap<String, bool> = map
            .iter()
            .map(|(name, value)| (name.clone(), variant::to_bool(value)))
            .collect();

        for (name, default) in WELL_KNOWN_TOOLBARS {
            visible.entry(name.to_string()).or_insert(default);
        }

        Self { visible }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        self.visible
            .iter()
            .map(|(name, shown)| (name.clone(), Value::Bool(*shown)))
            .collect()
    }

    /// Unknown names are hidden.
    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.get(name).copied().unwrap_or(false)
    }

    pub fn set_visible(&mut self, name: impl Into<String>, visible: bool) {
        self.visible.insert(name.into(), visible);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.visible.iter().map(|(name, shown)| (name.as_str(), *shown))
    }
}
