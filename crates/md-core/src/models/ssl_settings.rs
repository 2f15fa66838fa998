use crate::variant;

use serde_json::{Map, Value};

const KNOWN_KEYS: &[&str] = &["enabled", "pemKeyFile"];

/// TLS options of a connection profile
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SslSettings {
    pub enabled: bool,
    pub pem_key_file: String,
    pub extra: Map<String, Value>,
}

impl SslSettings {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            enabled: variant::bool_or(map, "enabled", false),
            pem_key_file: variant::string(map, "pemKeyFile"),
            extra: variant::extra_entries(map, KNOWN_KEYS),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("enabled".into(), self.enabled.into());
        map.insert("pemKeyFile".into(), self.pem_key_file.clone().into());
        map
    }
}
