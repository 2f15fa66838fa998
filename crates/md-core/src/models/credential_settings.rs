use crate::variant;
use crate::{DEFAULT_AUTH_DATABASE, DEFAULT_AUTH_MECHANISM};

use serde_json::{Map, Value};

const KNOWN_KEYS: &[&str] = &[
    "userName",
    "userPassword",
    "databaseName",
    "mechanism",
    "useManuallyVisibleDbs",
    "manuallyVisibleDbs",
    "enabled",
];

/// Authentication credential attached to a connection profile
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialSettings {
    pub user_name: String,
    /// Opaque, possibly encrypted by the caller
    pub user_password: String,
    pub database_name: String,
    pub mechanism: String,
    pub use_manually_visible_dbs: bool,
    pub manually_visible_dbs: String,
    pub enabled: bool,
    pub extra: Map<String, Value>,
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            user_name: String::new(),
            user_password: String::new(),
            database_name: DEFAULT_AUTH_DATABASE.to_string(),
            mechanism: DEFAULT_AUTH_MECHANISM.to_string(),
            use_manually_visible_dbs: false,
            manually_visible_dbs: String::new(),
            enabled: false,
            extra: Map::new(),
        }
    }
}

impl CredentialSettings {
    pub fn new(
        user_name: impl Into<String>,
        user_password: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_password: user_password.into(),
            database_name: database_name.into(),
            enabled: true,
            ..Self::default()
        }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            user_name: variant::string(map, "userName"),
            user_password: variant::string(map, "userPassword"),
            database_name: variant::string_or(map, "databaseName", DEFAULT_AUTH_DATABASE),
            mechanism: variant::string_or(map, "mechanism", DEFAULT_AUTH_MECHANISM),
            use_manually_visible_dbs: variant::bool_or(map, "useManuallyVisibleDbs", false),
            manually_visible_dbs: variant::string(map, "manuallyVisibleDbs"),
            enabled: variant::bool_or(map, "enabled", false),
            extra: variant::extra_entries(map, KNOWN_KEYS),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("userName".into(), self.user_name.clone().into());
        map.insert("userPassword".into(), self.user_password.clone().into());
        map.insert("databaseName".into(), self.database_name.clone().into());
        map.insert("mechanism".into(), self.mechanism.clone().into());
        map.insert(
            "useManuallyVisibleDbs".into(),
            self.use_manually_visible_dbs.into(),
        );
        map.insert(
            "manuallyVisibleDbs".into(),
            self.manually_visible_dbs.clone().into(),
        );
        map.insert("enabled".into(), self.enabled.into());
        map
    }
}
