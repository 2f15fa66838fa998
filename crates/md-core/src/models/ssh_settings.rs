use crate::variant;
use crate::{DEFAULT_SSH_AUTH_METHOD, DEFAULT_SSH_PORT};

use serde_json::{Map, Value};

const KNOWN_KEYS: &[&str] = &[
    "host",
    "port",
    "userName",
    "userPassword",
    "publicKeyFile",
    "privateKeyFile",
    "passphrase",
    "method",
    "enabled",
];

/// SSH tunnel of a connection profile
#[derive(Debug, Clone, PartialEq)]
pub struct SshSettings {
    pub host: String,
    pub port: i32,
    pub user_name: String,
    pub user_password: String,
    pub public_key_file: String,
    pub private_key_file: String,
    pub passphrase: String,
    /// `"password"` or `"publickey"`
    pub method: String,
    pub enabled: bool,
    pub extra: Map<String, Value>,
}

impl Default for SshSettings {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_SSH_PORT,
            user_name: String::new(),
            user_password: String::new(),
            public_key_file: String::new(),
            private_key_file: String::new(),
            passphrase: String::new(),
            method: DEFAULT_SSH_AUTH_METHOD.to_string(),
            enabled: false,
            extra: Map::new(),
        }
    }
}

impl SshSettings {
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            host: variant::string(map, "host"),
            port: variant::int_or(map, "port", DEFAULT_SSH_PORT),
            user_name: variant::string(map, "userName"),
            user_password: variant::string(map, "userPassword"),
            public_key_file: variant::string(map, "publicKeyFile"),
            private_key_file: variant::string(map, "privateKeyFile"),
            passphrase: variant::string(map, "passphrase"),
            method: variant::string_or(map, "method", DEFAULT_SSH_AUTH_METHOD),
            enabled: variant::bool_or(map, "enabled", false),
            extra: variant::extra_entries(map, KNOWN_KEYS),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("host".into(), self.host.clone().into());
        map.insert("port".into(), self.port.into());
        map.insert("userName".into(), self.user_name.clone().into());
        map.insert("userPassword".into(), self.user_password.clone().into());
        map.insert("publicKeyFile".into(), self.public_key_file.clone().into());
        map.insert("privateKeyFile".into(), self.private_key_file.clone().into());
        map.insert("passphrase".into(), self.passphrase.clone().into());
        map.insert("method".into(), self.method.clone().into());
        map.insert("enabled".into(), self.enabled.into());
        map
    }
}
