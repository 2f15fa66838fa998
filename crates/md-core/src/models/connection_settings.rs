use crate::variant;
use crate::{CredentialSettings, DEFAULT_SERVER_PORT, SshSettings, SslSettings};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use uuid::Uuid;

const KNOWN_KEYS: &[&str] = &[
    "uuid",
    "connectionName",
    "serverHost",
    "serverPort",
    "defaultDatabase",
    "imported",
    "credentials",
    "ssh",
    "ssl",
];

/// A saved server-connection profile.
///
/// The UUID is the only exact-lookup key. It is generated once when the
/// profile is created or decoded without one, and only changes through
/// [`ConnectionSettings::regenerate_uuid`]. Keys this type does not model are
/// kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionSettings {
    uuid: String,
    pub connection_name: String,
    pub server_host: String,
    pub server_port: i32,
    pub default_database: String,
    /// Set on profiles that came from an external file or an older version
    pub imported: bool,
    /// The first entry is the primary credential
    pub credentials: Vec<CredentialSettings>,
    pub ssh: SshSettings,
    pub ssl: SslSettings,
    pub extra: Map<String, Value>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            uuid: new_uuid(),
            connection_name: String::new(),
            server_host: String::new(),
            server_port: DEFAULT_SERVER_PORT,
            default_database: String::new(),
            imported: false,
            credentials: Vec::new(),
            ssh: SshSettings::default(),
            ssl: SslSettings::default(),
            extra: Map::new(),
        }
    }
}

impl ConnectionSettings {
    pub fn new(
        connection_name: impl Into<String>,
        server_host: impl Into<String>,
        server_port: i32,
    ) -> Self {
        Self {
            connection_name: connection_name.into(),
            server_host: server_host.into(),
            server_port,
            ..Self::default()
        }
    }

    /// Decode a profile. Never fails: malformed pieces fall back to defaults.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let uuid = variant::string(map, "uuid");
        let uuid = if uuid.trim().is_empty() { new_uuid() } else { uuid };

        let credentials = match map.get("credentials") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(CredentialSettings::from_map)
                .collect(),
            _ => Vec::new(),
        };

        let ssh = map
            .get("ssh")
            .and_then(Value::as_object)
            .map(SshSettings::from_map)
            .unwrap_or_default();

        let ssl = map
            .get("ssl")
            .and_then(Value::as_object)
            .map(SslSettings::from_map)
            .unwrap_or_default();

        Self {
            uuid,
            connection_name: variant::string(map, "connectionName"),
            server_host: variant::string(map, "serverHost"),
            server_port: variant::int_or(map, "serverPort", DEFAULT_SERVER_PORT),
            default_database: variant::string(map, "defaultDatabase"),
            imported: variant::bool_or(map, "imported", false),
            credentials,
            ssh,
            ssl,
            extra: variant::extra_entries(map, KNOWN_KEYS),
        }
    }

    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.extra.clone();
        map.insert("uuid".into(), self.uuid.clone().into());
        map.insert("connectionName".into(), self.connection_name.clone().into());
        map.insert("serverHost".into(), self.server_host.clone().into());
        map.insert("serverPort".into(), self.server_port.into());
        map.insert("defaultDatabase".into(), self.default_database.clone().into());
        map.insert("imported".into(), self.imported.into());
        map.insert(
            "credentials".into(),
            Value::Array(
                self.credentials
                    .iter()
                    .map(|c| Value::Object(c.to_map()))
                    .collect(),
            ),
        );
        map.insert("ssh".into(), Value::Object(self.ssh.to_map()));
        map.insert("ssl".into(), Value::Object(self.ssl.to_map()));
        map
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Assign a fresh identity. Used when a profile would collide with an existing one.
    pub fn regenerate_uuid(&mut self) {
        self.uuid = new_uuid();
    }

    pub fn primary_credential(&self) -> Option<&CredentialSettings> {
        self.credentials.first()
    }

    pub fn add_credential(&mut self, credential: CredentialSettings) {
        self.credentials.push(credential);
    }

    /// `host:port`
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Host, port and default database all match.
    pub fn same_endpoint(&self, other: &ConnectionSettings) -> bool {
        self.server_host == other.server_host
            && self.server_port == other.server_port
            && self.default_database == other.default_database
    }
}

impl Serialize for ConnectionSettings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ConnectionSettings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

fn new_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}
