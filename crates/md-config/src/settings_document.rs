use crate::{
    DEFAULT_BATCH_SIZE, DEFAULT_MONGO_TIMEOUT_SEC, DEFAULT_SHELL_TIMEOUT_SEC, DEFAULT_STYLE,
    DEFAULT_TEXT_FONT_POINT_SIZE, SCHEMA_VERSION, Toolbars,
};

use std::collections::BTreeSet;

use md_core::variant;
use md_core::{AutocompletionMode, ConnectionSettings, TimeZoneMode, UuidEncoding, ViewMode};
use serde_json::{Map, Value};

/// In-memory form of the canonical settings file.
///
/// Plain preferences are public fields. Values that carry a normalization rule
/// or are owned by the store's lifecycle go through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    schema_version: String,
    pub uuid_encoding: UuidEncoding,
    pub time_zone: TimeZoneMode,
    pub view_mode: ViewMode,
    pub autocompletion_mode: AutocompletionMode,
    pub load_mongo_rc_js: bool,
    pub disable_connection_shortcuts: bool,
    accepted_eula_versions: BTreeSet<String>,
    db_versions_connected: BTreeSet<String>,
    pub batch_size: i32,
    pub check_for_updates: bool,
    pub mongo_timeout_sec: i32,
    pub(crate) shell_timeout_sec: i32,
    current_style: String,
    pub text_font_family: String,
    text_font_point_size: i32,
    pub(crate) connections: Vec<ConnectionSettings>,
    pub auto_expand: bool,
    pub auto_exec: bool,
    pub minimize_to_tray: bool,
    pub line_numbers: bool,
    toolbars: Toolbars,
    pub(crate) imported: bool,
    pub(crate) anonymous_id: String,
    cache_data: Map<String, Value>,
    pub(crate) program_exited_normally: bool,
    disable_https_features: bool,
    pub(crate) debug_mode: bool,
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            uuid_encoding: UuidEncoding::default(),
            time_zone: TimeZoneMode::default(),
            view_mode: ViewMode::default(),
            autocompletion_mode: AutocompletionMode::default(),
            load_mongo_rc_js: false,
            disable_connection_shortcuts: false,
            accepted_eula_versions: BTreeSet::new(),
            db_versions_connected: BTreeSet::new(),
            batch_size: DEFAULT_BATCH_SIZE,
            check_for_updates: true,
            mongo_timeout_sec: DEFAULT_MONGO_TIMEOUT_SEC,
            shell_timeout_sec: DEFAULT_SHELL_TIMEOUT_SEC,
            current_style: DEFAULT_STYLE.to_string(),
            text_font_family: String::new(),
            text_font_point_size: DEFAULT_TEXT_FONT_POINT_SIZE,
            connections: Vec::new(),
            auto_expand: true,
            auto_exec: true,
            minimize_to_tray: false,
            line_numbers: false,
            toolbars: Toolbars::default(),
            imported: false,
            anonymous_id: String::new(),
            cache_data: Map::new(),
            program_exited_normally: true,
            disable_https_features: false,
            debug_mode: false,
        }
    }
}

impl SettingsDocument {
    /// Overlay a parsed settings file onto this document.
    ///
    /// Keys marked "replaced only if present" keep their current value when
    /// absent. Everything else is reset to its load default. The anonymous id
    /// is not touched here.
    pub fn apply_map(&mut self, map: &Map<String, Value>) {
        self.schema_version = variant::string(map, "version");

        self.uuid_encoding = UuidEncoding::from_raw(raw_int(map, "uuidEncoding", 0));
        self.time_zone = TimeZoneMode::from_raw(raw_int(map, "timeZone", 0));
        self.view_mode = match map.get("viewMode") {
            Some(value) => ViewMode::from_raw(i64::from(variant::to_int(value))),
            None => ViewMode::Custom,
        };
        self.autocompletion_mode =
            AutocompletionMode::from_raw(raw_int(map, "autocompletionMode", 2));

        self.auto_expand = variant::bool_or(map, "autoExpand", true);
        self.auto_exec = variant::bool_or(map, "autoExec", true);
        self.minimize_to_tray = variant::bool_or(map, "minimizeToTray", false);
        self.line_numbers = variant::bool_or(map, "lineNumbers", false);
        self.imported = variant::bool_or(map, "imported", false);
        self.program_exited_normally = variant::bool_or(map, "programExitedNormally", true);
        self.disable_https_features = variant::bool_or(map, "disableHttpsFeatures", false);
        self.debug_mode = variant::bool_or(map, "debugMode", false);
        self.load_mongo_rc_js = variant::bool_or(map, "loadMongoRcJs", false);
        self.disable_connection_shortcuts =
            variant::bool_or(map, "disableConnectionShortcuts", false);

        if let Some(value) = map.get("acceptedEulaVersions") {
            self.accepted_eula_versions = variant::to_string_list(value).into_iter().collect();
        }
        if let Some(value) = map.get("dbVersionsConnected") {
            self.db_versions_connected = variant::to_string_list(value).into_iter().collect();
        }

        self.batch_size = match variant::int_or(map, "batchSize", 0) {
            0 => DEFAULT_BATCH_SIZE,
            size => size,
        };

        if let Some(value) = map.get("checkForUpdates") {
            self.check_for_updates = variant::to_bool(value);
        }

        self.set_current_style(variant::string(map, "style"));
        self.text_font_family = variant::string(map, "textFontFamily");
        self.set_text_font_point_size(variant::int_or(map, "textFontPointSize", 0));

        if let Some(value) = map.get("mongoTimeoutSec") {
            self.mongo_timeout_sec = variant::to_int(value);
        }
        if let Some(value) = map.get("shellTimeoutSec") {
            self.shell_timeout_sec = variant::to_int(value);
        }

        self.connections = match map.get("connections") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(ConnectionSettings::from_map)
                .collect(),
            _ => Vec::new(),
        };

        self.toolbars = match map.get("toolbars") {
            Some(Value::Object(toolbars)) => Toolbars::from_map(toolbars),
            _ => Toolbars::default(),
        };

        self.cache_data = match map.get("cacheData") {
            Some(Value::Object(cache)) => cache.clone(),
            _ => Map::new(),
        };
    }

    /// Full document as written to disk. `version` is always the current schema.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert("version".into(), SCHEMA_VERSION.into());
        map.insert("uuidEncoding".into(), self.uuid_encoding.as_raw().into());
        map.insert("timeZone".into(), self.time_zone.as_raw().into());
        map.insert("viewMode".into(), self.view_mode.as_raw().into());
        map.insert("autoExpand".into(), self.auto_expand.into());
        map.insert("lineNumbers".into(), self.line_numbers.into());
        map.insert(
            "autocompletionMode".into(),
            self.autocompletion_mode.as_raw().into(),
        );
        map.insert("loadMongoRcJs".into(), self.load_mongo_rc_js.into());
        map.insert(
            "disableConnectionShortcuts".into(),
            self.disable_connection_shortcuts.into(),
        );
        map.insert(
            "acceptedEulaVersions".into(),
            string_array(&self.accepted_eula_versions),
        );
        map.insert(
            "dbVersionsConnected".into(),
            string_array(&self.db_versions_connected),
        );
        map.insert("batchSize".into(), self.batch_size.into());
        map.insert("checkForUpdates".into(), self.check_for_updates.into());
        map.insert("mongoTimeoutSec".into(), self.mongo_timeout_sec.into());
        map.insert("shellTimeoutSec".into(), self.shell_timeout_sec.into());
        map.insert("style".into(), self.current_style.clone().into());
        map.insert("textFontFamily".into(), self.text_font_family.clone().into());
        map.insert("textFontPointSize".into(), self.text_font_point_size.into());
        map.insert(
            "connections".into(),
            Value::Array(
                self.connections
                    .iter()
                    .map(|c| Value::Object(c.to_map()))
                    .collect(),
            ),
        );
        map.insert("autoExec".into(), self.auto_exec.into());
        map.insert("minimizeToTray".into(), self.minimize_to_tray.into());
        map.insert("toolbars".into(), Value::Object(self.toolbars.to_map()));
        map.insert("imported".into(), self.imported.into());
        map.insert("anonymousID".into(), self.anonymous_id.clone().into());
        map.insert("cacheData".into(), Value::Object(self.cache_data.clone()));
        map.insert(
            "programExitedNormally".into(),
            self.program_exited_normally.into(),
        );
        map.insert(
            "disableHttpsFeatures".into(),
            self.disable_https_features.into(),
        );
        map.insert("debugMode".into(), self.debug_mode.into());

        map
    }

    /// Version string found in the last loaded file. Advisory only.
    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    pub fn accepted_eula_versions(&self) -> &BTreeSet<String> {
        &self.accepted_eula_versions
    }

    pub fn add_accepted_eula_version(&mut self, version: impl Into<String>) {
        self.accepted_eula_versions.insert(version.into());
    }

    pub fn db_versions_connected(&self) -> &BTreeSet<String> {
        &self.db_versions_connected
    }

    /// Returns true if the version was not recorded yet.
    pub fn add_db_version_connected(&mut self, version: impl Into<String>) -> bool {
        self.db_versions_connected.insert(version.into())
    }

    pub fn shell_timeout_sec(&self) -> i32 {
        self.shell_timeout_sec
    }

    /// Stored as an absolute value.
    pub fn set_shell_timeout_sec(&mut self, seconds: i32) {
        self.shell_timeout_sec = seconds.saturating_abs();
    }

    pub fn current_style(&self) -> &str {
        &self.current_style
    }

    /// An empty name selects the default style.
    pub fn set_current_style(&mut self, style: impl Into<String>) {
        let style = style.into();
        self.current_style = if style.is_empty() {
            DEFAULT_STYLE.to_string()
        } else {
            style
        };
    }

    pub fn text_font_point_size(&self) -> i32 {
        self.text_font_point_size
    }

    /// Non-positive sizes mean "use the platform default" and are stored as -1.
    pub fn set_text_font_point_size(&mut self, size: i32) {
        self.text_font_point_size = if size > 0 {
            size
        } else {
            DEFAULT_TEXT_FONT_POINT_SIZE
        };
    }

    pub fn toolbars(&self) -> &Toolbars {
        &self.toolbars
    }

    pub fn set_toolbar_visible(&mut self, name: impl Into<String>, visible: bool) {
        self.toolbars.set_visible(name, visible);
    }

    pub fn cache_data(&self, key: &str) -> Option<&Value> {
        self.cache_data.get(key)
    }

    pub fn add_cache_data(&mut self, key: impl Into<String>, value: Value) {
        self.cache_data.insert(key.into(), value);
    }

    pub fn connections(&self) -> &[ConnectionSettings] {
        &self.connections
    }

    /// Append a profile, giving it a fresh UUID if its own is already taken.
    pub(crate) fn push_connection(&mut self, mut connection: ConnectionSettings) {
        while self
            .connections
            .iter()
            .any(|existing| existing.uuid() == connection.uuid())
        {
            connection.regenerate_uuid();
        }
        self.connections.push(connection);
    }

    pub fn imported(&self) -> bool {
        self.imported
    }

    pub fn anonymous_id(&self) -> &str {
        &self.anonymous_id
    }

    pub fn program_exited_normally(&self) -> bool {
        self.program_exited_normally
    }

    pub fn disable_https_features(&self) -> bool {
        self.disable_https_features
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }
}

fn raw_int(map: &Map<String, Value>, key: &str, default: i32) -> i64 {
    i64::from(variant::int_or(map, key, default))
}

fn string_array(set: &BTreeSet<String>) -> Value {
    Value::Array(set.iter().cloned().map(Value::from).collect())
}
