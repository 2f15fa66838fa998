use crate::CliErrorResult;

use md_config::{APP_VERSION, SettingsStore};
use md_core::{AutocompletionMode, TimeZoneMode, UuidEncoding, ViewMode};

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Subcommand;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Preferences, paths and profile counts
    #[default]
    Summary,

    /// Every stored connection profile, in order
    Connections,

    /// The installation's anonymous identity
    AnonymousId,
}

/// Overview printed by `mongodesk summary`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub app_version: &'static str,
    pub config_file: PathBuf,
    pub schema_version: String,
    pub anonymous_id: String,
    pub previous_session_clean: bool,
    pub connections: usize,
    pub imported_connections: usize,
    pub uuid_encoding: UuidEncoding,
    pub time_zone: TimeZoneMode,
    pub view_mode: ViewMode,
    pub autocompletion_mode: AutocompletionMode,
    pub batch_size: i32,
    pub mongo_timeout_sec: i32,
    pub shell_timeout_sec: i32,
    pub style: String,
    pub check_for_updates: bool,
    pub toolbars: BTreeMap<String, bool>,
}

impl Summary {
    pub fn from_store(store: &SettingsStore, previous_session_clean: bool) -> Self {
        let settings = store.settings();
        Self {
            app_version: APP_VERSION,
            config_file: store.locations().config_file(),
            schema_version: settings.schema_version().to_string(),
            anonymous_id: store.anonymous_id().to_string(),
            previous_session_clean,
            connections: store.connections().len(),
            imported_connections: store.imported_connections_count(),
            uuid_encoding: settings.uuid_encoding,
            time_zone: settings.time_zone,
            view_mode: settings.view_mode,
            autocompletion_mode: settings.autocompletion_mode,
            batch_size: settings.batch_size,
            mongo_timeout_sec: settings.mongo_timeout_sec,
            shell_timeout_sec: settings.shell_timeout_sec(),
            style: settings.current_style().to_string(),
            check_for_updates: settings.check_for_updates,
            toolbars: settings
                .toolbars()
                .iter()
                .map(|(name, shown)| (name.to_string(), shown))
                .collect(),
        }
    }
}

/// JSON output for one command.
pub fn render(
    command: Commands,
    store: &SettingsStore,
    previous_session_clean: bool,
    pretty: bool,
) -> CliErrorResult<String> {
    let value = match command {
        Commands::Summary => {
            serde_json::to_value(Summary::from_store(store, previous_session_clean))?
        }
        Commands::Connections => serde_json::to_value(store.connections())?,
        Commands::AnonymousId => serde_json::json!({ "anonymousID": store.anonymous_id() }),
    };

    let output = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(output)
}
