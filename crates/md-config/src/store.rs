use crate::{
    ConfigError, ConfigErrorResult, ConnectionImporter, IdentityResolver, IdentitySource,
    ImportReport, LegacyMigrator, Locations, SettingsDocument, codec,
};

use std::fs;
use std::path::Path;

use log::{debug, error, info, warn};
use md_core::ConnectionSettings;
use serde_json::{Map, Value};

/// Owner of the canonical settings file and the profile list.
///
/// Construction loads the file for the running version. Every `save()`
/// rewrites the whole document.
#[derive(Debug)]
pub struct SettingsStore {
    locations: Locations,
    document: SettingsDocument,
}

impl SettingsStore {
    /// Open the store and load the canonical file. The config and cache
    /// directories are created first.
    ///
    /// A missing, unreadable or unparseable file is replaced by a fresh
    /// document, which is then loaded so that earlier releases can be
    /// migrated. A file that parses but is not a JSON object loads as an empty
    /// document instead and is never rewritten by this fallback.
    pub fn open(locations: Locations) -> Self {
        for dir in [locations.config_dir(), locations.cache_dir()] {
            if let Err(e) = fs::create_dir_all(&dir) {
                error!("Could not create {}: {e}", dir.display());
            }
        }

        let mut store = Self {
            locations,
            document: SettingsDocument::default(),
        };

        if let Err(e) = store.try_load() {
            if e.is_absence() {
                debug!("{e}");
            } else {
                warn!("{e}. Creating a new settings file");
            }
            store.save();
            store.load();
        }

        info!(
            "Settings initialized in {}",
            store.locations.config_file().display()
        );
        store
    }

    /// Reload the canonical file. Returns false, leaving every field as it
    /// was, when the file is absent or malformed.
    pub fn load(&mut self) -> bool {
        match self.try_load() {
            Ok(()) => true,
            Err(e) if e.is_absence() => {
                debug!("{e}");
                false
            }
            Err(e) => {
                warn!("{e}");
                false
            }
        }
    }

    fn try_load(&mut self) -> ConfigErrorResult<()> {
        let path = self.locations.config_file();
        let map = match codec::read_document(&path)? {
            Value::Object(map) => map,
            _ => {
                let e = ConfigError::not_an_object(path);
                error!("{e}. Loading default settings ({})", e.recovery_hint());
                Map::new()
            }
        };
        self.document.apply_map(&map);

        let mut persist_identity = false;
        if self.document.anonymous_id.is_empty() {
            let resolved = IdentityResolver::new(&self.locations).resolve(Some(&map));
            persist_identity = resolved.source != IdentitySource::CurrentDocument;
            self.document.anonymous_id = resolved.id;
        }

        let migrated = self.import_from_old_version();
        if persist_identity && !migrated {
            self.save();
        }
        Ok(())
    }

    /// Write the full document. Returns false if the file could not be written.
    pub fn save(&self) -> bool {
        let path = self.locations.config_file();
        match codec::write_document(&path, &self.document.to_map()) {
            Ok(()) => {
                info!("Settings saved to {}", path.display());
                true
            }
            Err(e) => {
                error!("Could not write settings: {e} ({})", e.recovery_hint());
                false
            }
        }
    }

    /// One-time import from the newest legacy settings file.
    ///
    /// Does nothing once the document is flagged imported. Returns true if a
    /// legacy file was found, in which case the flag is set and saved even if
    /// that file could not be read.
    pub fn import_from_old_version(&mut self) -> bool {
        if self.document.imported {
            return false;
        }

        let found = LegacyMigrator::new(&self.locations, &mut self.document).run();
        if found.is_none() {
            return false;
        }

        self.document.imported = true;
        self.save();
        true
    }

    /// Import profiles from a user-supplied file and save if any were added.
    pub fn import_connections_from_file(
        &mut self,
        path: &Path,
    ) -> ConfigErrorResult<ImportReport> {
        let report = ConnectionImporter::new(&mut self.document).import_file(path)?;
        if report.added > 0 {
            self.save();
        }
        Ok(report)
    }

    /// Returns true if at least one profile was added.
    pub fn load_connections_from_file(&mut self, path: &Path) -> bool {
        match self.import_connections_from_file(path) {
            Ok(report) => report.added > 0,
            Err(e) => {
                error!("Could not import connections: {e} ({})", e.recovery_hint());
                false
            }
        }
    }

    /// Record that a session started. Returns whether the previous one ended cleanly.
    pub fn mark_session_started(&mut self) -> bool {
        let previous = self.document.program_exited_normally;
        self.document.program_exited_normally = false;
        self.save();
        previous
    }

    pub fn mark_session_finished(&mut self) {
        self.document.program_exited_normally = true;
        self.save();
    }

    /// Append a profile. A UUID already in use is replaced by a fresh one.
    pub fn add_connection(&mut self, connection: ConnectionSettings) {
        self.document.push_connection(connection);
    }

    pub fn remove_connection(&mut self, uuid: &str) -> bool {
        let before = self.document.connections.len();
        self.document.connections.retain(|c| c.uuid() != uuid);
        self.document.connections.len() != before
    }

    /// Replace the whole profile sequence, e.g. after drag-and-drop reordering.
    pub fn reorder_connections(&mut self, connections: Vec<ConnectionSettings>) {
        self.document.connections = connections;
    }

    pub fn connection_settings_by_uuid(&self, uuid: &str) -> Option<&ConnectionSettings> {
        let found = self.document.connections.iter().find(|c| c.uuid() == uuid);
        if found.is_none() {
            warn!("No connection settings with UUID {uuid}");
        }
        found
    }

    pub fn connection_settings_by_uuid_mut(
        &mut self,
        uuid: &str,
    ) -> Option<&mut ConnectionSettings> {
        let found = self
            .document
            .connections
            .iter_mut()
            .find(|c| c.uuid() == uuid);
        if found.is_none() {
            warn!("No connection settings with UUID {uuid}");
        }
        found
    }

    pub fn imported_connections_count(&self) -> usize {
        self.document
            .connections
            .iter()
            .filter(|c| c.imported)
            .count()
    }

    pub fn connections(&self) -> &[ConnectionSettings] {
        self.document.connections()
    }

    pub fn anonymous_id(&self) -> &str {
        self.document.anonymous_id()
    }

    pub fn settings(&self) -> &SettingsDocument {
        &self.document
    }

    pub fn settings_mut(&mut self) -> &mut SettingsDocument {
        &mut self.document
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }
}
