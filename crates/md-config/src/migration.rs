use crate::{
    ConfigErrorResult, FormatEra, LegacyLocation, Locations, MAX_LEGACY_HOST_LEN,
    SettingsDocument, codec,
};

use std::path::Path;

use log::{info, warn};
use md_core::variant;
use md_core::{
    ConnectionSettings, CredentialSettings, DEFAULT_SERVER_PORT, DEFAULT_SSH_AUTH_METHOD,
    DEFAULT_SSH_PORT, PUBLIC_KEY_SSH_AUTH_METHOD, SshSettings,
};
use serde_json::{Map, Value};

/// Mechanism assumed for every credential written by pre-release versions.
const PRE_RELEASE_AUTH_MECHANISM: &str = "MONGODB-CR";

/// Imports settings from the newest settings file an earlier release left behind.
pub struct LegacyMigrator<'a> {
    locations: &'a Locations,
    document: &'a mut SettingsDocument,
}

impl<'a> LegacyMigrator<'a> {
    pub fn new(locations: &'a Locations, document: &'a mut SettingsDocument) -> Self {
        Self {
            locations,
            document,
        }
    }

    /// Import from the first legacy file that exists and return its table entry.
    ///
    /// Only that one file is tried. A read or parse failure is logged and the
    /// entry is still returned, so older files are never consulted afterwards.
    pub fn run(&mut self) -> Option<&'static LegacyLocation> {
        let (location, path) = self
            .locations
            .legacy_files()
            .find(|(_, path)| path.exists())?;

        info!(
            "Importing settings of version {} from {}",
            location.label,
            path.display()
        );

        let result = match location.era {
            FormatEra::PreRelease => self.import_pre_release(&path),
            FormatEra::Modern => self.import_modern(&path),
        };

        match result {
            Ok(added) => info!("Imported {added} connections from version {}", location.label),
            Err(e) => warn!(
                "Could not import settings of version {}: {e} ({})",
                location.label,
                e.recovery_hint()
            ),
        }

        Some(location)
    }

    /// Same document shape as today: copy a few preferences verbatim and every profile.
    pub fn import_modern(&mut self, path: &Path) -> ConfigErrorResult<usize> {
        let map = codec::read_object(path)?;

        if let Some(value) = map.get("autoExpand") {
            self.document.auto_expand = variant::to_bool(value);
        }
        if let Some(value) = map.get("lineNumbers") {
            self.document.line_numbers = variant::to_bool(value);
        }
        if let Some(value) = map.get("debugMode") {
            self.document.debug_mode = variant::to_bool(value);
        }
        if let Some(value) = map.get("shellTimeoutSec") {
            self.document.shell_timeout_sec = variant::to_int(value);
        }

        let mut added = 0;
        for entry in object_list(&map, "connections") {
            let mut profile = ConnectionSettings::from_map(entry);
            profile.imported = true;
            self.document.push_connection(profile);
            added += 1;
        }
        Ok(added)
    }

    /// Flat 0.8.x profiles. Profiles matching an existing one are skipped.
    pub fn import_pre_release(&mut self, path: &Path) -> ConfigErrorResult<usize> {
        let map = codec::read_object(path)?;

        let mut added = 0;
        for entry in object_list(&map, "connections") {
            let profile = pre_release_profile(entry);

            if self
                .document
                .connections()
                .iter()
                .any(|existing| is_same_pre_release_connection(&profile, existing))
            {
                continue;
            }

            self.document.push_connection(profile);
            added += 1;
        }
        Ok(added)
    }
}

fn object_list<'m>(map: &'m Map<String, Value>, key: &str) -> Vec<&'m Map<String, Value>> {
    match map.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

fn pre_release_profile(entry: &Map<String, Value>) -> ConnectionSettings {
    let host: String = variant::string(entry, "serverHost")
        .chars()
        .take(MAX_LEGACY_HOST_LEN)
        .collect();

    let mut profile = ConnectionSettings::new(
        variant::string(entry, "connectionName"),
        host,
        variant::int_or(entry, "serverPort", DEFAULT_SERVER_PORT),
    );
    profile.imported = true;
    profile.default_database = variant::string(entry, "defaultDatabase");

    if let Some(method) = entry.get("sshAuthMethod") {
        let method = variant::to_int(method);
        profile.ssh = SshSettings {
            host: variant::string(entry, "sshHost"),
            port: variant::int_or(entry, "sshPort", DEFAULT_SSH_PORT),
            user_name: variant::string(entry, "sshUserName"),
            user_password: variant::string(entry, "sshUserPassword"),
            public_key_file: variant::string(entry, "sshPublicKey"),
            private_key_file: variant::string(entry, "sshPrivateKey"),
            passphrase: variant::string(entry, "sshPassphrase"),
            method: if method == 2 {
                PUBLIC_KEY_SSH_AUTH_METHOD
            } else {
                DEFAULT_SSH_AUTH_METHOD
            }
            .to_string(),
            enabled: method == 1 || method == 2,
            ..SshSettings::default()
        };
    }

    // 0.8.x keyed TLS off the presence of `sshEnabled`
    if entry.contains_key("sshEnabled") {
        profile.ssl.enabled = variant::bool_or(entry, "enabled", false);
        profile.ssl.pem_key_file = variant::string(entry, "sslPemKeyFile");
    }

    for credential in object_list(entry, "credentials") {
        profile.add_credential(CredentialSettings {
            user_name: variant::string(credential, "userName"),
            user_password: variant::string(credential, "userPassword"),
            database_name: variant::string(credential, "databaseName"),
            mechanism: PRE_RELEASE_AUTH_MECHANISM.to_string(),
            use_manually_visible_dbs: variant::bool_or(credential, "useManuallyVisibleDbs", false),
            manually_visible_dbs: variant::string(credential, "manuallyVisibleDbs"),
            enabled: variant::bool_or(credential, "enabled", false),
            ..CredentialSettings::default()
        });
    }

    profile
}

fn is_same_pre_release_connection(
    candidate: &ConnectionSettings,
    existing: &ConnectionSettings,
) -> bool {
    if !candidate.same_endpoint(existing) {
        return false;
    }

    let absent = CredentialSettings::default();
    let cred = candidate.primary_credential().unwrap_or(&absent);
    let ecred = existing.primary_credential().unwrap_or(&absent);
    if cred.database_name != ecred.database_name
        || cred.user_name != ecred.user_name
        || cred.user_password != ecred.user_password
        || cred.enabled != ecred.enabled
    {
        return false;
    }

    let ssh = &candidate.ssh;
    let essh = &existing.ssh;
    ssh.enabled == essh.enabled
        && ssh.port == essh.port
        && ssh.host == essh.host
        && ssh.private_key_file == essh.private_key_file
        && ssh.user_password == essh.user_password
        && ssh.user_name == essh.user_name
}
