use crate::{ConfigErrorResult, EXTERNAL_PREFIX, SettingsDocument, codec};

use std::path::Path;

use log::{debug, info, warn};
use md_core::ConnectionSettings;
use serde::Serialize;
use serde_json::Value;

/// Outcome of importing one external file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Entries found by the extraction policy
    pub candidates: usize,
    pub added: usize,
    /// Non-object or empty entries
    pub skipped_empty: usize,
    pub skipped_duplicate: usize,
}

/// Adds profiles from a user-supplied JSON file to a settings document.
///
/// Profiles are flagged imported, get the `[External] ` name prefix and are
/// skipped when an equivalent profile is already present.
pub struct ConnectionImporter<'a> {
    document: &'a mut SettingsDocument,
}

impl<'a> ConnectionImporter<'a> {
    pub fn new(document: &'a mut SettingsDocument) -> Self {
        Self { document }
    }

    /// Read `path` and import every profile it holds. Does not save.
    pub fn import_file(&mut self, path: &Path) -> ConfigErrorResult<ImportReport> {
        let value = codec::read_document(path)?;
        let report = self.import_value(&value);

        if report.candidates == 0 {
            warn!("No connections found in {}", path.display());
        }
        info!(
            "Imported {} of {} connections from {}",
            report.added,
            report.candidates,
            path.display()
        );
        Ok(report)
    }

    pub fn import_value(&mut self, value: &Value) -> ImportReport {
        let candidates = extract_candidates(value);
        let mut report = ImportReport {
            candidates: candidates.len(),
            ..ImportReport::default()
        };

        for candidate in candidates {
            let map = match candidate.as_object() {
                Some(map) if !map.is_empty() => map,
                _ => {
                    report.skipped_empty += 1;
                    continue;
                }
            };

            let mut profile = ConnectionSettings::from_map(map);
            profile.imported = true;
            if !profile.connection_name.starts_with(EXTERNAL_PREFIX) {
                profile.connection_name = format!("{EXTERNAL_PREFIX}{}", profile.connection_name);
            }

            if self
                .document
                .connections()
                .iter()
                .any(|existing| is_duplicate(&profile, existing))
            {
                debug!("Skipped duplicate connection: {}", profile.connection_name);
                report.skipped_duplicate += 1;
                continue;
            }

            self.document.push_connection(profile);
            report.added += 1;
        }

        report
    }
}

/// Entries of an external file that may be profiles, first matching shape wins:
/// a `connections` array, a `connectionsList` array, a bare array, a single
/// profile object, or every object-valued member of the top-level object.
///
/// An object carrying `serverHost` is taken as one profile before its members
/// are considered, so a profile whose `ssh` or `ssl` block is an object is not
/// split into those blocks. Scalar members are dropped here rather than counted
/// as skipped candidates.
pub fn extract_candidates(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            if let Some(list) = map.get("connections") {
                return as_list(list);
            }
            if let Some(list) = map.get("connectionsList") {
                return as_list(list);
            }
            if map.contains_key("serverHost") {
                return vec![value];
            }

            let members: Vec<&Value> = map.values().filter(|v| v.is_object()).collect();
            if members.is_empty() {
                vec![value]
            } else {
                members
            }
        }
        _ => Vec::new(),
    }
}

fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        _ => Vec::new(),
    }
}

/// Same endpoint and either no credential on both sides or primary
/// credentials with the same database and user.
fn is_duplicate(candidate: &ConnectionSettings, existing: &ConnectionSettings) -> bool {
    if !candidate.same_endpoint(existing) {
        return false;
    }

    match (candidate.primary_credential(), existing.primary_credential()) {
        (None, None) => true,
        (Some(new), Some(old)) => {
            new.database_name == old.database_name && new.user_name == old.user_name
        }
        _ => false,
    }
}
