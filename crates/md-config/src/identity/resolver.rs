use crate::codec;
use crate::identity::token_stream::value_after_marker;
use crate::identity::{
    ANONYMOUS_ID_KEY, ANONYMOUS_ID_LOOKAHEAD, ANONYMOUS_ID_MARKER, SCAN_PATTERN, archive,
};
use crate::{ConfigError, ConfigErrorResult, IdentityRule, Locations};

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use log::{debug, info, warn};
use md_core::variant;
use serde_json::{Map, Value};
use uuid::Uuid;
use walkdir::WalkDir;

/// Where a resolved identifier came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentitySource {
    CurrentDocument,
    SiblingArchive(PathBuf),
    LegacyConfig(PathBuf),
    FilesystemScan(PathBuf),
    Generated,
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurrentDocument => write!(f, "current settings file"),
            Self::SiblingArchive(path) => write!(f, "sibling archive {}", path.display()),
            Self::LegacyConfig(path) => write!(f, "legacy settings file {}", path.display()),
            Self::FilesystemScan(path) => write!(f, "scanned file {}", path.display()),
            Self::Generated => write!(f, "freshly generated"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Lowercase hyphenated UUID, never nil
    pub id: String,
    pub source: IdentitySource,
}

/// Finds the installation identifier, reusing one left by this or a sibling
/// product before generating a new one.
pub struct IdentityResolver<'a> {
    locations: &'a Locations,
}

impl<'a> IdentityResolver<'a> {
    pub fn new(locations: &'a Locations) -> Self {
        Self { locations }
    }

    /// Resolve the identifier. The first valid candidate wins:
    ///
    /// 1. `current`, the freshly parsed canonical document
    /// 2. sibling product archives
    /// 3. legacy settings files, newest first
    /// 4. any `robo*.json` under the settings roots
    /// 5. a new random UUID
    pub fn resolve(&self, current: Option<&Map<String, Value>>) -> ResolvedIdentity {
        let found = current
            .and_then(id_in_document)
            .map(|id| (id, IdentitySource::CurrentDocument))
            .or_else(|| self.from_sibling_archives())
            .or_else(|| self.from_legacy_configs())
            .or_else(|| self.from_filesystem_scan());

        let (id, source) = found.unwrap_or_else(|| {
            (
                Uuid::new_v4().hyphenated().to_string(),
                IdentitySource::Generated,
            )
        });

        info!("Anonymous id {id} from {source}");
        ResolvedIdentity { id, source }
    }

    fn from_sibling_archives(&self) -> Option<(String, IdentitySource)> {
        self.locations
            .sibling_archives()
            .into_iter()
            .find_map(|(path, entry)| {
                id_in_archive(&path, entry).map(|id| (id, IdentitySource::SiblingArchive(path)))
            })
    }

    fn from_legacy_configs(&self) -> Option<(String, IdentitySource)> {
        for (location, path) in self.locations.legacy_files() {
            match location.identity_rule {
                IdentityRule::Skip => continue,
                IdentityRule::Stop => break,
                IdentityRule::Read => {
                    if let Some(id) = id_in_file(&path) {
                        return Some((id, IdentitySource::LegacyConfig(path)));
                    }
                }
            }
        }
        None
    }

    fn from_filesystem_scan(&self) -> Option<(String, IdentitySource)> {
        let matcher = match Glob::new(SCAN_PATTERN) {
            Ok(glob) => glob.compile_matcher(),
            Err(e) => {
                warn!("Invalid scan pattern {SCAN_PATTERN}: {e}");
                return None;
            }
        };

        self.locations
            .identity_scan_roots()
            .iter()
            .find_map(|root| scan_root(root, &matcher))
    }
}

/// Strip braces, parse and re-render as lowercase hyphenated. Nil is rejected.
pub fn normalize_identity(candidate: &str) -> Option<String> {
    let stripped: String = candidate
        .chars()
        .filter(|c| *c != '{' && *c != '}')
        .collect();

    match Uuid::parse_str(stripped.trim()) {
        Ok(id) if !id.is_nil() => Some(id.hyphenated().to_string()),
        _ => None,
    }
}

fn id_in_document(map: &Map<String, Value>) -> Option<String> {
    map.get(ANONYMOUS_ID_KEY)
        .map(variant::to_string)
        .and_then(|candidate| normalize_identity(&candidate))
}

fn id_in_file(path: &Path) -> Option<String> {
    match codec::read_object(path) {
        Ok(map) => id_in_document(&map),
        Err(e) if e.is_absence() => None,
        Err(e) => {
            debug!("Skipping {}: {e}", path.display());
            None
        }
    }
}

fn id_in_archive(path: &Path, entry: &str) -> Option<String> {
    match archived_value(path, entry) {
        Ok(value) => value.and_then(|candidate| normalize_identity(&candidate)),
        Err(e) if e.is_absence() => None,
        Err(e) => {
            debug!("Skipping {entry} in {}: {e}", path.display());
            None
        }
    }
}

fn archived_value(path: &Path, entry: &str) -> ConfigErrorResult<Option<String>> {
    let contents = archive::read_entry(path, entry)?;
    value_after_marker(&contents, ANONYMOUS_ID_MARKER, ANONYMOUS_ID_LOOKAHEAD)
        .map_err(|e| ConfigError::xml(path.to_path_buf(), e))
}

fn scan_root(root: &Path, matcher: &GlobMatcher) -> Option<(String, IdentitySource)> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| matcher.is_match(entry.file_name()))
        .find_map(|entry| {
            id_in_file(entry.path())
                .map(|id| (id, IdentitySource::FilesystemScan(entry.into_path())))
        })
}
