use crate::legacy_location::{IDENTITY_SCAN_ROOTS, LEGACY_LOCATIONS, SIBLING_ARCHIVES};
use crate::{
    APP_VERSION, CACHE_DIR_NAME, CONFIG_FILE_NAME, CONFIG_ROOT, ConfigError, ConfigErrorResult,
    HOME_ENV_VAR, LegacyLocation,
};

use std::path::{Path, PathBuf};

use log::debug;

/// Every filesystem path the settings subsystem touches, rooted at one home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations {
    home: PathBuf,
    app_version: String,
}

impl Locations {
    pub fn new(home: impl Into<PathBuf>, app_version: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            app_version: app_version.into(),
        }
    }

    /// Locations for the running version.
    /// Priority: MONGODESK_HOME env var > the user's home directory
    pub fn discover() -> ConfigErrorResult<Self> {
        if let Ok(dir) = std::env::var(HOME_ENV_VAR) {
            if !dir.is_empty() {
                debug!("Using {HOME_ENV_VAR}={dir}");
                return Ok(Self::new(dir, APP_VERSION));
            }
        }

        dirs::home_dir()
            .map(|home| Self::new(home, APP_VERSION))
            .ok_or(ConfigError::NoHomeDir)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// `<home>/.3T/robo-3t/<version>/`
    pub fn config_dir(&self) -> PathBuf {
        self.under_home(CONFIG_ROOT).join(&self.app_version)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir().join(CONFIG_FILE_NAME)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.config_dir().join(CACHE_DIR_NAME)
    }

    pub fn legacy_file(&self, location: &LegacyLocation) -> PathBuf {
        self.under_home(location.relative_path)
    }

    /// Legacy files paired with their table entries, newest first.
    pub fn legacy_files(&self) -> impl Iterator<Item = (&'static LegacyLocation, PathBuf)> + '_ {
        LEGACY_LOCATIONS
            .iter()
            .map(move |location| (location, self.legacy_file(location)))
    }

    pub fn sibling_archives(&self) -> Vec<(PathBuf, &'static str)> {
        SIBLING_ARCHIVES
            .iter()
            .map(|archive| (self.under_home(archive.relative_path), archive.entry_name))
            .collect()
    }

    pub fn identity_scan_roots(&self) -> Vec<PathBuf> {
        IDENTITY_SCAN_ROOTS
            .iter()
            .map(|root| self.under_home(root))
            .collect()
    }

    fn under_home(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.home.clone(), |path, part| path.join(part))
    }
}
