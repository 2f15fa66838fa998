pub mod codec;
pub mod identity;

mod error;
mod importer;
mod legacy_location;
mod locations;
mod migration;
mod settings_document;
mod store;
mod toolbars;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigErrorResult};
pub use identity::{IdentityResolver, IdentitySource, ResolvedIdentity};
pub use importer::{ConnectionImporter, ImportReport};
pub use legacy_location::{
    FormatEra, IDENTITY_SCAN_ROOTS, IdentityRule, LEGACY_LOCATIONS, LegacyLocation,
    SIBLING_ARCHIVES, SiblingArchive,
};
pub use locations::Locations;
pub use migration::LegacyMigrator;
pub use settings_document::SettingsDocument;
pub use store::SettingsStore;
pub use toolbars::{Toolbars, WELL_KNOWN_TOOLBARS};

/// Version of the running application; selects the canonical config directory.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Written into every saved document.
pub const SCHEMA_VERSION: &str = "2.0";
/// Overrides the home directory all paths are rooted at.
pub const HOME_ENV_VAR: &str = "MONGODESK_HOME";
/// Prepended to the names of profiles imported from external files.
pub const EXTERNAL_PREFIX: &str = "[External] ";

const CONFIG_ROOT: &str = ".3T/robo-3t";
const CONFIG_FILE_NAME: &str = "robo3t.json";
const CACHE_DIR_NAME: &str = "cache";

const DEFAULT_BATCH_SIZE: i32 = 50;
const DEFAULT_MONGO_TIMEOUT_SEC: i32 = 10;
const DEFAULT_SHELL_TIMEOUT_SEC: i32 = 15;
const DEFAULT_STYLE: &str = "Native";
const DEFAULT_TEXT_FONT_POINT_SIZE: i32 = -1;
const MAX_LEGACY_HOST_LEN: usize = 300;
