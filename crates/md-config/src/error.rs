use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("File not found: {path} {location}")]
    NotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("IO error accessing {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("JSON parse error in {path}: {source} {location}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Top level of {path} is not a JSON object {location}")]
    NotAnObject {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Archive error in {path}: {source} {location}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
        location: ErrorLocation,
    },

    #[error("XML error in {path}: {source} {location}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
        location: ErrorLocation,
    },

    #[error("Home directory not found")]
    NoHomeDir,
}

impl ConfigError {
    /// Whether the error only means the file does not exist.
    pub fn is_absence(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// User-friendly recovery hint.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "The file does not exist. It will be created on next save.",
            Self::Io { .. } => {
                "Unable to access the settings file. \
                   Check file permissions and disk space."
            }
            Self::Json { .. } | Self::NotAnObject { .. } => {
                "The settings file is not valid. \
                   Fix or remove it to start from defaults."
            }
            Self::Archive { .. } | Self::Xml { .. } => {
                "A property archive from another product could not be read. \
                   It is ignored."
            }
            Self::NoHomeDir => "Set MONGODESK_HOME to choose where settings are stored.",
        }
    }

    /// Creates NotFound error at caller location.
    #[track_caller]
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound {
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Io error at caller location.
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Json error at caller location.
    #[track_caller]
    pub fn json(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Json {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NotAnObject error at caller location.
    #[track_caller]
    pub fn not_an_object(path: PathBuf) -> Self {
        Self::NotAnObject {
            path,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Archive error at caller location.
    #[track_caller]
    pub fn archive(path: PathBuf, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Xml error at caller location.
    #[track_caller]
    pub fn xml(path: PathBuf, source: quick_xml::Error) -> Self {
        Self::Xml {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
