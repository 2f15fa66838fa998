use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Shell autocompletion level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutocompletionMode {
    None,
    /// Complete everything except collection names
    NoCollectionNames,
    #[default]
    All,
}

impl AutocompletionMode {
    /// Decode the stored integer. Out-of-range values fall back to `All`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::NoCollectionNames,
            _ => Self::All,
        }
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::NoCollectionNames => 1,
            Self::All => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NoCollectionNames => "no_collection_names",
            Self::All => "all",
        }
    }
}

impl FromStr for AutocompletionMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "no_collection_names" => Ok(Self::NoCollectionNames),
            "all" => Ok(Self::All),
            _ => Err(CoreError::InvalidPreference {
                field: "autocompletion mode",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AutocompletionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
