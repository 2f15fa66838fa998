use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How query results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Text,
    /// Default for a fresh document
    #[default]
    Tree,
    Table,
    /// Mode chosen per result tab
    Custom,
}

impl ViewMode {
    /// Decode the stored integer. Anything but a known mode means `Custom`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::Text,
            1 => Self::Tree,
            2 => Self::Table,
            _ => Self::Custom,
        }
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Text => 0,
            Self::Tree => 1,
            Self::Table => 2,
            Self::Custom => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tree => "tree",
            Self::Table => "table",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for ViewMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "text" => Ok(Self::Text),
            "tree" => Ok(Self::Tree),
            "table" => Ok(Self::Table),
            "custom" => Ok(Self::Custom),
            _ => Err(CoreError::InvalidPreference {
                field: "view mode",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
