use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Time zone used to display dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeZoneMode {
    #[default]
    Utc,
    LocalTime,
}

impl TimeZoneMode {
    /// Decode the stored integer. Out-of-range values fall back to `Utc`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::LocalTime,
            _ => Self::Utc,
        }
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Utc => 0,
            Self::LocalTime => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utc => "utc",
            Self::LocalTime => "local_time",
        }
    }
}

impl FromStr for TimeZoneMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "utc" => Ok(Self::Utc),
            "local_time" => Ok(Self::LocalTime),
            _ => Err(CoreError::InvalidPreference {
                field: "time zone",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for TimeZoneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
