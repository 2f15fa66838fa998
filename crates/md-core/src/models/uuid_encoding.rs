use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Byte order used when rendering legacy binary UUIDs (BSON subtype 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UuidEncoding {
    #[default]
    Default,
    Java,
    CSharp,
    Python,
}

impl UuidEncoding {
    /// Decode the stored integer. Out-of-range values fall back to `Default`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            1 => Self::Java,
            2 => Self::CSharp,
            3 => Self::Python,
            _ => Self::Default,
        }
    }

    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Default => 0,
            Self::Java => 1,
            Self::CSharp => 2,
            Self::Python => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Java => "java",
            Self::CSharp => "c_sharp",
            Self::Python => "python",
        }
    }
}

impl FromStr for UuidEncoding {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "default" => Ok(Self::Default),
            "java" => Ok(Self::Java),
            "c_sharp" => Ok(Self::CSharp),
            "python" => Ok(Self::Python),
            _ => Err(CoreError::InvalidPreference {
                field: "uuid encoding",
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UuidEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
