use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Canonical sample source identifiers used in metadata and envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    Synthetic,
    Coinranking,
    File,
}

impl SourceId {
    pub const ALL: [Self; 3] = [Self::Synthetic, Self::Coinranking, Self::File];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synthetic => "synthetic",
            Self::Coinranking => "coinranking",
            Self::File => "file",
        }
    }

    /// Whether fetching from this source leaves the local machine.
    pub const fn is_remote(self) -> bool {
        matches!(self, Self::Coinranking)
    }
}

impl Display for SourceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "synthetic" => Ok(Self::Synthetic),
            "coinranking" => Ok(Self::Coinranking),
            "file" => Ok(Self::File),
            other => Err(ValidationError::InvalidSource {
                value: other.to_owned(),
            }),
        }
    }
}
