use std::fmt;
use std::str::FromStr;

use crate::error::OpcError;
use crate::ids;

/// How the evaluated result is written to the output sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// A single compact JSON object.
    #[default]
    Json,
    /// Sorted `KEY=VALUE` lines suitable for shell sourcing.
    EnvFile,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Json, OutputFormat::EnvFile];

    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Json => ids::FORMAT_JSON,
            OutputFormat::EnvFile => ids::FORMAT_ENV_FILE,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = OpcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| OpcError::InvalidOutputFormat(s.to_string()))
    }
}
