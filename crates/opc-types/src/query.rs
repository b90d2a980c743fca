use std::fmt;

use crate::ids::{DATA_ROOT, DEFAULT_QUERY_PACKAGE};

/// Fully-qualified query, always `data.<package>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryName(String);

impl QueryName {
    pub fn for_package(package: &str) -> Self {
        Self(format!("{DATA_ROOT}.{package}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package part, without the `data.` root.
    pub fn package(&self) -> &str {
        self.0
            .strip_prefix(DATA_ROOT)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&self.0)
    }
}

impl Default for QueryName {
    fn default() -> Self {
        Self::for_package(DEFAULT_QUERY_PACKAGE)
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
