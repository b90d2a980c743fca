//! Stable identifiers for flags, formats, and the query namespace.

/// Root namespace every query is evaluated under.
pub const DATA_ROOT: &str = "data";

/// Package queried when `--query-package` is not given.
pub const DEFAULT_QUERY_PACKAGE: &str = "main";

// Flags
pub const FLAG_MODULE: &str = "module";
pub const FLAG_QUERY_PACKAGE: &str = "query-package";
pub const FLAG_INPUT: &str = "input";
pub const FLAG_FORMAT: &str = "format";

// Output formats
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_ENV_FILE: &str = "env-file";
