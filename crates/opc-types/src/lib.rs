//! Stable data types shared across the opc workspace.
//!
//! This crate is intentionally boring:
//! - the per-invocation data model (input map, policy source, result map)
//! - the output format selector and query naming
//! - stable string IDs for flags and formats
//! - the error taxonomy every layer reports through

#![forbid(unsafe_code)]

pub mod error;
pub mod format;
pub mod ids;
pub mod input;
pub mod policy;
pub mod query;
pub mod result;

pub use error::OpcError;
pub use format::OutputFormat;
pub use input::InputMap;
pub use policy::PolicySource;
pub use query::QueryName;
pub use result::{ResultMap, into_result_map, json_kind};
