//! Input parsing and run configuration resolution.
//!
//! This crate is intentionally IO-free: it validates flag values handed over by the CLI and
//! resolves them into an immutable [`RunConfig`].

#![forbid(unsafe_code)]

mod input;
mod resolve;

pub use input::parse_inputs;
pub use resolve::{RawArgs, RunConfig, resolve_run_config};

use opc_types::{OpcError, OutputFormat};

/// Validate an output format selector against the supported set.
pub fn parse_output_format(value: &str) -> Result<OutputFormat, OpcError> {
    value.parse()
}
