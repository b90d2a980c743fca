//! Renderers for evaluated configuration objects.

#![forbid(unsafe_code)]

mod env_file;
mod json;

pub use env_file::render_env_file;
pub use json::render_json;

use opc_types::{OpcError, OutputFormat, ResultMap};

/// Render `map` in the selected format. The returned text ends with a newline unless it is
/// empty.
pub fn render(format: OutputFormat, map: &ResultMap) -> Result<String, OpcError> {
    match format {
        OutputFormat::Json => render_json(map),
        OutputFormat::EnvFile => render_env_file(map),
    }
}
