//! Policy loading.

use camino::Utf8Path;
use opc_types::{OpcError, PolicySource};

/// Read the whole policy module at `path`.
pub fn read_module(path: &Utf8Path) -> Result<PolicySource, OpcError> {
    let text = std::fs::read_to_string(path).map_err(|source| OpcError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(module = %path, bytes = text.len(), "loaded policy module");
    Ok(PolicySource::new(path, text))
}
