use camino::Utf8PathBuf;
use opc_types::{InputMap, OpcError, OutputFormat, QueryName, ids};

use crate::input::parse_inputs;

/// Flag values exactly as the user typed them.
#[derive(Clone, Debug)]
pub struct RawArgs {
    pub module: Option<Utf8PathBuf>,
    pub query_package: String,
    pub inputs: Vec<String>,
    pub format: String,
}

impl Default for RawArgs {
    fn default() -> Self {
        Self {
            module: None,
            query_package: ids::DEFAULT_QUERY_PACKAGE.to_string(),
            inputs: Vec::new(),
            format: ids::FORMAT_JSON.to_string(),
        }
    }
}

/// Validated, immutable configuration for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub module: Utf8PathBuf,
    pub query: QueryName,
    pub inputs: InputMap,
    pub format: OutputFormat,
}

/// Validate raw flags in a fixed order: module presence, inputs, then output format.
///
/// The first failure wins; nothing here touches the filesystem.
pub fn resolve_run_config(raw: RawArgs) -> Result<RunConfig, OpcError> {
    let module = raw
        .module
        .ok_or_else(|| OpcError::MissingRequiredFlag(ids::FLAG_MODULE.to_string()))?;

    let inputs = parse_inputs(&raw.inputs)?;
    let format = crate::parse_output_format(&raw.format)?;
    let query = QueryName::for_package(&raw.query_package);

    tracing::debug!(
        %module,
        %query,
        %format,
        inputs = inputs.len(),
        "resolved run config"
    );

    Ok(RunConfig {
        module,
        query,
        inputs,
        format,
    })
}
