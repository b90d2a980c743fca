//! The run use case: settings -> module -> evaluation -> rendering.

use anyhow::Context;
use opc_engine::PolicyEvaluator;
use opc_settings::{RawArgs, RunConfig};
use opc_types::{OpcError, ResultMap, into_result_map};
use std::io::Write;

/// Resolve raw flags and run them. Any validation failure returns before the module is read.
pub fn execute(
    raw: RawArgs,
    evaluator: &dyn PolicyEvaluator,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let config = opc_settings::resolve_run_config(raw)?;
    run(&config, evaluator, out)
}

/// Evaluate `config` and write the rendered result to `out`.
///
/// Rendering finishes in memory before anything is written, so a failure leaves `out`
/// untouched.
pub fn run(
    config: &RunConfig,
    evaluator: &dyn PolicyEvaluator,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let map = evaluate_config(config, evaluator)?;

    let rendered = opc_render::render(config.format, &map)?;
    tracing::debug!(format = %config.format, keys = map.len(), "rendered result");

    out.write_all(rendered.as_bytes()).context("write output")?;
    out.flush().context("flush output")?;
    Ok(())
}

/// Load the module named by `config` and evaluate it, returning the result object.
pub fn evaluate_config(
    config: &RunConfig,
    evaluator: &dyn PolicyEvaluator,
) -> Result<ResultMap, OpcError> {
    let source = crate::read_module(&config.module)?;
    let value = evaluator
        .evaluate(&source, &config.query, &config.inputs)
        .map_err(|err| OpcError::Evaluation(format!("{err:#}")))?;
    into_result_map(value)
}
