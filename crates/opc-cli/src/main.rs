//! CLI entry point for opc.
//!
//! This module is intentionally thin: it handles argument parsing, logging, and exit codes.
//! All business logic lives in the `opc-app` crate.

mod logging;

use camino::Utf8PathBuf;
use clap::Parser;
use opc_engine::RegoEvaluator;
use opc_settings::RawArgs;
use opc_types::ids;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "opc",
    version,
    about = "Open Policy Configuration",
    long_about = "This is a tool to manage your configurations via all kinds of policies."
)]
struct Cli {
    /// Rego file path. (required)
    #[arg(short = 'm', long = ids::FLAG_MODULE)]
    module: Option<Utf8PathBuf>,

    /// Query package name in rego file.
    #[arg(short = 'q', long = ids::FLAG_QUERY_PACKAGE, default_value = ids::DEFAULT_QUERY_PACKAGE)]
    query_package: String,

    /// Usage: -i key1=value1 -i key2=value2 ...
    #[arg(short = 'i', long = ids::FLAG_INPUT, value_delimiter = ',')]
    inputs: Vec<String>,

    /// Output format (json, env-file).
    #[arg(short = 'f', long = ids::FLAG_FORMAT, default_value = ids::FORMAT_JSON)]
    format: String,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines.
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    logging::init_tracing(cli.log_json, level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("opc error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let raw = RawArgs {
        module: cli.module,
        query_package: cli.query_package,
        inputs: input_entries(cli.inputs),
        format: cli.format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    opc_app::execute(raw, &RegoEvaluator::new(), &mut out)
}

/// Empty `--input` values (`-i ""`) carry no entry and are dropped before parsing.
fn input_entries(raw: Vec<String>) -> Vec<String> {
    raw.into_iter().filter(|entry| !entry.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_original_flags() {
        let cli = Cli::try_parse_from(["opc", "-m", "policy.rego"]).expect("parse");
        assert_eq!(cli.module.as_deref(), Some(camino::Utf8Path::new("policy.rego")));
        assert_eq!(cli.query_package, "main");
        assert_eq!(cli.format, "json");
        assert!(cli.inputs.is_empty());
    }

    #[test]
    fn inputs_repeat_and_split_on_commas() {
        let cli = Cli::try_parse_from(["opc", "-i", "env=QA,market=TW", "--input", "tier=web"])
            .expect("parse");
        assert_eq!(cli.inputs, vec!["env=QA", "market=TW", "tier=web"]);
    }

    #[test]
    fn empty_input_values_are_dropped() {
        let cli = Cli::try_parse_from(["opc", "-i", "", "-i", "env=QA"]).expect("parse");
        assert_eq!(input_entries(cli.inputs), vec!["env=QA"]);
    }

    #[test]
    fn module_flag_is_optional_at_parse_time() {
        let cli = Cli::try_parse_from(["opc"]).expect("parse");
        assert!(cli.module.is_none());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["opc", "-k"]).is_err());
    }
}
