use camino::Utf8PathBuf;
use thiserror::Error;

/// Every way a single `opc` invocation can fail.
///
/// Variants that wrap an underlying error expose it through
/// [`std::error::Error::source`], so `{:#}` on an `anyhow::Error` prints the
/// full chain (for example the OS message behind [`OpcError::Io`]).
#[derive(Debug, Error)]
pub enum OpcError {
    #[error("required flag(s) \"{0}\" not set")]
    MissingRequiredFlag(String),

    #[error("Invalid input({0}).")]
    InvalidInputFormat(String),

    #[error("Invalid outputFormat({0}).")]
    InvalidOutputFormat(String),

    #[error("read module {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The engine's message chain, kept verbatim.
    #[error("policy evaluation failed: {0}")]
    Evaluation(String),

    #[error("unexpected result shape: expected an object, got {0}")]
    UnexpectedResultShape(&'static str),

    #[error("serialize result")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn messages_match_cli_contract() {
        assert_eq!(
            OpcError::MissingRequiredFlag("module".to_string()).to_string(),
            r#"required flag(s) "module" not set"#
        );
        assert_eq!(
            OpcError::InvalidInputFormat("aaa".to_string()).to_string(),
            "Invalid input(aaa)."
        );
        assert_eq!(
            OpcError::InvalidOutputFormat("yaml".to_string()).to_string(),
            "Invalid outputFormat(yaml)."
        );
    }

    #[test]
    fn io_error_names_path_and_keeps_source() {
        let err = OpcError::Io {
            path: Utf8PathBuf::from("policies/missing.rego"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("policies/missing.rego"));
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("no such file")
        );
    }
}
