use crate::app::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the analyzer.
///
/// Parse problems never show up here: they become `UnknownLog` or
/// `MalformedLog` entries instead.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read log from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}
