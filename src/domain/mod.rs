//! Domain layer for rask-log-analyzer.
//!
//! Contains the canonical types shared across all modules:
//! - `LogMessage`: The outcome of parsing one log line
//! - `LogLevel`: Severity of a known log line (Info/Warning/Error)
//! - `AnalyzerError`: Top-level error type

pub mod error;
pub mod log_level;
pub mod log_message;

pub use error::AnalyzerError;
pub use log_level::LogLevel;
pub use log_message::LogMessage;
