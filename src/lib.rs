#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::missing_panics_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. AnalyzerError in domain::error
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

pub mod analysis;
pub mod app;
pub mod domain;
pub mod parser;

// Re-export main types for easy access
pub use analysis::{
    LogSummary, filter_errors_over_severity, format_message, what_went_wrong,
    what_went_wrong_in_file,
};
pub use app::{App, Config};
pub use domain::{AnalyzerError, LogLevel, LogMessage};
pub use parser::{parse_line, parse_log_text, read_log_file};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
