//! Analysis over parsed log messages: severity filtering, formatting,
//! summaries and the end-to-end pipeline.

pub mod filter;
pub mod format;
pub mod pipeline;
pub mod summary;

pub use filter::{filter_errors_over_severity, sort_by_timestamp};
pub use format::{format_json, format_message};
pub use pipeline::{Analysis, AnalysisOptions, what_went_wrong, what_went_wrong_in_file};
pub use summary::LogSummary;
