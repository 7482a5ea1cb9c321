//! Log line parsing.
//!
//! - `line`: one comma-separated line to one `LogMessage`
//! - `text`: newline-separated text (or a file) to an ordered message list

pub mod line;
pub mod text;

pub use line::parse_line;
pub use text::{parse_log_text, read_log_file, read_log_text};
