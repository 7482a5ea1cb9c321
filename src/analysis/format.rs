use crate::domain::{AnalyzerError, LogLevel, LogMessage};
use std::fmt;

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warning => write!(f, "Warning"),
            LogLevel::Error(severity) => write!(f, "Error {severity}"),
        }
    }
}

impl fmt::Display for LogMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogMessage::KnownLog {
                level,
                timestamp,
                message,
            } => write!(f, "{level} ({timestamp}) {message}"),
            LogMessage::UnknownLog { message } => write!(f, "Unknown log: {message}"),
            LogMessage::MalformedLog => write!(f, "Malformed Log"),
        }
    }
}

/// Human-readable rendering of a message, e.g. `Error 5 (158) some strange error`.
pub fn format_message(message: &LogMessage) -> String {
    message.to_string()
}

/// One-line JSON rendering of a message.
pub fn format_json(message: &LogMessage) -> Result<String, AnalyzerError> {
    Ok(serde_json::to_string(message)?)
}
