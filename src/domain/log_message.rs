use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// The result of parsing a single log line.
///
/// Every line maps to exactly one variant, so parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogMessage {
    KnownLog {
        level: LogLevel,
        timestamp: i64,
        message: String,
    },
    /// A non-blank line that doesn't match any known shape.
    UnknownLog { message: String },
    /// An empty or unparseable line.
    MalformedLog,
}

impl LogMessage {
    pub fn known(level: LogLevel, timestamp: i64, message: impl Into<String>) -> Self {
        LogMessage::KnownLog {
            level,
            timestamp,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        LogMessage::UnknownLog {
            message: message.into(),
        }
    }

    /// Severity of an error entry; `None` for everything else.
    pub fn severity(&self) -> Option<i64> {
        match self {
            LogMessage::KnownLog { level, .. } => level.severity(),
            LogMessage::UnknownLog { .. } | LogMessage::MalformedLog => None,
        }
    }

    pub fn timestamp(&self) -> Option<i64> {
        match self {
            LogMessage::KnownLog { timestamp, .. } => Some(*timestamp),
            LogMessage::UnknownLog { .. } | LogMessage::MalformedLog => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LogMessage::MalformedLog)
    }
}
