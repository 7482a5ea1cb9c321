use crate::domain::{LogLevel, LogMessage};
use crate::parser::parse_line;
use serde::Serialize;
use std::fmt;

/// Per-shape line counts for a whole input.
///
/// Unlike [`crate::parser::parse_log_text`], malformed lines are counted here
/// rather than dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    pub info: usize,
    pub warning: usize,
    pub error: usize,
    pub unknown: usize,
    pub malformed: usize,
    pub max_severity: Option<i64>,
}

impl LogSummary {
    pub fn from_lines(text: &str) -> Self {
        let mut summary = Self::default();
        for line in text.lines() {
            summary.record(&parse_line(line));
        }
        summary
    }

    pub fn record(&mut self, message: &LogMessage) {
        match message {
            LogMessage::KnownLog { level, .. } => match level {
                LogLevel::Info => self.info += 1,
                LogLevel::Warning => self.warning += 1,
                LogLevel::Error(severity) => {
                    self.error += 1;
                    self.max_severity = Some(
                        self.max_severity
                            .map_or(*severity, |current| current.max(*severity)),
                    );
                }
            },
            LogMessage::UnknownLog { .. } => self.unknown += 1,
            LogMessage::MalformedLog => self.malformed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.info + self.warning + self.error + self.unknown + self.malformed
    }
}

impl fmt::Display for LogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lines: {} info, {} warning, {} error, {} unknown, {} malformed",
            self.total(),
            self.info,
            self.warning,
            self.error,
            self.unknown,
            self.malformed
        )?;
        if let Some(max_severity) = self.max_severity {
            write!(f, " (max severity {max_severity})")?;
        }
        Ok(())
    }
}
