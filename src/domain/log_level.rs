use serde::{Deserialize, Serialize};

/// Level of a known log line.
///
/// Only `Error` carries a severity; higher means more severe. This is distinct
/// from `app::config::LogLevel`, which configures the analyzer's own tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Warning,
    Error(i64),
}

impl LogLevel {
    pub fn severity(&self) -> Option<i64> {
        match self {
            LogLevel::Error(severity) => Some(*severity),
            LogLevel::Info | LogLevel::Warning => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_carry_severity() {
        assert_eq!(LogLevel::Info.severity(), None);
        assert_eq!(LogLevel::Warning.severity(), None);
        assert_eq!(LogLevel::Error(7).severity(), Some(7));
    }
}
