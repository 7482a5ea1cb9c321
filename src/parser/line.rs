use crate::domain::{LogLevel, LogMessage};

const FIELD_DELIMITER: char = ',';

/// Parse a single log line.
///
/// Recognised shapes, tried in order:
/// - `I,<timestamp>,<message>`
/// - `W,<timestamp>,<message>`
/// - `E,<severity>,<timestamp>,<message>`
/// - a single non-blank field, kept verbatim as an unknown log
///
/// Anything else, including integers that don't parse, is `MalformedLog`.
pub fn parse_line(line: &str) -> LogMessage {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    match fields.as_slice() {
        ["I", timestamp, message] => known(LogLevel::Info, timestamp, message),
        ["W", timestamp, message] => known(LogLevel::Warning, timestamp, message),
        ["E", severity, timestamp, message] => match parse_int(severity) {
            Some(severity) => known(LogLevel::Error(severity), timestamp, message),
            None => LogMessage::MalformedLog,
        },
        [single] if !single.trim().is_empty() => LogMessage::unknown(*single),
        _ => LogMessage::MalformedLog,
    }
}

fn known(level: LogLevel, timestamp: &str, message: &str) -> LogMessage {
    match parse_int(timestamp) {
        Some(timestamp) => LogMessage::known(level, timestamp, message),
        None => LogMessage::MalformedLog,
    }
}

fn parse_int(field: &str) -> Option<i64> {
    field.parse().ok()
}
