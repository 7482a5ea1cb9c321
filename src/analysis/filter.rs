use crate::domain::LogMessage;

/// Keep error entries whose severity is strictly greater than `threshold`.
pub fn filter_errors_over_severity(messages: &[LogMessage], threshold: i64) -> Vec<LogMessage> {
    messages
        .iter()
        .filter(|message| message.severity().is_some_and(|severity| severity > threshold))
        .cloned()
        .collect()
}

/// Stable sort by timestamp. Entries without a timestamp go last, in their
/// original order.
pub fn sort_by_timestamp(mut messages: Vec<LogMessage>) -> Vec<LogMessage> {
    messages.sort_by_key(|message| match message.timestamp() {
        Some(timestamp) => (0u8, timestamp),
        None => (1u8, 0),
    });
    messages
}
