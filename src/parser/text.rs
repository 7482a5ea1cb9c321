use super::line::parse_line;
use crate::domain::{AnalyzerError, LogMessage};
use std::path::Path;
use tracing::debug;

/// Parse newline-separated log text.
///
/// Malformed lines are dropped; known and unknown entries keep input order.
pub fn parse_log_text(text: &str) -> Vec<LogMessage> {
    let mut dropped = 0usize;
    let messages: Vec<LogMessage> = text
        .lines()
        .map(parse_line)
        .filter(|message| {
            if message.is_malformed() {
                dropped += 1;
                false
            } else {
                true
            }
        })
        .collect();

    debug!(
        parsed = messages.len(),
        dropped_malformed = dropped,
        "Parsed log text"
    );
    messages
}

/// Read a whole log file and parse it with [`parse_log_text`].
pub fn read_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogMessage>, AnalyzerError> {
    Ok(parse_log_text(&read_log_text(path)?))
}

/// Read a whole log file without parsing it.
pub fn read_log_text<P: AsRef<Path>>(path: P) -> Result<String, AnalyzerError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Read log file");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogLevel;
    use std::io::Write;

    const SAMPLE: &str = "I,147,mice in the air\nX blblbaaaaa\n\nE,2,148,istereadea\nW,oops,bad\n";

    #[test]
    fn test_parse_log_text_drops_malformed() {
        let messages = parse_log_text(SAMPLE);
        assert_eq!(
            messages,
            vec![
                LogMessage::known(LogLevel::Info, 147, "mice in the air"),
                LogMessage::unknown("X blblbaaaaa"),
                LogMessage::known(LogLevel::Error(2), 148, "istereadea"),
            ]
        );
    }

    #[test]
    fn test_parse_log_text_handles_crlf() {
        let messages = parse_log_text("I,1,first\r\nW,2,second\r\n");
        assert_eq!(
            messages,
            vec![
                LogMessage::known(LogLevel::Info, 1, "first"),
                LogMessage::known(LogLevel::Warning, 2, "second"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_log_text("").is_empty());
        assert!(parse_log_text("\n\n\n").is_empty());
    }

    #[test]
    fn test_read_log_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let messages = read_log_file(file.path()).unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages, parse_log_text(SAMPLE));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.log");

        match read_log_file(&missing) {
            Err(AnalyzerError::Read { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }
}
