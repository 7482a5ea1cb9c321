use super::filter::{filter_errors_over_severity, sort_by_timestamp};
use super::format::format_message;
use super::summary::LogSummary;
use crate::domain::{AnalyzerError, LogMessage};
use crate::parser::{parse_line, parse_log_text, read_log_file};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// Formatted error lines with severity above `threshold`, in input order.
pub fn what_went_wrong(text: &str, threshold: i64) -> Vec<String> {
    format_all(&filter_errors_over_severity(&parse_log_text(text), threshold))
}

/// [`what_went_wrong`] over the contents of a file.
pub fn what_went_wrong_in_file<P: AsRef<Path>>(
    path: P,
    threshold: i64,
) -> Result<Vec<String>, AnalyzerError> {
    let messages = read_log_file(path)?;
    Ok(format_all(&filter_errors_over_severity(&messages, threshold)))
}

fn format_all(messages: &[LogMessage]) -> Vec<String> {
    messages.iter().map(format_message).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub min_severity: i64,
    pub sort_by_timestamp: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_severity: 50,
            sort_by_timestamp: false,
        }
    }
}

/// Selected error entries plus a summary of the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub errors: Vec<LogMessage>,
    pub summary: LogSummary,
}

impl Analysis {
    pub fn run(text: &str, options: &AnalysisOptions) -> Self {
        // Single pass: every line feeds the summary, malformed ones go no further
        let mut summary = LogSummary::default();
        let messages: Vec<LogMessage> = text
            .lines()
            .map(parse_line)
            .filter(|message| {
                summary.record(message);
                !message.is_malformed()
            })
            .collect();

        let mut errors = filter_errors_over_severity(&messages, options.min_severity);
        if options.sort_by_timestamp {
            errors = sort_by_timestamp(errors);
        }

        debug!(
            lines = summary.total(),
            selected = errors.len(),
            min_severity = options.min_severity,
            "Analysis complete"
        );
        if messages.is_empty() && summary.total() > 0 {
            warn!("Input contained no recognisable log lines");
        }

        Self { errors, summary }
    }

    pub fn formatted(&self) -> Vec<String> {
        format_all(&self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LogLevel;

    const SAMPLE: &str = "I,147,mice in the air\n\
                          W,149,could be worse\n\
                          E,5,158,some strange error\n\
                          E,2,148,istereadea\n";

    #[test]
    fn test_what_went_wrong_sample() {
        assert_eq!(
            what_went_wrong(SAMPLE, 2),
            vec!["Error 5 (158) some strange error".to_string()]
        );
    }

    #[test]
    fn test_what_went_wrong_low_threshold_keeps_order() {
        assert_eq!(
            what_went_wrong(SAMPLE, 0),
            vec![
                "Error 5 (158) some strange error".to_string(),
                "Error 2 (148) istereadea".to_string(),
            ]
        );
    }

    #[test]
    fn test_what_went_wrong_nothing_qualifies() {
        assert!(what_went_wrong(SAMPLE, 5).is_empty());
        assert!(what_went_wrong("", 0).is_empty());
    }

    #[test]
    fn test_analysis_sorted() {
        let options = AnalysisOptions {
            min_severity: 0,
            sort_by_timestamp: true,
        };
        let analysis = Analysis::run(SAMPLE, &options);

        assert_eq!(
            analysis.errors,
            vec![
                LogMessage::known(LogLevel::Error(2), 148, "istereadea"),
                LogMessage::known(LogLevel::Error(5), 158, "some strange error"),
            ]
        );
        assert_eq!(analysis.summary.total(), 4);
        assert_eq!(analysis.summary.max_severity, Some(5));
    }

    #[test]
    fn test_analysis_default_threshold() {
        let analysis = Analysis::run(
            "E,50,1,at threshold\nE,51,2,over\n",
            &AnalysisOptions::default(),
        );
        assert_eq!(analysis.formatted(), vec!["Error 51 (2) over".to_string()]);
    }

    #[test]
    fn test_analysis_agrees_with_separate_passes() {
        let text = "I,1,a\n\nE,70,2,b\nnoise\nE,x,3,bad\nE,90,4,c\nW,5,d,extra\n";
        let analysis = Analysis::run(text, &AnalysisOptions::default());

        assert_eq!(analysis.summary, LogSummary::from_lines(text));
        assert_eq!(analysis.summary.malformed, 3);
        assert_eq!(
            analysis.errors,
            filter_errors_over_severity(&parse_log_text(text), 50)
        );
        assert_eq!(
            analysis.formatted(),
            vec!["Error 70 (2) b".to_string(), "Error 90 (4) c".to_string()]
        );
    }
}
