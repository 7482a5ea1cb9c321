use super::config::{LogFormat, LogLevel};
use crate::domain::AnalyzerError;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds and installs the global tracing subscriber.
///
/// Diagnostics always go to stderr so stdout carries only analysis results.
pub struct LoggingSystem {
    default_level: LogLevel,
    format: LogFormat,
    directives: Vec<String>,
}

impl LoggingSystem {
    pub fn new(default_level: LogLevel, format: LogFormat) -> Self {
        Self {
            default_level,
            format,
            directives: Vec::new(),
        }
    }

    /// Add a per-target directive such as `rask_log_analyzer::parser=debug`.
    pub fn add_directive(&mut self, directive_str: &str) -> Result<(), AnalyzerError> {
        directive_str.parse::<Directive>().map_err(|e| {
            AnalyzerError::Logging(format!("Invalid log directive '{directive_str}': {e}"))
        })?;
        self.directives.push(directive_str.to_string());
        Ok(())
    }

    pub fn build_filter_string(&self) -> String {
        let mut filter_parts = Vec::with_capacity(self.directives.len() + 1);

        // Default level first
        filter_parts.push(self.default_level.as_str().to_string());
        filter_parts.extend(self.directives.iter().cloned());

        filter_parts.join(",")
    }

    fn env_filter(&self) -> Result<EnvFilter, AnalyzerError> {
        // RUST_LOG wins over the configured level when set
        let filter_string = match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => self.build_filter_string(),
        };

        EnvFilter::try_new(&filter_string).map_err(|e| {
            AnalyzerError::Logging(format!(
                "Failed to create EnvFilter with '{filter_string}': {e}"
            ))
        })
    }

    pub fn initialize(&self) -> Result<(), AnalyzerError> {
        let registry = tracing_subscriber::registry().with(self.env_filter()?);

        let result = match self.format {
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true)
                        .compact(),
                )
                .try_init(),
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .json()
                        .flatten_event(true)
                        .with_writer(std::io::stderr),
                )
                .try_init(),
        };

        result.map_err(|e| {
            AnalyzerError::Logging(format!("Failed to set global tracing subscriber: {e}"))
        })
    }
}

pub fn setup_logging(
    level: LogLevel,
    format: LogFormat,
    directives: &[String],
) -> Result<(), AnalyzerError> {
    let mut logging_system = LoggingSystem::new(level, format);
    for directive in directives {
        logging_system.add_directive(directive)?;
    }
    logging_system.initialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_string() {
        let mut logging_system = LoggingSystem::new(LogLevel::Info, LogFormat::Compact);
        assert_eq!(logging_system.build_filter_string(), "info");

        logging_system
            .add_directive("rask_log_analyzer::parser=debug")
            .unwrap();
        assert_eq!(
            logging_system.build_filter_string(),
            "info,rask_log_analyzer::parser=debug"
        );
    }

    #[test]
    fn test_invalid_directive_rejected() {
        let mut logging_system = LoggingSystem::new(LogLevel::Warn, LogFormat::Json);
        let result = logging_system.add_directive("target=notalevel");
        assert!(matches!(result, Err(AnalyzerError::Logging(_))));
        assert_eq!(logging_system.build_filter_string(), "warn");
    }

    #[test]
    fn test_setup_rejects_invalid_directive_before_install() {
        let directives = vec!["rask_log_analyzer=loud".to_string()];
        let result = setup_logging(LogLevel::Warn, LogFormat::Compact, &directives);
        match result {
            Err(AnalyzerError::Logging(message)) => {
                assert!(message.contains("Invalid log directive"));
            }
            other => panic!("expected invalid directive error, got {other:?}"),
        }
    }

    #[test]
    fn test_second_initialization_is_an_error() {
        // Only one global subscriber can be installed per process
        let directives = vec!["rask_log_analyzer=info".to_string()];
        let _ = setup_logging(LogLevel::Error, LogFormat::Compact, &directives);
        let second = setup_logging(LogLevel::Error, LogFormat::Compact, &[]);
        assert!(matches!(second, Err(AnalyzerError::Logging(_))));
    }
}
