pub mod config;
pub mod logging_system;

pub use config::{Config, ConfigError, LogFormat, LogLevel, OutputFormat};
pub use logging_system::{LoggingSystem, setup_logging};

use crate::analysis::{Analysis, format_json};
use crate::domain::AnalyzerError;
use crate::parser::read_log_text;
use anyhow::Context;
use serde_json::json;
use std::io::{Read, Write};
use tracing::{debug, info};

pub struct App {
    config: Config,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, AnalyzerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the configured input: a file, or stdin when none is set.
    pub fn read_input(&self) -> Result<String, AnalyzerError> {
        match self.config.input_path() {
            Some(path) => read_log_text(path),
            None => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .map_err(AnalyzerError::Stdin)?;
                debug!(bytes = content.len(), "Read log from stdin");
                Ok(content)
            }
        }
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        Analysis::run(text, &self.config.analysis_options())
    }

    /// Output lines for an analysis, in the configured format.
    pub fn render(&self, analysis: &Analysis) -> Result<Vec<String>, AnalyzerError> {
        let mut lines = match self.config.output {
            OutputFormat::Text => analysis.formatted(),
            OutputFormat::Json => analysis
                .errors
                .iter()
                .map(format_json)
                .collect::<Result<Vec<_>, _>>()?,
        };

        if self.config.summary {
            lines.push(match self.config.output {
                OutputFormat::Text => analysis.summary.to_string(),
                OutputFormat::Json => json!({ "summary": analysis.summary }).to_string(),
            });
        }

        Ok(lines)
    }

    /// Analyze the configured input and write the results to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let text = self.read_input()?;
        let analysis = self.analyze(&text);

        for line in self.render(&analysis)? {
            writeln!(out, "{line}").context("Failed to write results")?;
        }
        out.flush().context("Failed to flush results")?;

        info!(
            selected = analysis.errors.len(),
            lines = analysis.summary.total(),
            "rask-log-analyzer finished"
        );
        Ok(())
    }
}

// Main entry point for the binary
pub fn main() -> anyhow::Result<()> {
    let config = match Config::from_args(std::env::args_os()) {
        Ok(config) => config,
        // --help, --version and usage errors are printed by clap itself
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => return Err(e).context("Failed to load configuration"),
    };

    setup_logging(config.log_level, config.log_format, &config.log_directives)?;
    info!(
        "Starting rask-log-analyzer v{} (min_severity={}, output={:?})",
        crate::VERSION,
        config.min_severity,
        config.output
    );

    let app = App::from_config(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app.run(&mut out)
}
