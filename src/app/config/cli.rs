use super::serde_helpers::{load_env_enum, load_env_list, load_env_path_opt, load_env_var};
use super::{ConfigError, LogFormat, LogLevel, OutputFormat};
use crate::analysis::AnalysisOptions;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Log file to analyze ("-" or omitted reads stdin)
    #[arg(env = "LOG_INPUT")]
    pub input: Option<PathBuf>,

    /// Only report errors with a severity strictly above this value
    #[arg(
        long,
        env = "MIN_SEVERITY",
        default_value = "50",
        allow_negative_numbers = true
    )]
    pub min_severity: i64,

    /// Output format for the selected entries
    #[arg(long, env = "OUTPUT_FORMAT", default_value = "text")]
    pub output: OutputFormat,

    /// Order selected entries by timestamp instead of input order
    #[arg(long, env = "SORT_BY_TIMESTAMP")]
    pub sort_by_timestamp: bool,

    /// Print a per-level summary after the results
    #[arg(long, env = "SHOW_SUMMARY")]
    pub summary: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Diagnostic log format
    #[arg(long, env = "LOG_FORMAT", default_value = "compact")]
    pub log_format: LogFormat,

    /// Extra per-target filter directive, e.g. `rask_log_analyzer::parser=debug`
    #[arg(long = "log-directive", env = "LOG_DIRECTIVES", value_delimiter = ',')]
    pub log_directives: Vec<String>,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            min_severity: 50,
            output: OutputFormat::Text,
            sort_by_timestamp: false,
            summary: false,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Compact,
            log_directives: Vec::new(),
            config_file: None,
        }
    }
}

impl Config {
    /// Parse command-line arguments (with env fallbacks). When a config file
    /// is given its values fill every field not set on the command line or
    /// through the environment.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Config::command().try_get_matches_from(args)?;
        let mut config = Config::from_arg_matches(&matches)?;

        if let Some(config_file) = config.config_file.clone() {
            let from_file = Self::load_file(&config_file)?;
            config.fill_unset_from(from_file, &matches);
        }

        config.validate()?;
        Ok(config)
    }

    fn fill_unset_from(&mut self, file: Config, matches: &ArgMatches) {
        let unset = |id: &str| {
            !matches!(
                matches.value_source(id),
                Some(ValueSource::CommandLine | ValueSource::EnvVariable)
            )
        };

        if unset("input") {
            self.input = file.input;
        }
        if unset("min_severity") {
            self.min_severity = file.min_severity;
        }
        if unset("output") {
            self.output = file.output;
        }
        if unset("sort_by_timestamp") {
            self.sort_by_timestamp = file.sort_by_timestamp;
        }
        if unset("summary") {
            self.summary = file.summary;
        }
        if unset("log_level") {
            self.log_level = file.log_level;
        }
        if unset("log_format") {
            self.log_format = file.log_format;
        }
        if unset("log_directives") {
            self.log_directives = file.log_directives;
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        load_env_path_opt("LOG_INPUT", &mut config.input);
        load_env_var("MIN_SEVERITY", &mut config.min_severity)?;
        load_env_enum("OUTPUT_FORMAT", &mut config.output)?;
        load_env_var("SORT_BY_TIMESTAMP", &mut config.sort_by_timestamp)?;
        load_env_var("SHOW_SUMMARY", &mut config.summary)?;
        load_env_enum("LOG_LEVEL", &mut config.log_level)?;
        load_env_enum("LOG_FORMAT", &mut config.log_format)?;
        load_env_list("LOG_DIRECTIVES", &mut config.log_directives);
        load_env_path_opt("CONFIG_FILE", &mut config.config_file);

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::load_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// The input file, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != STDIN_MARKER)
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_severity: self.min_severity,
            sort_by_timestamp: self.sort_by_timestamp,
        }
    }
}
