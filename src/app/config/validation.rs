use super::{Config, ConfigError};
use tracing_subscriber::filter::Directive;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate input file if one was given
        if let Some(input) = self.input_path()
            && !input.is_file()
        {
            return Err(ConfigError::InvalidConfig(format!(
                "Input log file does not exist: {}",
                input.display()
            )));
        }

        // Validate log directives before the subscriber is built
        for directive in &self.log_directives {
            directive.parse::<Directive>().map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid log directive '{directive}': {e}"))
            })?;
        }

        Ok(())
    }
}
