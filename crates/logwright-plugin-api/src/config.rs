//! Host configuration loading and management
//!
//! This module handles loading and parsing the host configuration from
//! `$XDG_CONFIG_HOME/logwright/config.toml`. If the configuration file
//! doesn't exist, a default configuration is created with documented
//! comments. Each parser gets an `enabled` flag plus a free-form options
//! table forwarded verbatim to its init hook.

use logwright_parser_core::ParserOptions;
use logwright_runtime::{RuntimeError, RuntimeResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Main host configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// General host settings
    #[serde(default)]
    pub host: HostSettings,
    /// Per-parser configurations
    #[serde(default)]
    pub parsers: HashMap<String, ParserSettings>,
}

/// General host settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostSettings {
    /// Log level (trace, debug, info, warn, error)
    /// Default: "info"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Per-parser configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParserSettings {
    /// Whether this parser is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Parser-specific options, forwarded verbatim to the init hook
    #[serde(default)]
    pub options: toml::value::Table,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: HostSettings::default(),
            parsers: HashMap::new(),
        }
    }
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            options: toml::value::Table::new(),
        }
    }
}

impl ParserSettings {
    /// The options table as [`ParserOptions`] for an init hook.
    pub fn options(&self) -> ParserOptions {
        ParserOptions::from_table(self.options.clone())
    }
}

impl HostConfig {
    /// Load configuration from the specified path
    pub fn load(path: impl AsRef<Path>) -> RuntimeResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: HostConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default XDG config location
    ///
    /// If the configuration file doesn't exist, creates a default
    /// configuration file with documented comments.
    pub fn load_default() -> RuntimeResult<Self> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_file(&config_path)?;
        }

        Self::load(&config_path)
    }

    /// Get the default configuration file path
    ///
    /// Returns `$XDG_CONFIG_HOME/logwright/config.toml`
    pub fn default_config_path() -> RuntimeResult<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "logwright", "logwright").ok_or_else(
            || RuntimeError::InvalidConfig("failed to determine project directories".to_string()),
        )?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Create a default configuration file with documented comments
    fn create_default_file(path: &Path) -> RuntimeResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, Self::default_config_content())?;

        tracing::info!("Created default configuration file at: {}", path.display());
        Ok(())
    }

    /// Generate the default configuration file content with comments
    fn default_config_content() -> String {
        r#"# logwright host configuration
# This file configures the parser loading pipeline.

[host]
# Log level: trace, debug, info, warn, error
# Default: "info"
log_level = "info"

# Per-parser configurations
# Each registered parser can be configured with:
# - enabled: Whether the parser is enabled (default: true)
# - options: Parser-specific options, handed to its init hook

# Example: greedy capture parser
# [parsers.GreedyParser]
# enabled = true
#
# [parsers.GreedyParser.options]
# field = "request"
# until = " HTTP"
"#
        .to_string()
    }

    /// Validate the configuration
    pub fn validate(&self) -> RuntimeResult<()> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.host.log_level.as_str()) {
            return Err(RuntimeError::InvalidConfig(format!(
                "invalid log_level: {}. Must be one of: {}",
                self.host.log_level,
                valid_log_levels.join(", ")
            )));
        }

        for name in self.parsers.keys() {
            if name.is_empty() {
                return Err(RuntimeError::InvalidConfig(
                    "parser names must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the settings for a parser, falling back to the defaults (enabled,
    /// no options) when the configuration does not mention it.
    pub fn parser(&self, name: &str) -> ParserSettings {
        self.parsers.get(name).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = HostConfig::default();
        assert_eq!(config.host.log_level, "info");
        assert!(config.parsers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unconfigured_parser_defaults_to_enabled() {
        let config = HostConfig::default();
        let settings = config.parser("anything");
        assert!(settings.enabled);
        assert!(settings.options().is_empty());
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[host]
log_level = "debug"

[parsers.GreedyParser]
enabled = true

[parsers.GreedyParser.options]
field = "request"
until = " HTTP"

[parsers.NoisyParser]
enabled = false
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = HostConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.host.log_level, "debug");

        let greedy = config.parser("GreedyParser");
        assert!(greedy.enabled);
        assert_eq!(greedy.options().get_str("field"), Some("request"));
        assert_eq!(greedy.options().get_str("until"), Some(" HTTP"));

        assert!(!config.parser("NoisyParser").enabled);
    }

    #[test]
    fn test_load_minimal_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[host]\nlog_level = \"info\"\n").unwrap();

        let config = HostConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.host.log_level, "info");
        assert!(config.parsers.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = HostConfig::load("/nonexistent/logwright/config.toml");
        assert!(matches!(result.unwrap_err(), RuntimeError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"not valid toml [[[").unwrap();

        let result = HostConfig::load(temp_file.path());
        assert!(matches!(result.unwrap_err(), RuntimeError::Toml(_)));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = HostConfig::default();
        config.host.log_level = "verbose".to_string();
        assert!(matches!(
            config.validate().unwrap_err(),
            RuntimeError::InvalidConfig(_)
        ));
    }

    #[test]
    fn test_default_config_content_parses() {
        let config: HostConfig = toml::from_str(&HostConfig::default_config_content()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.host.log_level, "info");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = HostConfig::default();
        config.host.log_level = "debug".to_string();

        let mut settings = ParserSettings::default();
        settings
            .options
            .insert("until".to_string(), toml::Value::String("|".to_string()));
        config.parsers.insert("GreedyParser".to_string(), settings);

        let serialized = toml::to_string(&config).unwrap();
        let deserialized: HostConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
