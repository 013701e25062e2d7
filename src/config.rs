//! Configuration management for the bulletin generator
//!
//! Settings come from an optional `bollettino.toml` in the working
//! directory. A missing file means defaults: read `data.json`, write
//! `bollettino.txt`, random phrases.

use crate::BulletinError;
use anyhow::{Context, Result};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "bollettino.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletinConfig {
    /// Input and output files
    pub paths: PathsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Phrase selection settings
    pub bulletin: GenerationConfig,
}

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Forecast document (Open-Meteo daily JSON)
    #[serde(default = "default_input_path")]
    pub input: PathBuf,
    /// Bulletin text file, overwritten on every run
    #[serde(default = "default_output_path")]
    pub output: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or compact)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Phrase selection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible bulletins; random when absent
    pub seed: Option<u64>,
}

// Default value functions
fn default_input_path() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("bollettino.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input_path(),
            output: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl BulletinConfig {
    /// Load configuration from `bollettino.toml` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    /// Load configuration from the given file, defaults when it does not exist
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let mut builder = Config::builder();

        if config_path.exists() {
            builder = builder.add_source(
                File::from(config_path.to_path_buf())
                    .required(false)
                    .format(FileFormat::Toml),
            );
        }

        let settings = builder
            .build()
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: BulletinConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.paths.input.as_os_str().is_empty() {
            self.paths.input = default_input_path();
        }
        if self.paths.output.as_os_str().is_empty() {
            self.paths.output = default_output_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_paths()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_paths(&self) -> Result<()> {
        if self.paths.input == self.paths.output {
            return Err(BulletinError::config(format!(
                "Input and output must be different files, both are '{}'",
                self.paths.input.display()
            ))
            .into());
        }
        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(BulletinError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(BulletinError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = BulletinConfig::default();
        assert_eq!(config.paths.input, PathBuf::from("data.json"));
        assert_eq!(config.paths.output, PathBuf::from("bollettino.txt"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.bulletin.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = BulletinConfig::load_from_path(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("data.json"));
        assert!(config.bulletin.seed.is_none());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[paths]\noutput = \"out/bulletin.txt\"\n\n[bulletin]\nseed = 42\n",
        )
        .unwrap();

        let config = BulletinConfig::load_from_path(&path).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("data.json"));
        assert_eq!(config.paths.output, PathBuf::from("out/bulletin.txt"));
        assert_eq!(config.bulletin.seed, Some(42));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = BulletinConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = BulletinConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_same_input_and_output_rejected() {
        let mut config = BulletinConfig::default();
        config.paths.output = config.paths.input.clone();
        assert!(config.validate().unwrap_err().to_string().contains("different files"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = BulletinConfig::default();
        config.paths.input = PathBuf::new();
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.paths.input, PathBuf::from("data.json"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[paths\ninput = ").unwrap();

        assert!(BulletinConfig::load_from_path(&path).is_err());
    }

    #[test]
    fn test_validation_error_converts_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

        let err: BulletinError = BulletinConfig::load_from_path(&path).unwrap_err().into();
        assert!(matches!(err, BulletinError::Config { .. }));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid log level 'chatty'. Must be one of: error, warn, info, debug, trace"
        );
    }
}
