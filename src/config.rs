//! Configuration management for the trip planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelPlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure for the trip planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// External API endpoints and timeouts
    #[serde(default)]
    pub apis: ApisConfig,
    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the HTML form
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

/// External API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApisConfig {
    /// Base URL of the wttr.in weather service
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// Wikivoyage MediaWiki API endpoint
    #[serde(default = "default_wikivoyage_url")]
    pub wikivoyage_url: String,
    /// Pixabay image search endpoint
    #[serde(default = "default_pixabay_url")]
    pub pixabay_url: String,
    /// Pixabay API key (photos fall back to stock images without one)
    pub pixabay_key: Option<String>,
    /// Weather request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub weather_timeout_seconds: u32,
    /// City summary request timeout in seconds
    #[serde(default = "default_summary_timeout")]
    pub summary_timeout_seconds: u32,
    /// Photo search request timeout in seconds
    #[serde(default = "default_photo_timeout")]
    pub photo_timeout_seconds: u32,
}

/// Cache configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Number of city summaries kept in memory
    #[serde(default = "default_city_summary_capacity")]
    pub city_summary_capacity: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7860
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_weather_base_url() -> String {
    "https://wttr.in".to_string()
}

fn default_wikivoyage_url() -> String {
    "https://en.wikivoyage.org/w/api.php".to_string()
}

fn default_pixabay_url() -> String {
    "https://pixabay.com/api/".to_string()
}

fn default_weather_timeout() -> u32 {
    3
}

fn default_summary_timeout() -> u32 {
    5
}

fn default_photo_timeout() -> u32 {
    5
}

fn default_city_summary_capacity() -> usize {
    50
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ApisConfig {
    fn default() -> Self {
        Self {
            weather_base_url: default_weather_base_url(),
            wikivoyage_url: default_wikivoyage_url(),
            pixabay_url: default_pixabay_url(),
            pixabay_key: None,
            weather_timeout_seconds: default_weather_timeout(),
            summary_timeout_seconds: default_summary_timeout(),
            photo_timeout_seconds: default_photo_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            city_summary_capacity: default_city_summary_capacity(),
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

impl ApisConfig {
    #[must_use]
    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather_timeout_seconds.into())
    }

    #[must_use]
    pub fn summary_timeout(&self) -> Duration {
        Duration::from_secs(self.summary_timeout_seconds.into())
    }

    #[must_use]
    pub fn photo_timeout(&self) -> Duration {
        Duration::from_secs(self.photo_timeout_seconds.into())
    }
}

impl PlannerConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // e.g. TRIPPLANNER_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("TRIPPLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripplanner").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.port == 0 {
            self.server.port = default_port();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.apis.weather_base_url.is_empty() {
            self.apis.weather_base_url = default_weather_base_url();
        }
        if self.apis.wikivoyage_url.is_empty() {
            self.apis.wikivoyage_url = default_wikivoyage_url();
        }
        if self.apis.pixabay_url.is_empty() {
            self.apis.pixabay_url = default_pixabay_url();
        }
        if self.apis.weather_timeout_seconds == 0 {
            self.apis.weather_timeout_seconds = default_weather_timeout();
        }
        if self.apis.summary_timeout_seconds == 0 {
            self.apis.summary_timeout_seconds = default_summary_timeout();
        }
        if self.apis.photo_timeout_seconds == 0 {
            self.apis.photo_timeout_seconds = default_photo_timeout();
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
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        let timeouts = [
            ("Weather", self.apis.weather_timeout_seconds),
            ("City summary", self.apis.summary_timeout_seconds),
            ("Photo", self.apis.photo_timeout_seconds),
        ];
        for (name, seconds) in timeouts {
            if seconds > 60 {
                return Err(TravelPlannerError::config(format!(
                    "{name} API timeout cannot exceed 60 seconds"
                ))
                .into());
            }
        }

        if self.cache.city_summary_capacity == 0 {
            return Err(
                TravelPlannerError::config("City summary cache capacity must be at least 1").into(),
            );
        }

        if self.cache.city_summary_capacity > 10_000 {
            return Err(TravelPlannerError::config(
                "City summary cache capacity cannot exceed 10000 entries",
            )
            .into());
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelPlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelPlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let urls = [
            ("Weather", &self.apis.weather_base_url),
            ("Wikivoyage", &self.apis.wikivoyage_url),
            ("Pixabay", &self.apis.pixabay_url),
        ];
        for (name, url) in urls {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelPlannerError::config(format!(
                    "{name} API URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        if let Some(key) = &self.apis.pixabay_key {
            if key.trim().is_empty() {
                return Err(TravelPlannerError::config(
                    "Pixabay API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.apis.weather_base_url, "https://wttr.in");
        assert_eq!(config.apis.weather_timeout_seconds, 3);
        assert_eq!(config.apis.summary_timeout_seconds, 5);
        assert_eq!(config.cache.city_summary_capacity, 50);
        assert_eq!(config.logging.level, "info");
        assert!(config.apis.pixabay_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = PlannerConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = PlannerConfig::default();
        config.apis.weather_timeout_seconds = 500;
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));

        let mut config = PlannerConfig::default();
        config.cache.city_summary_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_non_http_url() {
        let mut config = PlannerConfig::default();
        config.apis.wikivoyage_url = "ftp://example.org".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Wikivoyage"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = PlannerConfig::default();
        config.server.port = 0;
        config.apis.weather_timeout_seconds = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.server.port, 7860);
        assert_eq!(config.apis.weather_timeout_seconds, 3);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 9000\n\n[cache]\ncity_summary_capacity = 10\n\n[apis]\npixabay_key = \"abc123\""
        )
        .unwrap();

        let config = PlannerConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cache.city_summary_capacity, 10);
        assert_eq!(config.apis.pixabay_key.as_deref(), Some("abc123"));
        assert_eq!(config.apis.weather_timeout_seconds, 3);
    }

    #[test]
    fn test_load_uses_user_config_or_defaults() {
        let config = PlannerConfig::load().unwrap();
        assert!(config.validate().is_ok());
        assert!(config.cache.city_summary_capacity > 0);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = PlannerConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("tripplanner"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
