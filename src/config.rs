//! Configuration management for the `TripCraft` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings. The loaded
//! config is handed to the planner at construction time; there is no
//! process-wide mutable state.

use crate::TripCraftError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TripCraft` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCraftConfig {
    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// Overpass (map data) provider configuration
    #[serde(default)]
    pub overpass: OverpassConfig,
    /// Description generation configuration
    #[serde(default)]
    pub description: DescriptionConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default application settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Geocoding provider settings (open-meteo, no API key required)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout")]
    pub timeout_seconds: u32,
}

/// Overpass map-data provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Overpass interpreter endpoint
    #[serde(default = "default_overpass_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_overpass_timeout")]
    pub timeout_seconds: u32,
    /// Search radius around the destination in meters
    #[serde(default = "default_overpass_radius")]
    pub radius_meters: u32,
    /// Maximum results requested per query
    #[serde(default = "default_overpass_limit")]
    pub result_limit: u32,
}

/// Description generation settings (OpenRouter chat completions)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionConfig {
    /// OpenRouter API key; enrichment is skipped when absent
    pub api_key: Option<String>,
    /// Base URL for the completions API
    #[serde(default = "default_description_base_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_description_model")]
    pub model: String,
    /// Token budget per description
    #[serde(default = "default_description_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_description_timeout")]
    pub timeout_seconds: u32,
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

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Day count used when the request does not state one.
    /// `None` makes a missing day count a hard validation error.
    #[serde(default = "default_days")]
    pub default_days: Option<u32>,
    /// Number of hotels/restaurants shown alongside the itinerary
    #[serde(default = "default_listing_limit")]
    pub listing_limit: usize,
}

// Default value functions
fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_overpass_base_url() -> String {
    "https://overpass.kumi.systems/api/interpreter".to_string()
}

fn default_overpass_timeout() -> u32 {
    15
}

fn default_overpass_radius() -> u32 {
    50_000
}

fn default_overpass_limit() -> u32 {
    10
}

fn default_description_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_description_model() -> String {
    "mistralai/mistral-7b-instruct".to_string()
}

fn default_description_max_tokens() -> u32 {
    50
}

fn default_description_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_days() -> Option<u32> {
    Some(2)
}

fn default_listing_limit() -> usize {
    5
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_seconds: default_geocoding_timeout(),
        }
    }
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_overpass_base_url(),
            timeout_seconds: default_overpass_timeout(),
            radius_meters: default_overpass_radius(),
            result_limit: default_overpass_limit(),
        }
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_description_base_url(),
            model: default_description_model(),
            max_tokens: default_description_max_tokens(),
            timeout_seconds: default_description_timeout(),
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

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            default_days: default_days(),
            listing_limit: default_listing_limit(),
        }
    }
}

impl Default for TripCraftConfig {
    fn default() -> Self {
        Self {
            geocoding: GeocodingConfig::default(),
            overpass: OverpassConfig::default(),
            description: DescriptionConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl TripCraftConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // Add environment variable overrides with TRIPCRAFT_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRIPCRAFT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripCraftConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripcraft").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        // The geocoding and Overpass providers need no key; only the
        // optional description provider carries one.
        if let Some(api_key) = &self.description.api_key {
            if api_key.is_empty() {
                return Err(TripCraftError::config(
                    "Description API key cannot be empty if provided. Either remove it or provide a valid key."
                ).into());
            }

            if api_key.len() < 8 {
                return Err(TripCraftError::config(
                    "Description API key appears to be invalid (too short). Please check your API key."
                ).into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geocoding.timeout_seconds == 0 || self.geocoding.timeout_seconds > 120 {
            return Err(TripCraftError::config(
                "Geocoding timeout must be between 1 and 120 seconds",
            )
            .into());
        }

        if self.overpass.timeout_seconds == 0 || self.overpass.timeout_seconds > 120 {
            return Err(TripCraftError::config(
                "Overpass timeout must be between 1 and 120 seconds",
            )
            .into());
        }

        if self.description.timeout_seconds == 0 || self.description.timeout_seconds > 300 {
            return Err(TripCraftError::config(
                "Description timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.overpass.radius_meters == 0 || self.overpass.radius_meters > 500_000 {
            return Err(TripCraftError::config(
                "Overpass search radius must be between 1 and 500000 meters",
            )
            .into());
        }

        if self.overpass.result_limit == 0 || self.overpass.result_limit > 100 {
            return Err(TripCraftError::config(
                "Overpass result limit must be between 1 and 100",
            )
            .into());
        }

        if let Some(days) = self.defaults.default_days {
            if days == 0 || days > crate::planner::MAX_TRIP_DAYS {
                return Err(TripCraftError::config(format!(
                    "Default day count must be between 1 and {}",
                    crate::planner::MAX_TRIP_DAYS
                ))
                .into());
            }
        }

        if self.defaults.listing_limit == 0 || self.defaults.listing_limit > 50 {
            return Err(
                TripCraftError::config("Listing limit must be between 1 and 50").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TripCraftError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TripCraftError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("Geocoding", &self.geocoding.base_url),
            ("Overpass", &self.overpass.base_url),
            ("Description", &self.description.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TripCraftError::config(format!(
                    "{name} base URL must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}
