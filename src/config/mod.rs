//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `COSTEO_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use costeo::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("VAT rate: {}%", config.pricing.vat_rate_pct);
//! ```

mod error;
mod pricing;
mod schedule;

pub use error::{ConfigError, ValidationError};
pub use pricing::PricingConfig;
pub use schedule::ScheduleConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the costing engine.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Pricing configuration (VAT rate)
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Schedule reporting configuration (curve bucketing)
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COSTEO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COSTEO__PRICING__VAT_RATE_PCT=19` -> `pricing.vat_rate_pct = 19.0`
    /// - `COSTEO__SCHEDULE__WEEKLY_THRESHOLD_DAYS=180` -> `schedule.weekly_threshold_days = 180`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COSTEO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.pricing.validate()?;
        self.schedule.validate()?;
        Ok(())
    }
}
