//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CANTEEN` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use canteen_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Catalog at {}", config.catalog.base_url);
//! ```

mod catalog;
mod database;
mod environment;
mod error;
mod logging;
mod matching;

pub use catalog::CatalogConfig;
pub use database::{DatabaseConfig, MAX_ORDER_POOL_SIZE};
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use matching::MatchingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    #[serde(default)]
    pub environment: Environment,

    /// Remote catalog service
    pub catalog: CatalogConfig,

    /// Order database; orders stay in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Catalog join behaviour
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CANTEEN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CANTEEN__CATALOG__BASE_URL=...` -> `catalog.base_url = ...`
    /// - `CANTEEN__MATCHING__VENDOR_NAME=case_insensitive` -> `matching.vendor_name`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CANTEEN")
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
        self.catalog.validate(&self.environment)?;
        database::validate_order_store(self.database.as_ref(), &self.environment)?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
