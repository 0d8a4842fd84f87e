//! Engine configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Report cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Reporting configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Currency reports are denominated in.
    #[serde(default = "default_currency")]
    pub currency: Currency,
    /// Number of periods in a trailing series.
    #[serde(default = "default_series_periods")]
    pub series_periods: usize,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            series_periods: default_series_periods(),
        }
    }
}

fn default_currency() -> Currency {
    Currency::Brl
}

fn default_series_periods() -> usize {
    12
}

/// Report cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached reports.
    #[serde(default = "default_max_entries")]
    pub max_entries: u64,
    /// Time-to-live for cached reports in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_max_entries() -> u64 {
    100
}

fn default_ttl_secs() -> u64 {
    300 // 5 minutes
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("METALGEST").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
