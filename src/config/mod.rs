//! Config - Tunables for the catalog core, loadable from JSON.
//!
//! Every field has a default, so `{}` is a valid configuration.
//!
//! ```ignore
//! let config = CatalogConfig::from_json_str(r#"{ "page_size": 12 }"#)?;
//! assert_eq!(config.search_debounce(), Duration::from_millis(500));
//! ```

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, DEFAULT_PAGE_SIZE, DEFAULT_RATING_RANGE, DEFAULT_YEAR_RANGE};

/// Longest debounce window accepted from configuration.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "config parse error: {}", message),
            ConfigError::Invalid(message) => write!(f, "invalid config: {}", message),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: usize,
    /// Quiet period before typed search text is applied.
    pub search_debounce_ms: u64,
    /// How long the catalog reports loading after a filter change.
    pub settle_debounce_ms: u64,
    /// Quiet period for the review text field.
    pub review_debounce_ms: u64,
    pub year_bounds: (i32, i32),
    pub rating_bounds: (f64, f64),
    pub fixture_seed: u64,
    pub fixture_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: 500,
            settle_debounce_ms: 500,
            review_debounce_ms: 300,
            year_bounds: DEFAULT_YEAR_RANGE,
            rating_bounds: DEFAULT_RATING_RANGE,
            fixture_seed: 42,
            fixture_count: 20,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CatalogConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()));
        }

        for (name, value) in [
            ("search_debounce_ms", self.search_debounce_ms),
            ("settle_debounce_ms", self.settle_debounce_ms),
            ("review_debounce_ms", self.review_debounce_ms),
        ] {
            if value == 0 || value > MAX_DEBOUNCE_MS {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within 1..={} (got {})",
                    name, MAX_DEBOUNCE_MS, value
                )));
            }
        }

        if self.year_bounds.0 > self.year_bounds.1 {
            return Err(ConfigError::Invalid(format!(
                "year_bounds out of order: {:?}",
                self.year_bounds
            )));
        }

        let (low, high) = self.rating_bounds;
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(ConfigError::Invalid(format!(
                "rating_bounds out of order: {:?}",
                self.rating_bounds
            )));
        }

        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn settle_debounce(&self) -> Duration {
        Duration::from_millis(self.settle_debounce_ms)
    }

    pub fn review_debounce(&self) -> Duration {
        Duration::from_millis(self.review_debounce_ms)
    }

    /// The unrestricted filter state for these bounds.
    pub fn default_filters(&self) -> FilterState {
        FilterState::with_bounds(self.year_bounds, self.rating_bounds)
    }
}
