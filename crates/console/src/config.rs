//! Runtime configuration.

use stocktrack_products::DEFAULT_LOW_STOCK_THRESHOLD;

/// Environment variable overriding the low-stock threshold.
pub const LOW_STOCK_THRESHOLD_VAR: &str = "STOCKTRACK_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub low_stock_threshold: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset or invalid values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(threshold) if threshold > 0 => config.low_stock_threshold = threshold,
                _ => tracing::warn!(
                    value = %raw,
                    default = config.low_stock_threshold,
                    "{LOW_STOCK_THRESHOLD_VAR} must be a positive integer; using default"
                ),
            }
        }

        config
    }
}
