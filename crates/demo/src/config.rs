//! Demo configuration, read from the environment.

use std::path::PathBuf;

use stockbook_infra::DEFAULT_INVENTORY_PATH;
use stockbook_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const INVENTORY_PATH_ENV: &str = "STOCKBOOK_INVENTORY_PATH";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKBOOK_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub inventory_path: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take defaults; an
    /// unparsable threshold warns and takes the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(INVENTORY_PATH_ENV).filter(|p| !p.is_empty()) {
            config.inventory_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(e) => tracing::warn!(
                    value = %raw,
                    "{LOW_STOCK_THRESHOLD_ENV} is not an integer ({e}); using {DEFAULT_LOW_STOCK_THRESHOLD}"
                ),
            }
        }

        config
    }
}
