// ⚙️ Configuration - Environment-driven settings
//
// TRIP_PLANNER_CURRENCY  currency unit shown next to amounts (default: RUB)
// TRIP_PLANNER_LOG       log filter used when RUST_LOG is unset (default: warn)
//
// A `.env` file in the working directory is loaded first, if present.

use std::env;

pub const CURRENCY_VAR: &str = "TRIP_PLANNER_CURRENCY";
pub const LOG_VAR: &str = "TRIP_PLANNER_LOG";

pub const DEFAULT_CURRENCY: &str = "RUB";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub currency_unit: String,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency_unit: DEFAULT_CURRENCY.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load from `.env` + process environment
    pub fn from_env() -> Self {
        // Missing .env is the normal case
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values fall back to the defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let read = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Config {
            currency_unit: read(CURRENCY_VAR, defaults.currency_unit),
            log_filter: read(LOG_VAR, defaults.log_filter),
        }
    }
}
