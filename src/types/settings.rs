use serde::{Deserialize, Serialize};

use super::errors::SettingsError;

/// Default dwell time before a visit counts as "recently used".
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Longest accepted dwell time. Anything above would credit almost nothing.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Tracker configuration, stored as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerSettings {
    /// Minimum time (milliseconds) a tab must stay active before its visit is credited.
    pub debounce_ms: u64,
    /// `tracing` filter directive used by the RPC binary when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_filter: "info".to_string(),
        }
    }
}

impl TrackerSettings {
    /// Rejects values the tracker cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(SettingsError::InvalidValue(format!(
                "debounce_ms must be at most {}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "log_filter cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
