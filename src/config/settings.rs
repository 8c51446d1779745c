//! User settings for Teller
//!
//! Manages user preferences: the bank name shown in the shell, the currency
//! symbol used for display, and the default interest rate offered when
//! creating savings accounts. Ledger data itself is never persisted; only
//! these preferences live on disk.

use serde::{Deserialize, Serialize};

use super::paths::TellerPaths;
use crate::error::TellerError;

/// User settings for Teller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Bank name displayed by the shell
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default annual interest rate offered for new savings accounts
    #[serde(default = "default_interest_rate")]
    pub default_interest_rate: f64,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_bank_name() -> String {
    "Universal Banking System".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_interest_rate() -> f64 {
    0.01
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bank_name: default_bank_name(),
            currency_symbol: default_currency(),
            default_interest_rate: default_interest_rate(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TellerPaths) -> Result<Self, TellerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TellerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TellerError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TellerPaths) -> Result<(), TellerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TellerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| TellerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
