//! User settings for cents
//!
//! Manages display preferences and the default transaction type.

use serde::{Deserialize, Serialize};

use super::paths::CentsPaths;
use crate::error::CentsError;
use crate::models::TransactionType;

/// User settings for cents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Type used by `add` when `--type` is omitted
    #[serde(default)]
    pub default_type: TransactionType,

    /// Currency symbol shown in front of amounts (never stored in the ledger)
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether list output is colored
    #[serde(default = "default_true")]
    pub color: bool,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_type: TransactionType::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            color: default_true(),
            audit_enabled: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CentsPaths) -> Result<Self, CentsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CentsError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CentsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Defaults stay in memory; cents never writes config.json
            Ok(Settings::default())
        }
    }
}
