//! Path management for cents
//!
//! ## Path Resolution Order
//!
//! 1. `CENTS_HOME` environment variable (if set)
//! 2. `~/.cents` under the current user's home directory

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CentsError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "CENTS_HOME";

/// Manages all paths used by cents
#[derive(Debug, Clone)]
pub struct CentsPaths {
    /// Base directory for all cents data
    base_dir: PathBuf,
}

impl CentsPaths {
    /// Create a new CentsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CentsError> {
        let base_dir = match std::env::var(HOME_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CentsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.cents/ or the override)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger file
    pub fn transactions_file(&self) -> PathBuf {
        self.base_dir.join("transactions.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CentsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CentsError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, CentsError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| CentsError::Config("Could not determine home directory".into()))?;
    Ok(dirs.home_dir().join(".cents"))
}
