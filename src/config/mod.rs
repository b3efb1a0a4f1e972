//! Configuration module for cents
//!
//! This module provides configuration management including:
//! - Path resolution for the ledger, settings and audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CentsPaths;
pub use settings::Settings;
