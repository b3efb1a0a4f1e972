//! Storage layer for cents
//!
//! Provides the ledger file store with atomic writes and the audit trail
//! that accompanies every mutation.

pub mod file_io;
pub mod transactions;

pub use file_io::write_atomic;
pub use transactions::{TransactionStore, HEADER_FIELDS, HEADER_LINE};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::CentsPaths;
use crate::error::CentsResult;

/// Main storage coordinator
pub struct Storage {
    paths: CentsPaths,
    pub transactions: TransactionStore,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: CentsPaths) -> CentsResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Turn the audit trail on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
        self
    }

    /// The audit logger, when auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Create the ledger file if it is absent or empty; returns true if it was created
    pub fn ensure_initialized(&self) -> CentsResult<bool> {
        if self.transactions.exists() {
            return Ok(false);
        }
        self.transactions.initialize()?;
        Ok(true)
    }

    /// Audit writes are best-effort: the ledger has already been saved when
    /// they run, so a failure is reported as a warning on stderr.
    pub fn log_create<T: Serialize>(
        &self,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::create(entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(|| AuditEntry::update(entity_id, entity_name, before, after, diff_summary))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(|| AuditEntry::delete(entity_id, entity_name, entity))
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry()) {
                eprintln!("Warning: change saved but not recorded in the audit log: {}", e);
            }
        }
    }
}
