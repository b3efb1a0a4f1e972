//! Audit logging for cents
//!
//! Every add, edit and delete is recorded with before/after snapshots of the
//! transaction in an append-only, line-delimited JSON log next to the ledger.
//!
//! - `AuditEntry`: one operation with timestamp, id and snapshots.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
