//! History CLI command
//!
//! Shows the most recent entries of the audit log.

use crate::display::format_audit_entries;
use crate::error::CentsResult;
use crate::storage::Storage;

/// Print the last `limit` audit entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> CentsResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled (audit_enabled is false in config.json).");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    print!("{}", format_audit_entries(&entries));
    Ok(())
}
