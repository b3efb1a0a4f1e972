//! Audit log display formatting

use crate::audit::AuditEntry;

/// Format audit entries, one per line, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded yet.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} {} #{}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.operation,
            entry.entity_id
        ));
        if let Some(name) = &entry.entity_name {
            output.push_str(&format!(" {}", name));
        }
        if let Some(diff) = &entry.diff_summary {
            output.push_str(&format!(" ({})", diff));
        }
        output.push('\n');
    }
    output
}
