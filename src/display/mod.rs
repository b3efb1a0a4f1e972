//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including tables and colored amounts.

pub mod history;
pub mod transaction;

pub use history::format_audit_entries;
pub use transaction::{
    build_views, columns, format_transaction_details, format_transaction_table, AmountTone,
    DisplayOptions, TaggedAmount, TransactionView,
};
