//! Business logic layer for cents
//!
//! Services sit between the CLI and storage: they validate input, apply
//! ledger rules and record the audit trail.

pub mod ledger;

pub use ledger::{
    parse_amount, parse_id, parse_type, renumber, EditOutcome, LedgerService, Listing,
    NewTransaction, TransactionFilter, TransactionUpdate,
};
