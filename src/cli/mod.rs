//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod history;
pub mod transaction;

pub use history::handle_history_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
