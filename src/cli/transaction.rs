//! Transaction CLI commands
//!
//! Implements the add, list, delete and edit commands. Every argument is
//! parsed and validated here, before the ledger file is touched.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table, DisplayOptions};
use crate::error::CentsResult;
use crate::services::{
    parse_amount, parse_id, parse_type, EditOutcome, LedgerService, Listing, NewTransaction,
    TransactionFilter, TransactionUpdate,
};
use crate::storage::Storage;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction dated today
    Add {
        /// What the transaction was for
        description: String,
        /// Amount (e.g., "42.50" or "100")
        amount: String,
        /// expense or income (defaults to the configured default type)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// List transactions
    List {
        /// Only show expense or income transactions
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Include the Type column
        #[arg(short, long)]
        verbose: bool,
    },
    /// Delete a transaction; later transactions are renumbered
    Delete {
        /// Transaction ID
        id: String,
    },
    /// Change the description, amount or type of a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New description
        #[arg(short, long = "desc")]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type (expense or income)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    display: &DisplayOptions,
    cmd: TransactionCommands,
) -> CentsResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            kind,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = match kind {
                Some(kind) => parse_type(&kind)?,
                None => settings.default_type,
            };
            let input = NewTransaction::new(&description, amount, kind)?;

            let txn = service.add(input)?;

            println!("Added transaction:");
            print!("{}", format_transaction_details(&txn, display));
        }

        TransactionCommands::List { kind, verbose } => {
            let mut filter = TransactionFilter::new();
            if let Some(kind) = &kind {
                filter = filter.kind(parse_type(kind)?);
            }

            match service.list(filter)? {
                Listing::Empty => {
                    println!("No transactions yet.");
                    println!("Run 'cents add <description> <amount>' to record one.");
                }
                Listing::Transactions(rows) if rows.is_empty() => {
                    let kind = filter.kind.map(|k| k.to_string()).unwrap_or_default();
                    println!("No {} transactions found.", kind);
                }
                Listing::Transactions(rows) => {
                    let options = display.clone().verbose(verbose);
                    print!("{}", format_transaction_table(&rows, &options));
                }
            }
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;

            let removed = service.delete(id)?;

            println!("Deleted transaction:");
            print!("{}", format_transaction_details(&removed, display));
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
        } => {
            let id = parse_id(&id)?;

            let mut update = TransactionUpdate::new();
            if let Some(description) = &description {
                update = update.description(description)?;
            }
            if let Some(amount) = &amount {
                update = update.amount(parse_amount(amount)?)?;
            }
            if let Some(kind) = &kind {
                update = update.kind(parse_type(kind)?);
            }

            match service.edit(id, update)? {
                EditOutcome::NoChanges => {
                    println!("No fields to update. Use --desc, --amount or --type.");
                }
                EditOutcome::Updated(txn) => {
                    println!("Updated transaction:");
                    print!("{}", format_transaction_details(&txn, display));
                }
            }
        }
    }

    Ok(())
}
