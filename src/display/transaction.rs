//! Transaction display formatting
//!
//! Turns transactions into display-bound views: amounts are tagged with a tone
//! from the transaction type, then projected onto the compact or verbose
//! column set and rendered as a table. Nothing here is fed back into the
//! ledger.

use chrono::format::{Item, StrftimeItems};
use crossterm::style::Stylize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionId, TransactionType};
use crate::storage::HEADER_FIELDS;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

const VERBOSE_COLUMNS: &[&str] = &HEADER_FIELDS;
const COMPACT_COLUMNS: &[&str] = &["Id", "Date", "Description", "Amount"];

/// Color tone attached to an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountTone {
    /// Money going out
    Warning,
    /// Money coming in
    Positive,
}

impl From<TransactionType> for AmountTone {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Expense => Self::Warning,
            TransactionType::Income => Self::Positive,
        }
    }
}

/// Formatted amount text plus the tone it should be shown in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedAmount {
    pub text: String,
    pub tone: AmountTone,
}

impl TaggedAmount {
    pub fn new(amount: Money, kind: TransactionType, symbol: &str) -> Self {
        Self {
            text: amount.format_with_symbol(symbol),
            tone: kind.into(),
        }
    }

    /// Render with ANSI color when `color` is set
    pub fn render(&self, color: bool) -> String {
        if !color {
            return self.text.clone();
        }
        match self.tone {
            AmountTone::Warning => self.text.clone().red().to_string(),
            AmountTone::Positive => self.text.clone().green().to_string(),
        }
    }
}

/// How transactions should be rendered
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Include the Type column
    pub verbose: bool,
    /// Emit ANSI colors
    pub color: bool,
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            color: false,
            currency_symbol: "$".into(),
            date_format: FALLBACK_DATE_FORMAT.into(),
        }
    }
}

impl DisplayOptions {
    /// Build options from the user's settings
    pub fn from_settings(settings: &Settings, color: bool) -> Self {
        Self {
            verbose: false,
            color: color && settings.color,
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    /// Same options with the verbose flag set
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Format a date, falling back to ISO when the configured format is invalid
    pub fn format_date(&self, date: chrono::NaiveDate) -> String {
        let valid = !StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        let format = if valid {
            self.date_format.as_str()
        } else {
            FALLBACK_DATE_FORMAT
        };
        date.format(format).to_string()
    }
}

/// One display row. `kind` is only present in verbose mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionView {
    pub id: TransactionId,
    pub date: String,
    pub description: String,
    pub amount: TaggedAmount,
    pub kind: Option<TransactionType>,
}

impl TransactionView {
    /// Cell values in column order
    pub fn cells(&self, color: bool) -> Vec<String> {
        let mut cells = vec![
            self.id.to_string(),
            self.date.clone(),
            self.description.clone(),
            self.amount.render(color),
        ];
        if let Some(kind) = self.kind {
            cells.push(kind.to_string());
        }
        cells
    }
}

/// Column headers for the chosen mode
pub fn columns(verbose: bool) -> &'static [&'static str] {
    if verbose {
        VERBOSE_COLUMNS
    } else {
        COMPACT_COLUMNS
    }
}

/// Tag every amount, then project onto the chosen column set
pub fn build_views(transactions: &[Transaction], options: &DisplayOptions) -> Vec<TransactionView> {
    transactions
        .iter()
        .map(|txn| TransactionView {
            id: txn.id,
            date: options.format_date(txn.date),
            description: txn.description.clone(),
            amount: TaggedAmount::new(txn.amount, txn.kind, &options.currency_symbol),
            kind: options.verbose.then_some(txn.kind),
        })
        .collect()
}

/// Render transactions as a table followed by a row count
pub fn format_transaction_table(transactions: &[Transaction], options: &DisplayOptions) -> String {
    let mut builder = Builder::default();

    builder.push_record(columns(options.verbose).iter().map(|&name| {
        if options.color {
            name.bold().to_string()
        } else {
            name.to_string()
        }
    }));

    for view in build_views(transactions, options) {
        builder.push_record(view.cells(options.color));
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{}\n{}\n", table, count_label(transactions.len()))
}

/// Multi-line details for a single transaction (used after add/edit/delete)
pub fn format_transaction_details(txn: &Transaction, options: &DisplayOptions) -> String {
    let amount = TaggedAmount::new(txn.amount, txn.kind, &options.currency_symbol);

    let mut output = String::new();
    output.push_str(&format!("  ID:          {}\n", txn.id));
    output.push_str(&format!("  Date:        {}\n", options.format_date(txn.date)));
    output.push_str(&format!("  Description: {}\n", txn.description));
    output.push_str(&format!("  Amount:      {}\n", amount.render(options.color)));
    output.push_str(&format!("  Type:        {}\n", txn.kind));
    output
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 transaction".to_string()
    } else {
        format!("{} transactions", count)
    }
}
