//! Ledger file storage
//!
//! The whole ledger lives in one comma-delimited file. The first record is
//! always the fixed header, followed by one record per transaction in
//! storage order. Every save rewrites the whole file.
//!
//! There is no locking: two processes writing at once race, and the last
//! writer wins.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};

use crate::error::{CentsError, CentsResult};
use crate::models::Transaction;

use super::file_io::{file_has_content, write_atomic};

/// Column names, in file order
pub const HEADER_FIELDS: [&str; 5] = ["Id", "Date", "Description", "Amount", "Type"];

/// Header record exactly as written to disk
pub const HEADER_LINE: &str = "Id, Date, Description, Amount, Type";

/// Reads and writes the full transaction set to a single ledger file
#[derive(Debug, Clone)]
pub struct TransactionStore {
    path: PathBuf,
}

impl TransactionStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the ledger file exists and is non-empty
    pub fn exists(&self) -> bool {
        file_has_content(&self.path)
    }

    /// Load every transaction in storage order
    ///
    /// Fails with `StorageMissing` when the file is absent or empty.
    pub fn load(&self) -> CentsResult<Vec<Transaction>> {
        if !self.exists() {
            return Err(CentsError::StorageMissing(self.path.clone()));
        }

        let file = File::open(&self.path).map_err(|e| {
            CentsError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let mut record = StringRecord::new();
        if !reader.read_record(&mut record)? {
            return Err(CentsError::Storage(format!(
                "{} has no header record",
                self.path.display()
            )));
        }
        if !record.iter().eq(HEADER_FIELDS.iter().copied()) {
            return Err(CentsError::Storage(format!(
                "Unexpected header in {}: '{}'",
                self.path.display(),
                record.iter().collect::<Vec<_>>().join(", ")
            )));
        }

        let mut transactions = Vec::new();
        while reader.read_record(&mut record)? {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            let txn: Transaction = record.deserialize(None).map_err(|e| {
                CentsError::Csv(format!(
                    "Bad record on line {} of {}: {}",
                    line,
                    self.path.display(),
                    e
                ))
            })?;
            transactions.push(txn);
        }

        Ok(transactions)
    }

    /// Reset the ledger file to the header record only
    ///
    /// Destructive: any existing transactions are discarded.
    pub fn initialize(&self) -> CentsResult<()> {
        self.save(&[])
    }

    /// Load the ledger, creating a header-only file first if it is absent or empty
    pub fn load_or_init(&self) -> CentsResult<Vec<Transaction>> {
        match self.load() {
            Err(err) if err.is_storage_missing() => {
                self.initialize()?;
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Overwrite the ledger file with the header followed by `transactions`
    pub fn save(&self, transactions: &[Transaction]) -> CentsResult<()> {
        write_atomic(&self.path, &encode(transactions)?)
    }
}

/// Encode the full ledger file contents
fn encode(transactions: &[Transaction]) -> CentsResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(HEADER_LINE.len() + 1 + transactions.len() * 48);
    buf.extend_from_slice(HEADER_LINE.as_bytes());
    buf.push(b'\n');

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut buf);
        for txn in transactions {
            writer.serialize(txn)?;
        }
        writer.flush()?;
    }

    Ok(buf)
}
