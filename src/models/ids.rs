//! Transaction identifier
//!
//! Ids are positional: the transaction at 1-based position `n` in the ledger
//! file has id `n`. They are recomputed after every add or delete.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Dense, 1-based transaction id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(NonZeroU32);

impl TransactionId {
    /// Id for the transaction stored at the given 0-based index
    pub fn from_position(index: usize) -> Self {
        let value = u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .and_then(NonZeroU32::new)
            .unwrap_or(NonZeroU32::MAX);
        Self(value)
    }

    /// Create an id from a raw value, `None` for zero
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    /// Get the raw value
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        // Accept the "#3" form used in confirmation output
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits
            .parse::<NonZeroU32>()
            .map(Self)
            .map_err(|_| IdParseError(s.to_string()))
    }
}

/// Error returned when an id is not a positive integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdParseError(pub String);

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid id '{}': expected a positive integer", self.0)
    }
}

impl std::error::Error for IdParseError {}
