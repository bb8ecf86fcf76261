//! Persistence collaborators for the invoice ledger.
//!
//! The contract is deliberately whole-table: `load` returns every record,
//! `replace_all` rewrites every record. The ledger does not care which
//! medium backs it, only that dates and amounts survive the text round
//! trip. Missing or malformed data loads as an empty record set (the data
//! is low-stakes and recoverable by re-entry), so `load` is infallible.

pub mod csv_file;
pub mod json_file;
pub mod memory;

use faturas_ledger::Invoice;
use thiserror::Error;

/// Storage-layer error (write path only; the read path degrades to empty).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(String),
}

/// Full-table load/replace contract between the ledger and its backing
/// medium.
pub trait LedgerStore: Send + Sync {
    /// Load every persisted record.
    ///
    /// A missing file or malformed payload is logged and treated as an
    /// empty record set, never a fatal error.
    fn load(&self) -> Vec<Invoice>;

    /// Persist the whole record set, replacing whatever was there.
    fn replace_all(&self, records: &[Invoice]) -> Result<(), StoreError>;
}

pub use csv_file::CsvFileStore;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
