//! Invoice ledger domain module.
//!
//! Owns the collection of invoice records, applies upsert/dedupe rules on
//! save, computes due-date classification and produces aggregate summaries
//! for display. Pure deterministic domain logic (no IO, no HTTP, no
//! storage); the current date is always passed in explicitly.

pub mod invoice;
pub mod ledger;
pub mod sla;
pub mod summary;

pub use invoice::{Invoice, InvoiceDraft, InvoiceStatus};
pub use ledger::{DuplicatePolicy, Ledger, UpsertIdentity, UpsertOutcome};
pub use sla::{classify, SlaClass, DUE_SOON_WINDOW_DAYS};
pub use summary::{summarize, BucketStat, LedgerFilter, SlaBreakdown, Summary};
