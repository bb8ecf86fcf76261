//! `faturas-core` — domain foundation building blocks.
//!
//! Pure domain primitives shared by the ledger, supplier and storage crates:
//! the error model, typed identifiers and the two value types every invoice
//! carries (`Amount`, `Period`). No IO, no HTTP, no storage.

pub mod error;
pub mod id;
pub mod money;
pub mod period;

pub use error::{DomainError, DomainResult};
pub use id::InvoiceId;
pub use money::Amount;
pub use period::Period;
