//! Suppliers domain module (fornecedores).
//!
//! Open enumeration of vendors invoices are billed against, plus the
//! duplicate-exemption allow-list the ledger consults on upsert.

pub mod registry;

pub use registry::{Supplier, SupplierRegistry};
