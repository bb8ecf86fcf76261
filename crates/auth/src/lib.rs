//! Rudimentary credential gate.
//!
//! A static username/password table plus opaque in-memory session tokens.
//! Deliberately minimal: the data behind the gate is a handful of invoice
//! rows, not secrets. The ledger itself never sees any of this.

pub mod credentials;
pub mod session;

pub use credentials::{CredentialTable, Principal};
pub use session::SessionStore;
