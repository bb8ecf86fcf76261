//! HTTP presentation adapter for the invoice ledger.
//!
//! Explicit command handlers (submit form, click edit, click delete), each
//! returning the updated state, decoupled from any rendering technology.

pub mod app;
pub mod config;
pub mod middleware;
