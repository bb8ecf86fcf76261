//! Process configuration from environment variables.

use faturas_ledger::DuplicatePolicy;
use faturas_store::{CsvFileStore, JsonFileStore, LedgerStore, MemoryStore};

/// Which medium backs the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// `FATURAS_ADDR`, default `0.0.0.0:8080`.
    pub bind_addr: String,
    /// `FATURAS_STORE`: `memory` | `json` | `csv`, default `json`.
    pub store_kind: StoreKind,
    /// `FATURAS_DATA`: ledger file path, default `faturas.json` / `faturas.csv`.
    pub data_path: Option<String>,
    /// `FATURAS_USERS`: `user:pass,user2:pass2`; empty leaves the gate open.
    pub users_spec: String,
    /// `FATURAS_ON_DUPLICATE`: `overwrite` (default) | `reject`.
    pub duplicate_policy: DuplicatePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("FATURAS_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let store_kind = match std::env::var("FATURAS_STORE").as_deref() {
            Ok("memory") => StoreKind::Memory,
            Ok("csv") => StoreKind::Csv,
            Ok("json") | Err(_) => StoreKind::Json,
            Ok(other) => {
                tracing::warn!("unknown FATURAS_STORE '{other}'; falling back to json");
                StoreKind::Json
            }
        };

        let users_spec = std::env::var("FATURAS_USERS").unwrap_or_else(|_| {
            tracing::warn!("FATURAS_USERS not set; running without a credential gate");
            String::new()
        });

        let duplicate_policy = match std::env::var("FATURAS_ON_DUPLICATE").as_deref() {
            Ok("reject") => DuplicatePolicy::Reject,
            Ok("overwrite") | Err(_) => DuplicatePolicy::Overwrite,
            Ok(other) => {
                tracing::warn!("unknown FATURAS_ON_DUPLICATE '{other}'; defaulting to overwrite");
                DuplicatePolicy::Overwrite
            }
        };

        Self {
            bind_addr,
            store_kind,
            data_path: std::env::var("FATURAS_DATA").ok(),
            users_spec,
            duplicate_policy,
        }
    }

    /// Construct the configured persistence backend.
    pub fn build_store(&self) -> Box<dyn LedgerStore> {
        match self.store_kind {
            StoreKind::Memory => Box::new(MemoryStore::new()),
            StoreKind::Json => {
                let path = self.data_path.clone().unwrap_or_else(|| "faturas.json".to_string());
                Box::new(JsonFileStore::new(path))
            }
            StoreKind::Csv => {
                let path = self.data_path.clone().unwrap_or_else(|| "faturas.csv".to_string());
                Box::new(CsvFileStore::new(path))
            }
        }
    }
}
