use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use faturas_ledger::Invoice;

use crate::{LedgerStore, StoreError};

/// JSON-file store: one pretty-printed array of invoice records.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Vec<Invoice> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read ledger file; starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed ledger file; starting empty");
                Vec::new()
            }
        }
    }

    fn replace_all(&self, records: &[Invoice]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        // Write-then-rename so a crash mid-write never corrupts the table.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use faturas_core::{Amount, InvoiceId, Period};
    use faturas_ledger::InvoiceStatus;

    fn sample(cents: u64) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            supplier: "PALLEFORT COMERCIO".to_string(),
            number: Some("0001".to_string()),
            period: Period::new(2026, 2).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 2, 10),
            amount: Amount::from_cents(cents),
            status: InvoiceStatus::Paid,
            tax_id: Some("11.222.333/0001-44".to_string()),
            service_code: None,
            purchase_order: Some("PO-9".to_string()),
            ticket: None,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        let records = vec![sample(12_345), sample(99)];
        store.replace_all(&records).unwrap();
        assert_eq!(store.load(), records);
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn replace_all_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        store.replace_all(&[sample(1), sample(2)]).unwrap();
        let shorter = vec![sample(3)];
        store.replace_all(&shorter).unwrap();
        assert_eq!(store.load(), shorter);
    }
}
