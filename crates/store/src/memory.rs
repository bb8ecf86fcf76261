use std::sync::RwLock;

use faturas_ledger::Invoice;

use crate::{LedgerStore, StoreError};

/// In-memory store.
///
/// Backs the session-state dashboard variants and the test suites; records
/// live only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Invoice>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Vec<Invoice> {
        match self.records.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                tracing::warn!("memory store lock poisoned; loading empty record set");
                Vec::new()
            }
        }
    }

    fn replace_all(&self, records: &[Invoice]) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| StoreError::Serialize("memory store lock poisoned".to_string()))?;
        *guard = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use faturas_core::{Amount, InvoiceId, Period};
    use faturas_ledger::InvoiceStatus;

    fn sample() -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            supplier: "ACME".to_string(),
            number: Some("NF-42".to_string()),
            period: Period::new(2026, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 1, 20),
            amount: Amount::from_cents(12_345),
            status: InvoiceStatus::Pending,
            tax_id: None,
            service_code: None,
            purchase_order: None,
            ticket: None,
        }
    }

    #[test]
    fn starts_empty_and_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().is_empty());

        let records = vec![sample(), sample()];
        store.replace_all(&records).unwrap();
        assert_eq!(store.load(), records);
    }

    #[test]
    fn replace_all_is_wholesale() {
        let store = MemoryStore::new();
        store.replace_all(&[sample(), sample()]).unwrap();
        let shorter = vec![sample()];
        store.replace_all(&shorter).unwrap();
        assert_eq!(store.load(), shorter);
    }
}
