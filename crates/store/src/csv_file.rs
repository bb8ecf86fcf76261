use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faturas_core::{Amount, DomainError, InvoiceId, Period};
use faturas_ledger::{Invoice, InvoiceStatus};

use crate::{LedgerStore, StoreError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Flat row shape written to disk.
///
/// Everything is spelled out as text in canonical forms (ISO dates, cents
/// as integers) so the round trip is exact regardless of locale.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    id: String,
    supplier: String,
    number: Option<String>,
    period: String,
    due_date: Option<String>,
    amount_cents: u64,
    status: String,
    tax_id: Option<String>,
    service_code: Option<String>,
    purchase_order: Option<String>,
    ticket: Option<String>,
}

impl From<&Invoice> for CsvRow {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.to_string(),
            supplier: invoice.supplier.clone(),
            number: invoice.number.clone(),
            period: invoice.period.to_string(),
            due_date: invoice.due_date.map(|d| d.format(DATE_FORMAT).to_string()),
            amount_cents: invoice.amount.cents(),
            status: invoice.status.to_string(),
            tax_id: invoice.tax_id.clone(),
            service_code: invoice.service_code.clone(),
            purchase_order: invoice.purchase_order.clone(),
            ticket: invoice.ticket.clone(),
        }
    }
}

impl TryFrom<CsvRow> for Invoice {
    type Error = DomainError;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let id: InvoiceId = row.id.parse()?;
        let period: Period = row.period.parse()?;
        let due_date = row
            .due_date
            .map(|d| {
                NaiveDate::parse_from_str(&d, DATE_FORMAT)
                    .map_err(|e| DomainError::validation(format!("bad due date '{d}': {e}")))
            })
            .transpose()?;
        let status = match row.status.as_str() {
            "pending" => InvoiceStatus::Pending,
            "paid" => InvoiceStatus::Paid,
            other => {
                return Err(DomainError::validation(format!("unknown status '{other}'")));
            }
        };

        Ok(Invoice {
            id,
            supplier: row.supplier,
            number: row.number,
            period,
            due_date,
            amount: Amount::from_cents(row.amount_cents),
            status,
            tax_id: row.tax_id,
            service_code: row.service_code,
            purchase_order: row.purchase_order,
            ticket: row.ticket,
        })
    }
}

/// CSV-file store: one header row plus one row per invoice.
#[derive(Debug, Clone)]
pub struct CsvFileStore {
    path: PathBuf,
}

impl CsvFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(text: &str) -> Result<Vec<Invoice>, String> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut records = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| e.to_string())?;
            let invoice = Invoice::try_from(row).map_err(|e| e.to_string())?;
            records.push(invoice);
        }
        Ok(records)
    }
}

impl LedgerStore for CsvFileStore {
    fn load(&self) -> Vec<Invoice> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read ledger file; starting empty");
                return Vec::new();
            }
        };

        match Self::parse(&text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "malformed ledger file; starting empty");
                Vec::new()
            }
        }
    }

    fn replace_all(&self, records: &[Invoice]) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer
                .serialize(CsvRow::from(record))
                .map_err(|e| StoreError::Serialize(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        // Write-then-rename so a crash mid-write never corrupts the table.
        let tmp = self.path.with_extension("csv.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
