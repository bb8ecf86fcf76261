//! Request/response DTOs and JSON mapping helpers.
//!
//! Requests arrive form-shaped: amounts as decimal text, periods as
//! `MM/YYYY`, statuses as lowercase words. Parsing into domain types
//! happens here so handlers only ever see validated drafts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faturas_core::{Amount, DomainError, DomainResult, Period};
use faturas_ledger::{classify, Invoice, InvoiceDraft, InvoiceStatus, LedgerFilter, SlaClass};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct InvoiceRequest {
    pub supplier: String,
    pub number: Option<String>,
    /// `MM/YYYY`; derived from the due date when omitted.
    pub period: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub due_date: Option<NaiveDate>,
    /// Decimal text, e.g. `"1234.56"`.
    pub amount: String,
    /// `pending` (default) or `paid`.
    pub status: Option<String>,
    pub tax_id: Option<String>,
    pub service_code: Option<String>,
    pub purchase_order: Option<String>,
    pub ticket: Option<String>,
}

impl InvoiceRequest {
    pub fn into_draft(self) -> DomainResult<InvoiceDraft> {
        let amount: Amount = self.amount.parse()?;
        let period = self.period.as_deref().map(str::parse::<Period>).transpose()?;
        let status = match self.status.as_deref() {
            None | Some("pending") => InvoiceStatus::Pending,
            Some("paid") => InvoiceStatus::Paid,
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "status must be pending or paid, got '{other}'"
                )));
            }
        };

        Ok(InvoiceDraft {
            supplier: self.supplier,
            number: self.number,
            period,
            due_date: self.due_date,
            amount,
            status,
            tax_id: self.tax_id,
            service_code: self.service_code,
            purchase_order: self.purchase_order,
            ticket: self.ticket,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterSupplierRequest {
    pub name: String,
    pub tax_id: Option<String>,
    #[serde(default)]
    pub duplicate_exempt: bool,
}

/// Query-string filter on list and summary endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub supplier: Option<String>,
    pub status: Option<String>,
    pub sla: Option<String>,
}

impl FilterParams {
    pub fn into_filter(self) -> DomainResult<LedgerFilter> {
        let status = match self.status.as_deref() {
            None => None,
            Some("pending") => Some(InvoiceStatus::Pending),
            Some("paid") => Some(InvoiceStatus::Paid),
            Some(other) => {
                return Err(DomainError::validation(format!(
                    "status must be pending or paid, got '{other}'"
                )));
            }
        };
        let sla = self.sla.as_deref().map(parse_sla).transpose()?;
        Ok(LedgerFilter {
            supplier: self.supplier,
            status,
            sla,
        })
    }
}

fn parse_sla(s: &str) -> DomainResult<SlaClass> {
    match s {
        "overdue" => Ok(SlaClass::Overdue),
        "due-soon" => Ok(SlaClass::DueSoon),
        "on-time" => Ok(SlaClass::OnTime),
        "done" => Ok(SlaClass::Done),
        other => Err(DomainError::validation(format!(
            "sla must be one of: overdue, due-soon, on-time, done; got '{other}'"
        ))),
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// One record as rendered in tables/cards: every stored field plus the
/// classification recomputed against `today`.
#[derive(Debug, Serialize)]
pub struct InvoiceView {
    pub id: String,
    pub supplier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Canonical decimal text (`1234.56`).
    pub amount: String,
    pub amount_cents: u64,
    pub status: String,
    pub sla: SlaClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
}

impl InvoiceView {
    pub fn from_record(record: &Invoice, today: NaiveDate) -> Self {
        Self {
            id: record.id.to_string(),
            supplier: record.supplier.clone(),
            number: record.number.clone(),
            period: record.period.to_string(),
            due_date: record.due_date,
            amount: record.amount.to_string(),
            amount_cents: record.amount.cents(),
            status: record.status.to_string(),
            sla: classify(record.status, record.due_date, today),
            tax_id: record.tax_id.clone(),
            service_code: record.service_code.clone(),
            purchase_order: record.purchase_order.clone(),
            ticket: record.ticket.clone(),
        }
    }
}

pub fn views(records: &[Invoice], today: NaiveDate) -> Vec<InvoiceView> {
    records
        .iter()
        .map(|r| InvoiceView::from_record(r, today))
        .collect()
}
