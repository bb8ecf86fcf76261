use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faturas_core::{Amount, DomainError, DomainResult, InvoiceId, Period};

/// Invoice status lifecycle: pending until the desk marks it paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, InvoiceStatus::Paid)
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InvoiceStatus::Pending => write!(f, "pending"),
            InvoiceStatus::Paid => write!(f, "paid"),
        }
    }
}

/// One purchase-invoice record.
///
/// The SLA bucket is never stored here; it depends on the current date and
/// is recomputed on every read (see [`crate::sla::classify`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub supplier: String,
    /// Invoice number as printed by the supplier; inert.
    pub number: Option<String>,
    /// Competency month the invoice is attributed to.
    pub period: Period,
    pub due_date: Option<NaiveDate>,
    pub amount: Amount,
    pub status: InvoiceStatus,
    // Inert pass-through attributes some dashboard variants carry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket: Option<String>,
}

/// Field set submitted by the presentation layer for a new or edited record.
///
/// Validated into an [`Invoice`] before it can enter the ledger; `amount`
/// is non-negative by type, so the only checks left are the supplier name
/// and the period/due-date agreement callers opted into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub supplier: String,
    pub number: Option<String>,
    /// Explicit competency; when absent it is derived from the due date.
    pub period: Option<Period>,
    pub due_date: Option<NaiveDate>,
    pub amount: Amount,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub service_code: Option<String>,
    #[serde(default)]
    pub purchase_order: Option<String>,
    #[serde(default)]
    pub ticket: Option<String>,
}

impl InvoiceDraft {
    /// Validation constructor: turn the submitted fields into a record.
    pub fn into_invoice(self, id: InvoiceId) -> DomainResult<Invoice> {
        let supplier = self.supplier.trim().to_string();
        if supplier.is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }

        let period = match (self.period, self.due_date) {
            (Some(p), _) => p,
            (None, Some(due)) => Period::from_date(due),
            (None, None) => {
                return Err(DomainError::validation(
                    "either a period or a due date is required",
                ));
            }
        };

        Ok(Invoice {
            id,
            supplier,
            number: self.number.filter(|n| !n.trim().is_empty()),
            period,
            due_date: self.due_date,
            amount: self.amount,
            status: self.status,
            tax_id: self.tax_id,
            service_code: self.service_code,
            purchase_order: self.purchase_order,
            ticket: self.ticket,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(supplier: &str) -> InvoiceDraft {
        InvoiceDraft {
            supplier: supplier.to_string(),
            number: None,
            period: Some("01/2026".parse().unwrap()),
            due_date: None,
            amount: Amount::from_cents(10_000),
            status: InvoiceStatus::Pending,
            tax_id: None,
            service_code: None,
            purchase_order: None,
            ticket: None,
        }
    }

    #[test]
    fn rejects_empty_supplier() {
        let err = draft("  ").into_invoice(InvoiceId::new()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn derives_period_from_due_date_when_absent() {
        let mut d = draft("ACME");
        d.period = None;
        d.due_date = NaiveDate::from_ymd_opt(2026, 3, 10);
        let invoice = d.into_invoice(InvoiceId::new()).unwrap();
        assert_eq!(invoice.period, "03/2026".parse().unwrap());
    }

    #[test]
    fn requires_period_or_due_date() {
        let mut d = draft("ACME");
        d.period = None;
        d.due_date = None;
        assert!(d.into_invoice(InvoiceId::new()).is_err());
    }

    #[test]
    fn blank_invoice_number_is_dropped() {
        let mut d = draft("ACME");
        d.number = Some("  ".to_string());
        let invoice = d.into_invoice(InvoiceId::new()).unwrap();
        assert_eq!(invoice.number, None);
    }

    #[test]
    fn json_round_trip_preserves_every_field() {
        let mut d = draft("ACME");
        d.due_date = NaiveDate::from_ymd_opt(2026, 1, 20);
        d.tax_id = Some("12.345.678/0001-90".to_string());
        let invoice = d.into_invoice(InvoiceId::new()).unwrap();

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(invoice, back);
    }
}
