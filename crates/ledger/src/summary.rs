//! Aggregate summaries for the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use faturas_core::Amount;

use crate::invoice::{Invoice, InvoiceStatus};
use crate::sla::{classify, SlaClass};

/// Optional pre-filter applied before aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFilter {
    /// Case-insensitive supplier name match.
    pub supplier: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub sla: Option<SlaClass>,
}

impl LedgerFilter {
    pub fn matches(&self, record: &Invoice, today: NaiveDate) -> bool {
        if let Some(supplier) = &self.supplier {
            if !record.supplier.eq_ignore_ascii_case(supplier) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        if let Some(sla) = self.sla {
            if classify(record.status, record.due_date, today) != sla {
                return false;
            }
        }
        true
    }
}

/// Count and share of one SLA bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketStat {
    pub count: usize,
    /// Share of the filtered set, percent rounded to one decimal place;
    /// 0 when the filtered set is empty.
    pub percent: f64,
}

/// Per-bucket breakdown of the filtered record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaBreakdown {
    pub overdue: BucketStat,
    pub due_soon: BucketStat,
    pub on_time: BucketStat,
    pub done: BucketStat,
}

impl SlaBreakdown {
    pub fn bucket(&self, class: SlaClass) -> BucketStat {
        match class {
            SlaClass::Overdue => self.overdue,
            SlaClass::DueSoon => self.due_soon,
            SlaClass::OnTime => self.on_time,
            SlaClass::Done => self.done,
        }
    }
}

/// Dashboard aggregates for one filtered view of the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub invoice_count: usize,
    pub pending_count: usize,
    pub paid_count: usize,
    /// Total amount of done (paid) records.
    pub total_paid: Amount,
    /// Total amount of not-done records.
    pub total_open: Amount,
    pub grand_total: Amount,
    pub sla: SlaBreakdown,
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}

/// Aggregate the record set, optionally pre-filtered.
///
/// Empty input (or a filter matching nothing) yields zero totals and zero
/// percentages; there is no division by the empty count.
pub fn summarize(records: &[Invoice], filter: &LedgerFilter, today: NaiveDate) -> Summary {
    let mut summary = Summary::default();
    let mut counts = [0usize; 4];

    for record in records.iter().filter(|r| filter.matches(r, today)) {
        summary.invoice_count += 1;
        summary.grand_total = summary.grand_total.saturating_add(record.amount);

        if record.status.is_done() {
            summary.paid_count += 1;
            summary.total_paid = summary.total_paid.saturating_add(record.amount);
        } else {
            summary.pending_count += 1;
            summary.total_open = summary.total_open.saturating_add(record.amount);
        }

        let class = classify(record.status, record.due_date, today);
        counts[class as usize] += 1;
    }

    let total = summary.invoice_count;
    let stat = |class: SlaClass| BucketStat {
        count: counts[class as usize],
        percent: percent(counts[class as usize], total),
    };
    summary.sla = SlaBreakdown {
        overdue: stat(SlaClass::Overdue),
        due_soon: stat(SlaClass::DueSoon),
        on_time: stat(SlaClass::OnTime),
        done: stat(SlaClass::Done),
    };

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use faturas_core::{InvoiceId, Period};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn invoice(supplier: &str, cents: u64, status: InvoiceStatus, due_offset: Option<i64>) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            supplier: supplier.to_string(),
            number: None,
            period: Period::new(2026, 1).unwrap(),
            due_date: due_offset.map(|d| today() + Duration::days(d)),
            amount: Amount::from_cents(cents),
            status,
            tax_id: None,
            service_code: None,
            purchase_order: None,
            ticket: None,
        }
    }

    #[test]
    fn empty_set_yields_all_zeros() {
        let summary = summarize(&[], &LedgerFilter::default(), today());
        assert_eq!(summary.invoice_count, 0);
        assert_eq!(summary.grand_total, Amount::ZERO);
        assert_eq!(summary.total_paid, Amount::ZERO);
        assert_eq!(summary.total_open, Amount::ZERO);
        assert_eq!(summary.sla.overdue.percent, 0.0);
        assert_eq!(summary.sla.done.percent, 0.0);
    }

    #[test]
    fn splits_totals_between_done_and_open() {
        let records = vec![
            invoice("ACME", 10_000, InvoiceStatus::Pending, Some(5)),
            invoice("BETA", 25_000, InvoiceStatus::Paid, Some(-3)),
            invoice("GAMMA", 5_000, InvoiceStatus::Pending, None),
        ];
        let summary = summarize(&records, &LedgerFilter::default(), today());

        assert_eq!(summary.invoice_count, 3);
        assert_eq!(summary.pending_count, 2);
        assert_eq!(summary.paid_count, 1);
        assert_eq!(summary.total_open, Amount::from_cents(15_000));
        assert_eq!(summary.total_paid, Amount::from_cents(25_000));
        assert_eq!(summary.grand_total, Amount::from_cents(40_000));
    }

    #[test]
    fn bucket_percentages_round_to_one_decimal() {
        let records = vec![
            invoice("A", 100, InvoiceStatus::Pending, Some(-1)),
            invoice("B", 100, InvoiceStatus::Pending, Some(5)),
            invoice("C", 100, InvoiceStatus::Pending, Some(30)),
        ];
        let summary = summarize(&records, &LedgerFilter::default(), today());

        assert_eq!(summary.sla.overdue.count, 1);
        assert_eq!(summary.sla.overdue.percent, 33.3);
        assert_eq!(summary.sla.due_soon.percent, 33.3);
        assert_eq!(summary.sla.on_time.percent, 33.3);
        assert_eq!(summary.sla.done.count, 0);
        assert_eq!(summary.sla.done.percent, 0.0);
    }

    #[test]
    fn filter_by_supplier_is_case_insensitive() {
        let records = vec![
            invoice("ACME", 10_000, InvoiceStatus::Pending, Some(5)),
            invoice("BETA", 25_000, InvoiceStatus::Paid, None),
        ];
        let filter = LedgerFilter {
            supplier: Some("acme".to_string()),
            ..Default::default()
        };
        let summary = summarize(&records, &filter, today());
        assert_eq!(summary.invoice_count, 1);
        assert_eq!(summary.grand_total, Amount::from_cents(10_000));
    }

    #[test]
    fn filter_by_sla_recomputes_classification() {
        let records = vec![
            invoice("ACME", 10_000, InvoiceStatus::Pending, Some(-2)),
            invoice("BETA", 25_000, InvoiceStatus::Pending, Some(3)),
        ];
        let filter = LedgerFilter {
            sla: Some(SlaClass::Overdue),
            ..Default::default()
        };
        let summary = summarize(&records, &filter, today());
        assert_eq!(summary.invoice_count, 1);
        assert_eq!(summary.sla.overdue.count, 1);
        assert_eq!(summary.sla.overdue.percent, 100.0);
    }

    #[test]
    fn filter_matching_nothing_behaves_like_empty() {
        let records = vec![invoice("ACME", 10_000, InvoiceStatus::Pending, Some(5))];
        let filter = LedgerFilter {
            supplier: Some("NOBODY".to_string()),
            ..Default::default()
        };
        let summary = summarize(&records, &filter, today());
        assert_eq!(summary, Summary::default());
    }
}
