//! Due-date classification.
//!
//! The derived urgency bucket shown next to every record. A pure function
//! of (status, due date, reference date), so the same record can land in a
//! different bucket tomorrow; it is recomputed on every read and never
//! persisted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::invoice::InvoiceStatus;

/// Days ahead of the due date a pending invoice counts as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 10;

/// Urgency bucket.
///
/// The derived `Ord` doubles as the display tie-break: overdue rows sort
/// first, settled rows last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SlaClass {
    Overdue,
    DueSoon,
    OnTime,
    Done,
}

impl core::fmt::Display for SlaClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SlaClass::Overdue => write!(f, "overdue"),
            SlaClass::DueSoon => write!(f, "due-soon"),
            SlaClass::OnTime => write!(f, "on-time"),
            SlaClass::Done => write!(f, "done"),
        }
    }
}

/// Classify an invoice relative to `today`.
///
/// Paid invoices are done regardless of date; a pending invoice with no due
/// date cannot be late. Otherwise the whole-day difference decides:
/// negative is overdue, within [`DUE_SOON_WINDOW_DAYS`] is due soon.
pub fn classify(status: InvoiceStatus, due_date: Option<NaiveDate>, today: NaiveDate) -> SlaClass {
    if status.is_done() {
        return SlaClass::Done;
    }
    let Some(due) = due_date else {
        return SlaClass::OnTime;
    };
    let days = due.signed_duration_since(today).num_days();
    if days < 0 {
        SlaClass::Overdue
    } else if days <= DUE_SOON_WINDOW_DAYS {
        SlaClass::DueSoon
    } else {
        SlaClass::OnTime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn paid_is_done_regardless_of_due_date() {
        let past = today() - Duration::days(30);
        assert_eq!(classify(InvoiceStatus::Paid, Some(past), today()), SlaClass::Done);
        assert_eq!(classify(InvoiceStatus::Paid, None, today()), SlaClass::Done);
    }

    #[test]
    fn missing_due_date_is_on_time() {
        assert_eq!(classify(InvoiceStatus::Pending, None, today()), SlaClass::OnTime);
    }

    #[test]
    fn yesterday_is_overdue() {
        let due = today() - Duration::days(1);
        assert_eq!(classify(InvoiceStatus::Pending, Some(due), today()), SlaClass::Overdue);
    }

    #[test]
    fn window_boundary_is_inclusive_at_ten_days() {
        let at_ten = today() + Duration::days(10);
        let at_eleven = today() + Duration::days(11);
        assert_eq!(
            classify(InvoiceStatus::Pending, Some(at_ten), today()),
            SlaClass::DueSoon
        );
        assert_eq!(
            classify(InvoiceStatus::Pending, Some(at_eleven), today()),
            SlaClass::OnTime
        );
    }

    #[test]
    fn due_today_is_due_soon() {
        assert_eq!(
            classify(InvoiceStatus::Pending, Some(today()), today()),
            SlaClass::DueSoon
        );
    }

    #[test]
    fn display_order_puts_overdue_first_and_done_last() {
        let mut buckets = vec![SlaClass::Done, SlaClass::OnTime, SlaClass::Overdue, SlaClass::DueSoon];
        buckets.sort();
        assert_eq!(
            buckets,
            vec![SlaClass::Overdue, SlaClass::DueSoon, SlaClass::OnTime, SlaClass::Done]
        );
    }

    proptest! {
        /// Same inputs always produce the same bucket, and the bucket agrees
        /// with the day-difference arithmetic.
        #[test]
        fn classify_is_pure_and_consistent(offset in -2000i64..2000) {
            let due = today() + Duration::days(offset);
            let first = classify(InvoiceStatus::Pending, Some(due), today());
            let second = classify(InvoiceStatus::Pending, Some(due), today());
            prop_assert_eq!(first, second);

            let expected = if offset < 0 {
                SlaClass::Overdue
            } else if offset <= DUE_SOON_WINDOW_DAYS {
                SlaClass::DueSoon
            } else {
                SlaClass::OnTime
            };
            prop_assert_eq!(first, expected);
        }
    }
}
