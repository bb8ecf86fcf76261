//! Reference period (competency month).
//!
//! The accounting month an invoice is attributed to, distinct from its due
//! date. Earlier dashboard variants stored this as free text; the ledger
//! standardizes on one explicit year/month type, formatted `MM/YYYY` the way
//! the original forms did.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Competency month, ordered chronologically.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!(
                "month must be 1..=12, got {month}"
            )));
        }
        Ok(Self { year, month })
    }

    /// Competency derived from a calendar date (the original dashboards
    /// derive the month from the due date).
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl FromStr for Period {
    type Err = DomainError;

    /// Parse `MM/YYYY` (also tolerates a single-digit month).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (m, y) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| DomainError::validation(format!("period '{s}' is not MM/YYYY")))?;
        let month: u32 = m
            .parse()
            .map_err(|_| DomainError::validation(format!("period '{s}' has a bad month")))?;
        let year: i32 = y
            .parse()
            .map_err(|_| DomainError::validation(format!("period '{s}' has a bad year")))?;
        Period::new(year, month)
    }
}

impl TryFrom<String> for Period {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_format_round_trip() {
        let p: Period = "01/2026".parse().unwrap();
        assert_eq!(p, Period::new(2026, 1).unwrap());
        assert_eq!(p.to_string(), "01/2026");

        let single_digit: Period = "3/2025".parse().unwrap();
        assert_eq!(single_digit.to_string(), "03/2025");
    }

    #[test]
    fn rejects_bad_months_and_shapes() {
        assert!("13/2026".parse::<Period>().is_err());
        assert!("0/2026".parse::<Period>().is_err());
        assert!("2026-01".parse::<Period>().is_err());
        assert!("janeiro".parse::<Period>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let dec_2025: Period = "12/2025".parse().unwrap();
        let jan_2026: Period = "01/2026".parse().unwrap();
        assert!(dec_2025 < jan_2026);
    }

    #[test]
    fn derives_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(Period::from_date(date), "01/2026".parse().unwrap());
    }

    #[test]
    fn serde_uses_display_form() {
        let p = Period::new(2026, 7).unwrap();
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"07/2026\"");
        let back: Period = serde_json::from_str("\"07/2026\"").unwrap();
        assert_eq!(p, back);
    }
}
