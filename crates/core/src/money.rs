//! Monetary amounts.
//!
//! Amounts are stored in smallest currency unit (centavos) as an unsigned
//! integer, so the "amount >= 0" invariant holds by construction and values
//! survive any text round trip without precision loss.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Non-negative currency amount in centavos.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Addition that never wraps; totals clamp at `u64::MAX` centavos.
    pub fn saturating_add(self, other: Amount) -> Amount {
        Amount(self.0.saturating_add(other.0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl core::fmt::Display for Amount {
    /// Canonical decimal form with two fraction digits, e.g. `1234.56`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    /// Parse a decimal amount.
    ///
    /// Accepts `1234.56`, `1234,56` (the forms the dashboards emit) and
    /// plain integers. At most two fraction digits; a negative sign is a
    /// validation error, not a wrap-around.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomainError::validation("amount cannot be empty"));
        }
        if s.starts_with('-') {
            return Err(DomainError::validation("amount cannot be negative"));
        }

        let normalized = s.replace(',', ".");
        let (whole, frac) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if frac.len() > 2 || frac.contains('.') {
            return Err(DomainError::validation(format!(
                "amount '{s}' has more than two fraction digits"
            )));
        }

        let whole: u64 = whole
            .parse()
            .map_err(|_| DomainError::validation(format!("amount '{s}' is not a number")))?;
        let frac_cents: u64 = if frac.is_empty() {
            0
        } else {
            let parsed: u64 = frac
                .parse()
                .map_err(|_| DomainError::validation(format!("amount '{s}' is not a number")))?;
            if frac.len() == 1 { parsed * 10 } else { parsed }
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Amount)
            .ok_or_else(|| DomainError::validation(format!("amount '{s}' overflows")))
    }
}
