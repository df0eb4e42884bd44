use std::{fmt, ops};

/// A monetary value in cents
///
/// Amounts are kept as integer cents so that summing already-truncated
/// lines is exact: truncation happens once per line, never on a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(pub i64);

/// A percentage as written in a plan (`30` means 30%)
///
/// Deliberately unvalidated: a plan is free to over- or under-allocate,
/// and negative values are carried through as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl Amount {
    pub const ZERO: Self = Amount(0);

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// The share of `self` corresponding to `percent`, truncated
    /// (never rounded) to the cent
    ///
    /// Truncation is a floor on the value scaled to cents, so negative
    /// percentages bias further negative: -33.335% of 10.00 is -3.34,
    /// not -3.33.
    pub fn share(self, percent: Percent) -> Amount {
        let ratio = percent.0 / 100.0;
        let value = self.as_f64() * ratio;
        Amount((value * 100.0).floor() as i64)
    }
}

impl ops::AddAssign for Amount {
    fn add_assign(&mut self, other: Amount) {
        self.0 += other.0;
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.abs();
        write!(f, "{}{}.{:02}", sign, cents / 100, cents % 100)
    }
}
