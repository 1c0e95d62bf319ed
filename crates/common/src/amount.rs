//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// A monetary amount carried at full floating-point precision.
///
/// Arithmetic never rounds; rounding to two decimal places happens only
/// when the amount is rendered with `Display` (e.g. `$87.47`). Negative
/// values are rendered as given (`$-10.29`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Creates an amount from a raw value.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns zero.
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw, unrounded value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is finite and strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Returns `percent` percent of this amount (`self × percent / 100`).
    pub fn percent(&self, percent: f64) -> Amount {
        Amount(self.0 * percent / 100.0)
    }

    /// Multiplies by a rate (`self × rate`).
    pub fn scale(&self, rate: f64) -> Amount {
        Amount(self.0 * rate)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::ops::Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Self) -> Self::Output {
        Amount(self.0 - rhs.0)
    }
}
