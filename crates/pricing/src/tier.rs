//! Customer tiers and their discount rates.

use serde::{Deserialize, Serialize};

/// Customer classification driving the discount rate.
///
/// Parsed from the caller-supplied string with an exact, case-sensitive
/// match. Anything unrecognised is kept verbatim as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    /// `"premium"`: 15% off.
    Premium,

    /// `"regular"`: 5% off.
    Regular,

    /// Any other tier, including the empty string. No discount.
    Unknown(String),
}

impl CustomerTier {
    /// Classifies a raw tier string.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "premium" => CustomerTier::Premium,
            "regular" => CustomerTier::Regular,
            other => CustomerTier::Unknown(other.to_string()),
        }
    }

    /// Returns the discount rate for this tier.
    pub fn discount_rate(&self) -> DiscountRate {
        match self {
            CustomerTier::Premium => DiscountRate::PREMIUM,
            CustomerTier::Regular => DiscountRate::REGULAR,
            CustomerTier::Unknown(_) => DiscountRate::NONE,
        }
    }

    /// Returns true if the tier was recognised.
    pub fn is_known(&self) -> bool {
        !matches!(self, CustomerTier::Unknown(_))
    }

    /// Returns the tier name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            CustomerTier::Premium => "premium",
            CustomerTier::Regular => "regular",
            CustomerTier::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for CustomerTier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fraction of the amount taken off. Only the tier table constructs one,
/// so every rate lies in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DiscountRate(f64);

impl DiscountRate {
    pub const NONE: DiscountRate = DiscountRate(0.0);
    pub const REGULAR: DiscountRate = DiscountRate(0.05);
    pub const PREMIUM: DiscountRate = DiscountRate(0.15);

    /// Returns the rate as a fraction.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::NONE
    }
}
