//! Discount error types.

use thiserror::Error;

/// Errors a discount policy can report.
///
/// The built-in [`TieredDiscountPolicy`](crate::TieredDiscountPolicy) is
/// total over its inputs and never fails; these variants exist for
/// policies backed by external pricing data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiscountError {
    /// The policy refused to price the given tier.
    #[error("tier '{tier}' rejected: {reason}")]
    TierRejected { tier: String, reason: String },

    /// The pricing source backing the policy was unavailable.
    #[error("pricing source unavailable: {0}")]
    Unavailable(String),
}
