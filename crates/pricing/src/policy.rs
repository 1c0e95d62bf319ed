//! Discount policy trait and the tiered implementation.

use std::sync::Arc;

use common::Amount;

use crate::error::DiscountError;
use crate::tier::CustomerTier;

/// Computes the discounted amount for an order.
pub trait DiscountPolicy: Send + Sync {
    /// Applies the policy to `amount` for a customer of the given `tier`.
    ///
    /// The amount is not validated or clamped. The result is exact;
    /// rounding happens only when the amount is displayed.
    fn compute_discount(&self, amount: Amount, tier: &str) -> Result<Amount, DiscountError>;
}

/// Fixed-rate policy keyed on [`CustomerTier`].
///
/// | tier      | rate |
/// |-----------|------|
/// | `premium` | 15%  |
/// | `regular` | 5%   |
/// | other     | 0%   |
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredDiscountPolicy;

impl TieredDiscountPolicy {
    /// Creates the tiered policy.
    pub fn new() -> Self {
        Self
    }
}

impl DiscountPolicy for TieredDiscountPolicy {
    fn compute_discount(&self, amount: Amount, tier: &str) -> Result<Amount, DiscountError> {
        let tier = CustomerTier::parse(tier);
        let rate = tier.discount_rate();
        let discounted = amount - amount.scale(rate.value());

        tracing::debug!(
            %tier,
            known = tier.is_known(),
            rate = rate.value(),
            amount = amount.value(),
            discounted = discounted.value(),
            "discount applied"
        );

        Ok(discounted)
    }
}

impl<T: DiscountPolicy + ?Sized> DiscountPolicy for Arc<T> {
    fn compute_discount(&self, amount: Amount, tier: &str) -> Result<Amount, DiscountError> {
        (**self).compute_discount(amount, tier)
    }
}

impl<T: DiscountPolicy + ?Sized> DiscountPolicy for Box<T> {
    fn compute_discount(&self, amount: Amount, tier: &str) -> Result<Amount, DiscountError> {
        (**self).compute_discount(amount, tier)
    }
}
