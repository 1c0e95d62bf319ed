//! Order requests and settlement results.

use chrono::{DateTime, Utc};
use common::{Amount, OrderId};
use payment::PaymentReceipt;
use serde::{Deserialize, Serialize};

/// A caller's request to fulfil one order.
///
/// Immutable once built; the orchestrator consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    amount: Amount,
    customer: String,
    customer_tier: String,
}

impl OrderRequest {
    /// Creates a request. Nothing is validated until the order is processed.
    pub fn new(
        amount: impl Into<Amount>,
        customer: impl Into<String>,
        customer_tier: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            customer: customer.into(),
            customer_tier: customer_tier.into(),
        }
    }

    /// Amount before discount and fees.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Customer identifier.
    pub fn customer(&self) -> &str {
        &self.customer
    }

    /// Raw customer tier string.
    pub fn customer_tier(&self) -> &str {
        &self.customer_tier
    }
}

/// Outcome of a successfully fulfilled order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementResult {
    order_id: OrderId,
    description: String,
    final_amount: Amount,
    discounted_amount: Amount,
    payment: PaymentReceipt,
    settled_at: DateTime<Utc>,
}

impl SettlementResult {
    pub(crate) fn new(
        order_id: OrderId,
        discounted_amount: Amount,
        payment: PaymentReceipt,
    ) -> Self {
        let description = format!(
            "Order {} completed: {} (Final: {})",
            order_id, payment, discounted_amount
        );

        Self {
            order_id,
            description,
            final_amount: payment.total,
            discounted_amount,
            payment,
            settled_at: Utc::now(),
        }
    }

    /// Identifier assigned at settlement.
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Human-readable settlement summary.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Total charged: the discounted amount plus the payment fee.
    pub fn final_amount(&self) -> Amount {
        self.final_amount
    }

    /// Amount after the tier discount, before fees.
    pub fn discounted_amount(&self) -> Amount {
        self.discounted_amount
    }

    /// Receipt returned by the payment strategy.
    pub fn payment(&self) -> &PaymentReceipt {
        &self.payment
    }

    /// When the order settled.
    pub fn settled_at(&self) -> DateTime<Utc> {
        self.settled_at
    }
}

impl std::fmt::Display for SettlementResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
