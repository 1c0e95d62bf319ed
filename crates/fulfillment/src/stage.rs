//! Order processing state machine.

use serde::{Deserialize, Serialize};

/// The stage an order has reached in the pipeline.
///
/// State transitions:
/// ```text
/// Received ──► Validated ──► Discounted ──► Paid ──► Completed
///    │             │              │
///    ▼             ▼              ▼
/// Rejected   DiscountFailed  PaymentFailed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStage {
    /// The request has been handed to the orchestrator.
    #[default]
    Received,

    /// Amount and customer passed validation.
    Validated,

    /// The tier discount has been applied.
    Discounted,

    /// The payment strategy settled the discounted amount.
    Paid,

    /// A settlement result was produced (terminal state).
    Completed,

    /// Validation failed (terminal state).
    Rejected,

    /// The discount policy failed (terminal state).
    DiscountFailed,

    /// The payment strategy failed (terminal state).
    PaymentFailed,
}

impl OrderStage {
    /// Returns true if the pipeline may move from this stage to `next`.
    pub fn can_advance_to(&self, next: OrderStage) -> bool {
        matches!(
            (self, next),
            (OrderStage::Received, OrderStage::Validated | OrderStage::Rejected)
                | (
                    OrderStage::Validated,
                    OrderStage::Discounted | OrderStage::DiscountFailed
                )
                | (OrderStage::Discounted, OrderStage::Paid | OrderStage::PaymentFailed)
                | (OrderStage::Paid, OrderStage::Completed)
        )
    }

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStage::Completed
                | OrderStage::Rejected
                | OrderStage::DiscountFailed
                | OrderStage::PaymentFailed
        )
    }

    /// Returns true if this is a terminal failure state.
    pub fn is_failure(&self) -> bool {
        self.is_terminal() && *self != OrderStage::Completed
    }

    /// Returns the stage name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStage::Received => "Received",
            OrderStage::Validated => "Validated",
            OrderStage::Discounted => "Discounted",
            OrderStage::Paid => "Paid",
            OrderStage::Completed => "Completed",
            OrderStage::Rejected => "Rejected",
            OrderStage::DiscountFailed => "DiscountFailed",
            OrderStage::PaymentFailed => "PaymentFailed",
        }
    }
}

impl std::fmt::Display for OrderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
