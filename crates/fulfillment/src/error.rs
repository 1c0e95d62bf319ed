//! Order error types.

use common::Amount;
use payment::PaymentError;
use pricing::DiscountError;
use thiserror::Error;

use crate::stage::OrderStage;

/// Errors that can end an order before it settles.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The amount was zero, negative or not a number.
    #[error("amount must be positive")]
    InvalidAmount { amount: Amount },

    /// The customer identifier was empty.
    #[error("customer cannot be empty")]
    InvalidCustomer,

    /// The discount policy failed.
    #[error("discount calculation failed: {0}")]
    DiscountFailed(#[source] DiscountError),

    /// The payment strategy failed.
    #[error("payment processing failed: {0}")]
    PaymentFailed(#[source] PaymentError),
}

impl OrderError {
    /// Terminal stage the order ended in.
    pub fn stage(&self) -> OrderStage {
        match self {
            OrderError::InvalidAmount { .. } | OrderError::InvalidCustomer => OrderStage::Rejected,
            OrderError::DiscountFailed(_) => OrderStage::DiscountFailed,
            OrderError::PaymentFailed(_) => OrderStage::PaymentFailed,
        }
    }

    /// Short machine-readable reason, used as a metrics label.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::InvalidAmount { .. } => "invalid_amount",
            OrderError::InvalidCustomer => "invalid_customer",
            OrderError::DiscountFailed(_) => "discount_failed",
            OrderError::PaymentFailed(_) => "payment_failed",
        }
    }
}
