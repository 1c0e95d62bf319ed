//! Payment error types.

use thiserror::Error;

/// Errors that can occur while settling a payment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaymentError {
    /// The gateway declined the charge.
    #[error("payment declined: {0}")]
    Declined(String),

    /// The gateway could not be reached or answered with an error.
    #[error("gateway error: {0}")]
    Gateway(String),

    /// The caller's deadline passed before the gateway answered.
    #[error("payment deadline exceeded")]
    DeadlineExceeded,

    /// The payment method name is not recognised.
    #[error("unknown payment method: {0}")]
    UnknownMethod(String),
}
