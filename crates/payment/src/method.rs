//! Built-in payment methods.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PaymentError;

/// The closed set of payment methods with a built-in fee schedule.
///
/// | method     | fee   | label         | gateway latency |
/// |------------|-------|---------------|-----------------|
/// | CreditCard | 2.9%  | `Credit Card` | 100 ms          |
/// | PayPal     | 3.49% | `PayPal`      | 150 ms          |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    #[serde(rename = "paypal")]
    PayPal,
}

impl PaymentMethod {
    /// Fee charged on top of the amount, in percent.
    pub fn fee_percent(&self) -> f64 {
        match self {
            PaymentMethod::CreditCard => 2.9,
            PaymentMethod::PayPal => 3.49,
        }
    }

    /// Label used in settlement descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    /// Simulated gateway round-trip time for this method.
    pub fn default_latency(&self) -> Duration {
        match self {
            PaymentMethod::CreditCard => Duration::from_millis(100),
            PaymentMethod::PayPal => Duration::from_millis(150),
        }
    }

    /// Returns the configuration name of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit_card",
            PaymentMethod::PayPal => "paypal",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "credit_card" | "credit-card" | "creditcard" | "card" => Ok(PaymentMethod::CreditCard),
            "paypal" => Ok(PaymentMethod::PayPal),
            _ => Err(PaymentError::UnknownMethod(s.to_string())),
        }
    }
}
