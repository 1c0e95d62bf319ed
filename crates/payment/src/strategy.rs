//! Payment fee strategy trait and the fixed-percentage implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use common::Amount;
use serde::{Deserialize, Serialize};

use crate::error::PaymentError;
use crate::gateway::{PaymentGateway, SimulatedGateway};
use crate::method::PaymentMethod;

/// Outcome of a settled payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Display label of the strategy that settled the payment.
    pub label: String,

    /// Amount the fee was computed on.
    pub amount: Amount,

    /// Fee charged on top of `amount`.
    pub fee: Amount,

    /// `amount + fee`.
    pub total: Amount,
}

impl PaymentReceipt {
    /// Renders `<label>: $<total> (fee: $<fee>)`, both rounded to cents.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (fee: {})", self.label, self.total, self.fee)
    }
}

/// Settles a payment for an amount.
///
/// Strategies do not validate the amount; zero and negative amounts are
/// settled and described as given.
#[async_trait]
pub trait PaymentFeeStrategy: Send + Sync {
    /// Display label used in settlement descriptions.
    fn label(&self) -> &str;

    /// Computes the fee and total for `amount` and settles it.
    async fn process_payment(&self, amount: Amount) -> Result<PaymentReceipt, PaymentError>;
}

/// Fixed-percentage fee strategy for one of the built-in [`PaymentMethod`]s.
#[derive(Debug)]
pub struct FeeStrategy<G = SimulatedGateway> {
    method: PaymentMethod,
    gateway: G,
    calls: AtomicU64,
}

impl FeeStrategy<SimulatedGateway> {
    /// Creates a strategy for `method` backed by the simulated gateway.
    pub fn new(method: PaymentMethod) -> Self {
        Self::with_gateway(method, SimulatedGateway::new())
    }

    /// Credit Card, 2.9% fee.
    pub fn credit_card() -> Self {
        Self::new(PaymentMethod::CreditCard)
    }

    /// PayPal, 3.49% fee.
    pub fn paypal() -> Self {
        Self::new(PaymentMethod::PayPal)
    }
}

impl<G: PaymentGateway> FeeStrategy<G> {
    /// Creates a strategy for `method` settling through `gateway`.
    pub fn with_gateway(method: PaymentMethod, gateway: G) -> Self {
        Self {
            method,
            gateway,
            calls: AtomicU64::new(0),
        }
    }

    /// Returns the payment method.
    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Returns the gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Number of `process_payment` calls so far, including failed ones.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Builds the receipt for `amount` without contacting the gateway.
    pub fn quote(&self, amount: Amount) -> PaymentReceipt {
        let fee = amount.percent(self.method.fee_percent());
        PaymentReceipt {
            label: self.method.label().to_string(),
            amount,
            fee,
            total: amount + fee,
        }
    }
}

#[async_trait]
impl<G: PaymentGateway> PaymentFeeStrategy for FeeStrategy<G> {
    fn label(&self) -> &str {
        self.method.label()
    }

    #[tracing::instrument(skip(self), fields(method = self.method.as_str()))]
    async fn process_payment(&self, amount: Amount) -> Result<PaymentReceipt, PaymentError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("payment_calls_total", "method" => self.method.as_str()).increment(1);
        let start = std::time::Instant::now();

        let receipt = self.quote(amount);
        let outcome = self.gateway.round_trip(self.method, receipt.total).await;

        metrics::histogram!("payment_duration_seconds", "method" => self.method.as_str())
            .record(start.elapsed().as_secs_f64());

        match outcome {
            Ok(()) => {
                tracing::debug!(
                    fee = receipt.fee.value(),
                    total = receipt.total.value(),
                    "payment settled"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "payment gateway failed");
                Err(e)
            }
        }
    }
}

#[async_trait]
impl<T: PaymentFeeStrategy + ?Sized> PaymentFeeStrategy for Arc<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn process_payment(&self, amount: Amount) -> Result<PaymentReceipt, PaymentError> {
        (**self).process_payment(amount).await
    }
}

#[async_trait]
impl<T: PaymentFeeStrategy + ?Sized> PaymentFeeStrategy for Box<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    async fn process_payment(&self, amount: Amount) -> Result<PaymentReceipt, PaymentError> {
        (**self).process_payment(amount).await
    }
}
