//! Payment gateway trait and local implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::Amount;

use crate::error::PaymentError;
use crate::method::PaymentMethod;

/// One round trip to the external payment network.
///
/// Implementations must not block the calling thread: a slow gateway may
/// only suspend its own task.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Submits a charge of `total` through the given method.
    async fn round_trip(&self, method: PaymentMethod, total: Amount) -> Result<(), PaymentError>;
}

/// Gateway that stands in for the network by sleeping.
///
/// Sleeps for the method's default latency unless a fixed latency is set.
/// Clones share the decline switch.
#[derive(Debug, Clone, Default)]
pub struct SimulatedGateway {
    latency: Option<Duration>,
    decline: Arc<AtomicBool>,
}

impl SimulatedGateway {
    /// Creates a gateway using each method's default latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway that always waits `latency`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Configures the gateway to decline every charge.
    pub fn set_decline(&self, decline: bool) {
        self.decline.store(decline, Ordering::SeqCst);
    }

    /// Returns the latency applied for `method`.
    pub fn latency_for(&self, method: PaymentMethod) -> Duration {
        self.latency.unwrap_or_else(|| method.default_latency())
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn round_trip(&self, method: PaymentMethod, total: Amount) -> Result<(), PaymentError> {
        tokio::time::sleep(self.latency_for(method)).await;

        if self.decline.load(Ordering::SeqCst) {
            return Err(PaymentError::Declined(format!(
                "{} charge of {} refused",
                method.label(),
                total
            )));
        }

        Ok(())
    }
}

/// Gateway that answers immediately. Useful for tests and benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantGateway;

#[async_trait]
impl PaymentGateway for InstantGateway {
    async fn round_trip(&self, _method: PaymentMethod, _total: Amount) -> Result<(), PaymentError> {
        Ok(())
    }
}
