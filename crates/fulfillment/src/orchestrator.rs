//! Order orchestrator driving the fulfillment pipeline.

use std::sync::atomic::{AtomicU64, Ordering};

use common::{Amount, OrderId};
use payment::{PaymentError, PaymentFeeStrategy, PaymentReceipt};
use pricing::DiscountPolicy;
use tokio::time::Instant;

use crate::error::OrderError;
use crate::request::{OrderRequest, SettlementResult};
use crate::stage::OrderStage;

/// Orchestrates order fulfillment.
///
/// The orchestrator composes a discount policy and a payment strategy and
/// runs each request through validate → discount → pay → settle. Every
/// stage short-circuits on failure. The orchestrator holds no per-order
/// state, so one instance can serve concurrent orders.
pub struct OrderOrchestrator<D, P>
where
    D: DiscountPolicy,
    P: PaymentFeeStrategy,
{
    discount: D,
    payment: P,
    processed: AtomicU64,
}

impl<D, P> OrderOrchestrator<D, P>
where
    D: DiscountPolicy,
    P: PaymentFeeStrategy,
{
    /// Creates a new orchestrator.
    pub fn new(discount: D, payment: P) -> Self {
        Self {
            discount,
            payment,
            processed: AtomicU64::new(0),
        }
    }

    /// Returns the discount policy.
    pub fn discount_policy(&self) -> &D {
        &self.discount
    }

    /// Returns the payment strategy.
    pub fn payment_strategy(&self) -> &P {
        &self.payment
    }

    /// Number of orders handed to this orchestrator, successful or not.
    pub fn orders_processed(&self) -> u64 {
        self.processed.load(Ordering::Relaxed)
    }

    /// Fulfils an order.
    ///
    /// Returns the settlement on success, or the error of the first stage
    /// that failed.
    #[tracing::instrument(
        skip(self, request),
        fields(customer = request.customer(), tier = request.customer_tier())
    )]
    pub async fn process_order(
        &self,
        request: OrderRequest,
    ) -> Result<SettlementResult, OrderError> {
        self.run(request, None).await
    }

    /// Fulfils an order, giving up on the payment stage at `deadline`.
    ///
    /// An expired deadline surfaces as
    /// `OrderError::PaymentFailed(PaymentError::DeadlineExceeded)`.
    #[tracing::instrument(
        skip(self, request),
        fields(customer = request.customer(), tier = request.customer_tier())
    )]
    pub async fn process_order_with_deadline(
        &self,
        request: OrderRequest,
        deadline: Instant,
    ) -> Result<SettlementResult, OrderError> {
        self.run(request, Some(deadline)).await
    }

    async fn run(
        &self,
        request: OrderRequest,
        deadline: Option<Instant>,
    ) -> Result<SettlementResult, OrderError> {
        self.processed.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("orders_processed_total").increment(1);
        let start = std::time::Instant::now();

        let mut stage = OrderStage::Received;
        let outcome = self.execute(&request, deadline, &mut stage).await;

        let duration = start.elapsed().as_secs_f64();
        metrics::histogram!("order_duration_seconds").record(duration);

        match &outcome {
            Ok(result) => {
                tracing::info!(
                    order_id = %result.order_id(),
                    final_amount = result.final_amount().value(),
                    duration,
                    "order completed"
                );
            }
            Err(e) => {
                metrics::counter!("orders_failed_total", "reason" => e.reason()).increment(1);
                tracing::warn!(error = %e, %stage, "order failed");
            }
        }

        outcome
    }

    /// Runs the pipeline, leaving `stage` at the terminal stage reached.
    async fn execute(
        &self,
        request: &OrderRequest,
        deadline: Option<Instant>,
        stage: &mut OrderStage,
    ) -> Result<SettlementResult, OrderError> {
        validate(request).inspect_err(|e| advance(stage, e.stage()))?;
        advance(stage, OrderStage::Validated);

        let discounted = self
            .discount
            .compute_discount(request.amount(), request.customer_tier())
            .map_err(OrderError::DiscountFailed)
            .inspect_err(|e| advance(stage, e.stage()))?;
        advance(stage, OrderStage::Discounted);

        let receipt = self
            .settle(discounted, deadline)
            .await
            .inspect_err(|e| advance(stage, e.stage()))?;
        advance(stage, OrderStage::Paid);

        let result = SettlementResult::new(OrderId::generate(), discounted, receipt);
        advance(stage, OrderStage::Completed);

        Ok(result)
    }

    async fn settle(
        &self,
        amount: Amount,
        deadline: Option<Instant>,
    ) -> Result<PaymentReceipt, OrderError> {
        let payment = self.payment.process_payment(amount);

        let outcome = match deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, payment)
                .await
                .unwrap_or(Err(PaymentError::DeadlineExceeded)),
            None => payment.await,
        };

        outcome.map_err(OrderError::PaymentFailed)
    }
}

/// Checks the amount first, then the customer; reports the first failure.
fn validate(request: &OrderRequest) -> Result<(), OrderError> {
    if !request.amount().is_positive() {
        return Err(OrderError::InvalidAmount {
            amount: request.amount(),
        });
    }

    if request.customer().is_empty() {
        return Err(OrderError::InvalidCustomer);
    }

    Ok(())
}

fn advance(stage: &mut OrderStage, next: OrderStage) {
    debug_assert!(stage.can_advance_to(next), "{stage} -> {next}");
    tracing::debug!(from = %stage, to = %next, "order stage advanced");
    *stage = next;
}
