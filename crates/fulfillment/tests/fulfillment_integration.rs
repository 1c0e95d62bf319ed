//! Integration tests for the order fulfillment pipeline.

use std::error::Error as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use common::Amount;
use fulfillment::{OrderError, OrderOrchestrator, OrderRequest, OrderStage};
use payment::{
    FeeStrategy, InstantGateway, PaymentError, PaymentFeeStrategy, PaymentMethod, PaymentReceipt,
};
use pricing::{DiscountError, DiscountPolicy, TieredDiscountPolicy};
use tokio::time::Instant;

/// Discount policy that records how often it was consulted.
#[derive(Default)]
struct CountingPolicy {
    calls: AtomicUsize,
    fail: bool,
}

impl DiscountPolicy for CountingPolicy {
    fn compute_discount(&self, amount: Amount, tier: &str) -> Result<Amount, DiscountError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DiscountError::TierRejected {
                tier: tier.to_string(),
                reason: "no price list".to_string(),
            });
        }
        TieredDiscountPolicy::new().compute_discount(amount, tier)
    }
}

/// Flat-fee strategy, added without touching the orchestrator.
struct FlatFeeStrategy {
    fee: f64,
    last_amount: std::sync::Mutex<Option<Amount>>,
}

impl FlatFeeStrategy {
    fn new(fee: f64) -> Self {
        Self {
            fee,
            last_amount: std::sync::Mutex::new(None),
        }
    }
}

#[async_trait]
impl PaymentFeeStrategy for FlatFeeStrategy {
    fn label(&self) -> &str {
        "Bank Transfer"
    }

    async fn process_payment(&self, amount: Amount) -> Result<PaymentReceipt, PaymentError> {
        *self.last_amount.lock().unwrap() = Some(amount);
        let fee = Amount::new(self.fee);
        Ok(PaymentReceipt {
            label: self.label().to_string(),
            amount,
            fee,
            total: amount + fee,
        })
    }
}

/// Strategy that always fails at the gateway.
struct UnreachableGatewayStrategy;

#[async_trait]
impl PaymentFeeStrategy for UnreachableGatewayStrategy {
    fn label(&self) -> &str {
        "Offline"
    }

    async fn process_payment(&self, _amount: Amount) -> Result<PaymentReceipt, PaymentError> {
        Err(PaymentError::Gateway("connection refused".to_string()))
    }
}

fn instant_orchestrator(
    method: PaymentMethod,
) -> OrderOrchestrator<TieredDiscountPolicy, FeeStrategy<InstantGateway>> {
    OrderOrchestrator::new(
        TieredDiscountPolicy::new(),
        FeeStrategy::with_gateway(method, InstantGateway),
    )
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_premium_credit_card() {
    let orchestrator =
        OrderOrchestrator::new(TieredDiscountPolicy::new(), FeeStrategy::credit_card());

    let start = Instant::now();
    let result = orchestrator
        .process_order(OrderRequest::new(100.0, "john@example.com", "premium"))
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!((result.discounted_amount().value() - 85.0).abs() < 1e-9);
    assert_eq!(result.payment().description(), "Credit Card: $87.47 (fee: $2.46)");
    assert_eq!(
        result.description(),
        format!(
            "Order {} completed: Credit Card: $87.47 (fee: $2.46) (Final: $85.00)",
            result.order_id()
        )
    );
}

#[tokio::test]
async fn test_end_to_end_regular_paypal() {
    let orchestrator = instant_orchestrator(PaymentMethod::PayPal);

    let result = orchestrator
        .process_order(OrderRequest::new(200.0, "jane@example.com", "regular"))
        .await
        .unwrap();

    // 190 * 1.0349 = 196.631
    assert!((result.final_amount().value() - 196.631).abs() < 1e-9);
    assert!(result.description().contains("PayPal: $196.63 (fee: $6.63)"));
    assert!(result.description().ends_with("(Final: $190.00)"));
}

#[tokio::test]
async fn test_final_amount_matches_formula() {
    let cases = [
        (PaymentMethod::CreditCard, "premium", 0.15, 0.029),
        (PaymentMethod::CreditCard, "regular", 0.05, 0.029),
        (PaymentMethod::PayPal, "premium", 0.15, 0.0349),
        (PaymentMethod::PayPal, "walk-in", 0.0, 0.0349),
    ];

    for (method, tier, discount_rate, fee_rate) in cases {
        let orchestrator = instant_orchestrator(method);
        for amount in [0.01, 1.0, 99.99, 100.5, 1234.56] {
            let result = orchestrator
                .process_order(OrderRequest::new(amount, "c", tier))
                .await
                .unwrap();

            let expected = amount * (1.0 - discount_rate) * (1.0 + fee_rate);
            assert!(
                (result.final_amount().value() - expected).abs() < 1e-9,
                "{method} {tier} {amount}: {} vs {expected}",
                result.final_amount().value()
            );
        }
    }
}

#[tokio::test]
async fn test_invalid_requests_never_reach_discount_or_payment() {
    let strategy = Arc::new(FlatFeeStrategy::new(1.0));
    let orchestrator = OrderOrchestrator::new(CountingPolicy::default(), Arc::clone(&strategy));

    let rejected = [
        OrderRequest::new(0.0, "a", "premium"),
        OrderRequest::new(-0.01, "a", "premium"),
        OrderRequest::new(-500.0, "", "regular"),
        OrderRequest::new(10.0, "", "premium"),
    ];

    for request in rejected {
        let err = orchestrator.process_order(request).await.unwrap_err();
        assert_eq!(err.stage(), OrderStage::Rejected);
    }

    assert_eq!(orchestrator.discount_policy().calls.load(Ordering::SeqCst), 0);
    assert!(strategy.last_amount.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_discount_failure_is_wrapped_with_cause() {
    let strategy = Arc::new(FlatFeeStrategy::new(1.0));
    let policy = CountingPolicy {
        fail: true,
        ..CountingPolicy::default()
    };
    let orchestrator = OrderOrchestrator::new(policy, Arc::clone(&strategy));

    let err = orchestrator
        .process_order(OrderRequest::new(10.0, "a", "premium"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OrderError::DiscountFailed(DiscountError::TierRejected { .. })
    ));
    assert_eq!(err.stage(), OrderStage::DiscountFailed);
    assert!(err.to_string().starts_with("discount calculation failed: "));
    assert!(err.source().is_some());
    assert!(strategy.last_amount.lock().unwrap().is_none());
}

#[tokio::test]
async fn test_payment_failure_is_wrapped_with_cause() {
    let orchestrator =
        OrderOrchestrator::new(TieredDiscountPolicy::new(), UnreachableGatewayStrategy);

    let err = orchestrator
        .process_order(OrderRequest::new(10.0, "a", "regular"))
        .await
        .unwrap_err();

    assert_eq!(err.stage(), OrderStage::PaymentFailed);
    assert_eq!(
        err.to_string(),
        "payment processing failed: gateway error: connection refused"
    );
    assert_eq!(
        err.source().unwrap().to_string(),
        "gateway error: connection refused"
    );
}

#[tokio::test]
async fn test_custom_strategy_receives_discounted_amount() {
    let strategy = Arc::new(FlatFeeStrategy::new(0.5));
    let orchestrator = OrderOrchestrator::new(TieredDiscountPolicy::new(), Arc::clone(&strategy));

    let result = orchestrator
        .process_order(OrderRequest::new(100.0, "test@example.com", "premium"))
        .await
        .unwrap();

    let seen = strategy.last_amount.lock().unwrap().unwrap();
    assert!((seen.value() - 85.0).abs() < 1e-9);
    assert!(result.description().contains("Bank Transfer: $85.50 (fee: $0.50)"));
}

#[tokio::test]
async fn test_identical_requests_settle_identically() {
    let orchestrator = instant_orchestrator(PaymentMethod::CreditCard);
    let request = OrderRequest::new(100.5, "john.doe@example.com", "premium");

    let first = orchestrator.process_order(request.clone()).await.unwrap();
    let second = orchestrator.process_order(request).await.unwrap();

    assert_eq!(first.discounted_amount(), second.discounted_amount());
    assert_eq!(first.final_amount(), second.final_amount());
    assert_eq!(first.payment(), second.payment());
    assert_ne!(first.order_id(), second.order_id());
}

#[tokio::test]
async fn test_final_amount_strictly_increasing_in_amount() {
    for method in [PaymentMethod::CreditCard, PaymentMethod::PayPal] {
        for tier in ["premium", "regular", ""] {
            let orchestrator = instant_orchestrator(method);
            let mut previous: Option<Amount> = None;

            for amount in [0.01, 0.02, 1.0, 9.99, 10.0, 100.0, 100.01, 5000.0] {
                let result = orchestrator
                    .process_order(OrderRequest::new(amount, "c", tier))
                    .await
                    .unwrap();

                if let Some(previous) = previous {
                    assert!(
                        result.final_amount() > previous,
                        "{method} {tier:?}: {amount} did not increase"
                    );
                }
                previous = Some(result.final_amount());
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_orders_do_not_block_each_other() {
    let orchestrator = Arc::new(OrderOrchestrator::new(
        TieredDiscountPolicy::new(),
        FeeStrategy::paypal(),
    ));

    let start = Instant::now();
    let handles: Vec<_> = (1..=8)
        .map(|i| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move {
                orchestrator
                    .process_order(OrderRequest::new(i as f64 * 10.0, format!("c{i}"), "regular"))
                    .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(150));
    assert!(elapsed < Duration::from_millis(300), "took {elapsed:?}");
    assert_eq!(orchestrator.orders_processed(), 8);
    assert_eq!(orchestrator.payment_strategy().calls(), 8);
}

#[tokio::test]
async fn test_settlement_serializes_to_json() {
    let orchestrator = instant_orchestrator(PaymentMethod::CreditCard);

    let result = orchestrator
        .process_order(OrderRequest::new(100.0, "john@example.com", "premium"))
        .await
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["description"], result.description());
    assert_eq!(json["payment"]["label"], "Credit Card");
    assert!(json["order_id"].is_string());
    assert!(json["settled_at"].is_string());
}
