//! Demonstration wiring for the order-fulfillment orchestrator.
//!
//! Builds an orchestrator from [`Config`], runs one order through it and
//! reports the outcome through `tracing`.

pub mod config;
pub mod telemetry;

use fulfillment::{OrderError, OrderOrchestrator, SettlementResult};
use payment::{FeeStrategy, SimulatedGateway};
use pricing::TieredDiscountPolicy;
use tokio::time::Instant;

pub use config::{Config, ConfigError, LogFormat};

/// Orchestrator type used by the demo.
pub type DemoOrchestrator = OrderOrchestrator<TieredDiscountPolicy, FeeStrategy<SimulatedGateway>>;

/// Builds the orchestrator described by `config`.
pub fn build_orchestrator(config: &Config) -> DemoOrchestrator {
    let gateway = config
        .payment_latency
        .map(SimulatedGateway::with_latency)
        .unwrap_or_default();

    OrderOrchestrator::new(
        TieredDiscountPolicy::new(),
        FeeStrategy::with_gateway(config.payment_method, gateway),
    )
}

/// Processes the configured demonstration order.
pub async fn run(config: &Config) -> Result<SettlementResult, OrderError> {
    let orchestrator = build_orchestrator(config);
    let request = config.order_request();

    tracing::info!(
        customer = request.customer(),
        tier = request.customer_tier(),
        amount = %request.amount(),
        method = %orchestrator.payment_strategy().method(),
        "processing order"
    );

    match config.payment_deadline {
        Some(deadline) => {
            orchestrator
                .process_order_with_deadline(request, Instant::now() + deadline)
                .await
        }
        None => orchestrator.process_order(request).await,
    }
}
