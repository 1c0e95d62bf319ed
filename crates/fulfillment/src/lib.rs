//! Order fulfillment orchestration.
//!
//! The orchestrator runs each order through a short pipeline, stopping at
//! the first failing stage:
//! 1. Validate the request (positive amount, non-empty customer)
//! 2. Apply the customer's tier discount
//! 3. Settle the payment for the discounted amount
//! 4. Assign an order ID and render the settlement summary
//!
//! Failures are returned as [`OrderError`]; nothing is retried.

pub mod error;
pub mod orchestrator;
pub mod request;
pub mod stage;

pub use error::OrderError;
pub use orchestrator::OrderOrchestrator;
pub use request::{OrderRequest, SettlementResult};
pub use stage::OrderStage;
