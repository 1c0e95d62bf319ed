//! Shared value types used across the fulfillment crates.

pub mod amount;
pub mod types;

pub use amount::Amount;
pub use types::OrderId;
