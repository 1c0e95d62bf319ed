//! Discount policy for order fulfillment.
//!
//! A discount policy maps an order amount and a caller-supplied customer
//! tier to the discounted amount:
//! - `"premium"` customers receive 15% off
//! - `"regular"` customers receive 5% off
//! - any other tier (including the empty string) pays full price

pub mod error;
pub mod policy;
pub mod tier;

pub use error::DiscountError;
pub use policy::{DiscountPolicy, TieredDiscountPolicy};
pub use tier::{CustomerTier, DiscountRate};
