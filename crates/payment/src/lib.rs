//! Payment fee strategies.
//!
//! A strategy turns an amount into a settled payment: it charges a fixed
//! percentage fee on top of the amount and performs one round trip to a
//! payment gateway. Two methods ship built in:
//! - Credit Card, 2.9% fee
//! - PayPal, 3.49% fee
//!
//! The gateway round trip is abstracted behind [`PaymentGateway`] so the
//! simulated latency can be swapped for a real network call.

pub mod error;
pub mod gateway;
pub mod method;
pub mod strategy;

pub use error::PaymentError;
pub use gateway::{InstantGateway, PaymentGateway, SimulatedGateway};
pub use method::PaymentMethod;
pub use strategy::{FeeStrategy, PaymentFeeStrategy, PaymentReceipt};
