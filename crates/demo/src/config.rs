//! Demo configuration loaded from environment variables.

use std::time::Duration;

use common::Amount;
use fulfillment::OrderRequest;
use payment::PaymentMethod;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("invalid value for {key}: '{value}' (expected {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Demo configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `PAYMENT_METHOD`: `credit_card` or `paypal` (default: `credit_card`)
/// - `PAYMENT_LATENCY_MS`: fixed gateway latency (default: per method)
/// - `PAYMENT_DEADLINE_MS`: payment-stage deadline (default: none)
/// - `ORDER_AMOUNT`: order amount (default: `100.50`)
/// - `ORDER_CUSTOMER`: customer identifier (default: `john.doe@example.com`)
/// - `ORDER_TIER`: customer tier (default: `premium`)
/// - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub payment_method: PaymentMethod,
    pub payment_latency: Option<Duration>,
    pub payment_deadline: Option<Duration>,
    pub amount: f64,
    pub customer: String,
    pub tier: String,
    pub log_format: LogFormat,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let payment_method = match lookup("PAYMENT_METHOD") {
            Some(value) => value
                .parse()
                .map_err(|_| invalid("PAYMENT_METHOD", value, "credit_card or paypal"))?,
            None => defaults.payment_method,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(invalid("LOG_FORMAT", other.to_string(), "pretty or json")),
        };

        let amount = match lookup("ORDER_AMOUNT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| invalid("ORDER_AMOUNT", value, "a decimal number"))?,
            None => defaults.amount,
        };

        Ok(Self {
            payment_method,
            payment_latency: millis(&lookup, "PAYMENT_LATENCY_MS")?,
            payment_deadline: millis(&lookup, "PAYMENT_DEADLINE_MS")?,
            amount,
            customer: lookup("ORDER_CUSTOMER").unwrap_or(defaults.customer),
            tier: lookup("ORDER_TIER").unwrap_or(defaults.tier),
            log_format,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    /// Builds the demonstration order request.
    pub fn order_request(&self) -> OrderRequest {
        OrderRequest::new(Amount::new(self.amount), &self.customer, &self.tier)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            payment_method: PaymentMethod::CreditCard,
            payment_latency: None,
            payment_deadline: None,
            amount: 100.50,
            customer: "john.doe@example.com".to_string(),
            tier: "premium".to_string(),
            log_format: LogFormat::Pretty,
            log_level: "info".to_string(),
        }
    }
}

fn millis<F>(lookup: &F, key: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map(Duration::from_millis)
                .map_err(|_| invalid(key, value, "milliseconds as a whole number"))
        })
        .transpose()
}

fn invalid(key: &'static str, value: String, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value,
        expected,
    }
}
