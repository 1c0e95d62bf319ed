//! Demo entry point: processes one order and exits.

use std::process::ExitCode;

use demo::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 1. Initialize tracing
    demo::telemetry::init_tracing(&config);

    // 2. Install Prometheus metrics recorder
    let metrics_handle = match demo::telemetry::init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "metrics recorder not installed");
            None
        }
    };

    // 3. Run the demonstration order
    let outcome = demo::run(&config).await;

    if let Some(handle) = metrics_handle {
        tracing::debug!(metrics = %handle.render(), "metrics snapshot");
    }

    match outcome {
        Ok(result) => {
            tracing::info!(order_id = %result.order_id(), "{result}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, stage = %e.stage(), "order failed");
            ExitCode::FAILURE
        }
    }
}
