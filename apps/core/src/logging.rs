//! Tracing subscriber setup. Logs go to stderr so stdout stays clean for reports.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::config::LogFormat;
use crate::error::AppError;

const DEFAULT_FILTER: &str = "docanalyzer=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(format: LogFormat) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
            .map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e))),
        LogFormat::Bunyan => {
            let subscriber = Registry::default()
                .with(filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    "docanalyzer".to_string(),
                    std::io::stderr,
                ));
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| AppError::Config(format!("Failed to initialise logging: {}", e)))
        }
    }
}
