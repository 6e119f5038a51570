//! Tracing subscriber setup for the firmware entry point.

use crate::config::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Called once by the host before initializing the classifier. The
/// configured level is the default directive; `RUST_LOG` still overrides it.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("{e}"))?;
    } else {
        builder.try_init().map_err(|e| anyhow::anyhow!("{e}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent_enough_for_tests() {
        let config = LoggingConfig::default();
        // First call may install the subscriber, the second must not panic.
        let _ = init_tracing(&config);
        let _ = init_tracing(&config);
    }
}
