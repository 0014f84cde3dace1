//! Walkthrough entry point.
//!
//! Runs the configured lessons in order and logs every observation.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::config::WalkthroughConfig;
use walkthrough::lessons;

fn main() {
    // Load configuration before logging so the filter can come from it
    let (config, config_error) = match WalkthroughConfig::from_env() {
        Ok(config) => (config, None),
        Err(error) => (WalkthroughConfig::default(), Some(error)),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(fmt::layer())
        .init();

    if let Some(error) = config_error {
        tracing::warn!("Failed to load configuration from environment: {error}");
        tracing::info!("Using default configuration");
    }

    tracing::info!(
        lessons = config.lessons.len(),
        checkout_total = config.checkout_total,
        "Starting walkthrough"
    );

    for lesson in &config.lessons {
        let observations = lessons::run(*lesson, &config);
        lessons::report(*lesson, &observations);
    }

    tracing::info!("Walkthrough finished");
}
