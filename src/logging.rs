// src/logging.rs
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a `-v` count.
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "docstat=warn,docstat_core=warn",
        1 => "docstat=info,docstat_core=info",
        2 => "docstat=debug,docstat_core=debug",
        _ => "docstat=trace,docstat_core=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
/// Logs go to stderr so reports on stdout stay machine-readable.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity).into());

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
