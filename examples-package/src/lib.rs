//! Shared setup for the demo programs under `examples/`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise cache events are shown down to `trace`
/// when `verbose` is set and at `info` when it is not.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        "recency_cache=trace,recency_demos=debug"
    } else {
        "recency_cache=info,recency_demos=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
