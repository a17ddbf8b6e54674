//! Logging configuration using `tracing`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the log subscriber.
///
/// `verbose` forces a `debug` filter; otherwise `RUST_LOG` is honored
/// with an `info` fallback. Output goes to stderr so stdout stays
/// reserved for response payloads. Repeated calls are no-ops.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
