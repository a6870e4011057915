//! Logging support for subx
//!
//! Events go to stderr so stdout stays clean for the batch summary.
//! RUST_LOG overrides the level chosen by the --verbose flag.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Initialize the logging system
///
/// Safe to call more than once; only the first call installs the
/// subscriber.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "subx=debug" } else { "subx=warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter);

    let _ = tracing::subscriber::set_global_default(subscriber);
}
