//! Diagnostic logging setup.
//!
//! Engine and bot events go through `tracing`. The binary installs a fmt
//! subscriber on stderr so game output on stdout stays clean. The filter comes
//! from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

pub const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // a second call (tests, embedding) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
