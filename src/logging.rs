//! Diagnostic logging.
//!
//! User-facing progress goes to stdout through [`crate::output`]. Everything
//! else (paths, per-category counts, error detail) is emitted with `tracing`
//! and lands on stderr, filtered by `RUST_LOG`.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .finish()
        .try_init()?;

    tracing::debug!("logging initialized");
    Ok(())
}
