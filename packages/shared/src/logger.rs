//! Logger setup for Roomcast binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a binary.
///
/// Binary names use hyphens while tracing targets use underscores, so the
/// crate target is derived from `bin_name`.
fn default_directive(bin_name: &str, level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={level},tower_http=info")
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default directive.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (usually `env!("CARGO_BIN_NAME")`)
/// * `level` - Default log level for the binary's own target
pub fn setup_logger(bin_name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, level)));

    // A subscriber may already be installed (e.g. when called twice in tests).
    if tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
    {
        tracing::debug!("Logger initialized for '{}'", bin_name);
    }
}
