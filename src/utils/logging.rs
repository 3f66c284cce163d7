// ============================================================================
// Logging Setup
// Optional tracing subscriber for binaries and demos
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG` (defaults to `info`).
///
/// Returns `false` when a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
