//! Tracing initialization and subscriber setup.
//!
//! Builds a `tracing_subscriber` registry with an `EnvFilter` and a fmt
//! layer. The engine itself never installs a subscriber; embedding hosts
//! call this once if they want the engine's spans and events on stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a fmt-layer tracing subscriber.
///
/// # Parameters
///
/// * `level` - Filter directive (e.g. `"debug"` or `"lanesift=trace"`).
///   When `None`, the `RUST_LOG` environment variable is consulted, falling
///   back to `"info"`.
///
/// # Initialization Behavior
///
/// Idempotent: uses `try_init`, so only the first subscriber registered in
/// the process takes effect and later calls are silently ignored.
///
/// # Example
///
/// ```
/// lanesift::observability::init_tracing(Some("debug"));
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        EnvFilter::new,
    );

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
