use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file path variable. Logging is off unless it is set.
pub const LOG_ENV_VAR: &str = "DEFERRED_VIEW_LOG";

/// Initialize tracing with optional file output.
///
/// Nothing is written to the terminal: the demo owns the screen. Set
/// `DEFERRED_VIEW_LOG` to a file path to enable logging; the level comes from
/// `RUST_LOG` (default `info`).
///
/// The file name gets a `.{pid}` suffix so concurrent runs don't clobber
/// each other.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok() else {
        return;
    };

    let unique_path = format!("{}.{}", log_path, std::process::id());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
