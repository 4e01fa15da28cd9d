//! Logging setup.
//!
//! Logs go to a daily-rolling file under ${BYLINE_HOME}/logs/, since stdout
//! and stderr belong to the UI. The filter is taken from BYLINE_LOG (same syntax
//! as RUST_LOG), defaulting to `byline=info`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::paths;

/// Default filter when BYLINE_LOG is unset.
const DEFAULT_FILTER: &str = "byline=info";

/// Initializes the global tracing subscriber.
///
/// Returns the appender guard; dropping it flushes and stops the background
/// writer, so the caller must keep it alive for the lifetime of the process.
pub fn init() -> WorkerGuard {
    let filter = EnvFilter::try_from_env("BYLINE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let appender = tracing_appender::rolling::daily(paths::logs_dir(), "byline.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    guard
}
