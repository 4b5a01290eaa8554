//! Log initialization.
//!
//! Uses `tracing` with a `tracing-subscriber` formatter. Output goes to
//! stderr so reports written to stdout stay clean.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global subscriber.
///
/// # Environment
/// - `RUST_LOG`: level filter, e.g. `RUST_LOG=u_timetable=trace`.
///   Defaults to `info`, or `debug` when `verbose` is set.
///
/// # Example
/// ```no_run
/// u_timetable::logging::init(false);
/// ```
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// Initializes logging for tests. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
