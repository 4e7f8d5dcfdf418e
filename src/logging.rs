//! Log output setup for the binary.

use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
pub fn default_filter(debug_log: bool) -> &'static str {
    if debug_log { "ballcrop=debug,info" } else { "info" }
}

/// Install the global subscriber. `RUST_LOG` wins over `--debug-log`.
pub fn init(debug_log: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(debug_log)));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn enabled_from_args(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--debug-log")
}
