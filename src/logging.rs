//! Diagnostic logging
//!
//! Log lines go to stderr so stdout stays reserved for command output
//! (including `--json`).

use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable that takes precedence over `RUST_LOG`
pub const LOG_ENV: &str = "YEWPACK_LOG";

/// Default filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Build the filter from `YEWPACK_LOG`, then `RUST_LOG`, then `verbose`
pub fn filter(verbose: u8) -> EnvFilter {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber; later calls are no-ops
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .without_time()
        .try_init();
}
