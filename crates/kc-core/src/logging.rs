//! Logging setup for the kcomp CLI.
//!
//! stdout is reserved for command payloads; all log output goes to stderr.
//! The `KCOMP_LOG` env var overrides the CLI verbosity via the standard
//! EnvFilter syntax.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `--quiet` wins over `-v`; repeated `-v` raises the level from info to
/// debug to trace. Safe to call more than once; later calls are no-ops.
pub fn init(verbose: u8, quiet: bool, no_color: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_env("KCOMP_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .try_init();
}
