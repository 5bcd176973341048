//! Tracing subscriber setup for the command-line front end
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedding applications keep control of their own output.

use tracing::Level;

/// Maximum level for a count of `-v` flags: warn, info, debug, then trace
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a formatting subscriber that writes to stderr
///
/// Stdout stays reserved for generated output. Calling this more than once
/// keeps the first subscriber.
pub fn init_tracing(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
