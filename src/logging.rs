//! Logging setup for the modelpin binary.
//!
//! Library code logs through `tracing` macros; only the binary installs a
//! subscriber. Output goes to stderr so stdout stays clean for results.

use tracing_subscriber::EnvFilter;

/// Environment variable with an `EnvFilter` directive (e.g. `modelpin=debug`).
pub const LOG_ENV: &str = "MODELPIN_LOG";

/// Default level for a `-v` count: none → warn, one → info, more → debug.
pub fn level_for_verbosity(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV)
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for_verbosity(0), tracing::Level::WARN);
        assert_eq!(level_for_verbosity(1), tracing::Level::INFO);
        assert_eq!(level_for_verbosity(2), tracing::Level::DEBUG);
        assert_eq!(level_for_verbosity(9), tracing::Level::DEBUG);
    }
}
