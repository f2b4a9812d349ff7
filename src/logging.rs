//! Diagnostics setup for the binary.
//!
//! One `tracing` subscriber writing compact lines to stderr. The level
//! comes from `RUST_LOG` when set, otherwise from the `-v` count.

use std::sync::OnceLock;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

static INIT_GUARD: OnceLock<()> = OnceLock::new();

/// Map `-v` occurrences to a level: warn, info, debug, trace.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v` when set.
///
/// Stdout carries the tree itself, so log lines never go there.
pub fn initialize_logging(verbose: u8) {
    if INIT_GUARD.set(()).is_err() {
        return;
    }

    let filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .from_env_lossy();

    // A global subscriber installed elsewhere (tests, embedders) keeps priority.
    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_err()
    {
        tracing::debug!("global subscriber already set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0), LevelFilter::WARN);
        assert_eq!(level_for_verbosity(1), LevelFilter::INFO);
        assert_eq!(level_for_verbosity(2), LevelFilter::DEBUG);
        assert_eq!(level_for_verbosity(9), LevelFilter::TRACE);
    }

    #[test]
    fn test_initialize_twice_is_harmless() {
        initialize_logging(0);
        initialize_logging(3);
    }
}
