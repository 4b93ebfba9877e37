//! Stderr tracing setup for the CLI.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Workspace crates whose events are shown.
const CRATE_TARGETS: &[&str] = &[
    "stochlab",
    "stochlab_classify",
    "stochlab_markov",
    "stochlab_queue",
    "stochlab_stats",
];

/// Maps the `-v` count to a level: none is warn, then info, debug, trace.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter directives enabling `level` for every workspace crate and nothing
/// else, e.g. `stochlab=info,stochlab_classify=info,...`.
fn directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. `RUST_LOG` replaces the `-v` mapping when
/// set. Events go to stderr; stdout carries only the JSON report.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}
