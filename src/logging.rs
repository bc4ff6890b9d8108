use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Default level for our own diagnostics given the CLI switches
fn default_directive(quiet: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    }
}

/// Send diagnostics to stderr. `RUST_LOG` overrides the level chosen by
/// `--quiet` / `--debug`.
pub(crate) fn init(quiet: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, debug)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
