use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Env var holding an `EnvFilter` directive, e.g. `PERFSCORE_LOG=perfscore=trace`.
pub const LOG_ENV: &str = "PERFSCORE_LOG";

/// Default filter directive for the given verbosity.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "perfscore=debug"
    } else {
        "perfscore=warn"
    }
}

/// Pick the filter directive: `PERFSCORE_LOG`, then `RUST_LOG`, then the
/// verbosity default. Empty values count as unset.
pub fn select_directive<'a>(
    app_log: Option<&'a str>,
    rust_log: Option<&'a str>,
    verbose: bool,
) -> &'a str {
    app_log
        .filter(|d| !d.trim().is_empty())
        .or_else(|| rust_log.filter(|d| !d.trim().is_empty()))
        .unwrap_or_else(|| default_directive(verbose))
}

/// Install the stderr subscriber. Idempotent.
///
/// ANSI colors are only written when stderr is a terminal.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let app_log = std::env::var(LOG_ENV).ok();
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let directive = select_directive(app_log.as_deref(), rust_log.as_deref(), verbose);
        let filter = EnvFilter::try_new(directive)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}
