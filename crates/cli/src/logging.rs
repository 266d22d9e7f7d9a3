// crates/cli/src/logging.rs
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Overrides the level picked from `-v`/`-q` when set.
pub const LOG_ENV: &str = "JPGTIDY_LOG";

/// Filter directive for the given verbosity flags.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber. The engine logs through `log`; the
/// subscriber's `tracing-log` bridge picks those records up.
///
/// Keeps the existing subscriber if one is already set, and returns `false`.
pub fn init(verbose: u8, quiet: bool) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();

    match installed {
        Ok(()) => true,
        Err(e) => {
            log::debug!("keeping the existing log subscriber: {e}");
            false
        }
    }
}
