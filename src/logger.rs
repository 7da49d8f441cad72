//! Logging setup for the modpack CLI
//!
//! Verbosity is resolved in this order:
//! 1. `--verbose`: debug for modpack
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. Default: info for modpack

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("modpack=debug")
    } else if quiet {
        EnvFilter::new("modpack=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("modpack=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(should_use_colors())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise only on a terminal
fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
