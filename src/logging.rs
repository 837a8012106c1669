//! Diagnostic logging setup.
//!
//! Operation failures are shown to the user as a short banner; the
//! underlying cause goes to the `tracing` log on stderr. The filter comes
//! from `USERADMIN_LOG`, then `-v` flags, then the `[log] level` config.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::constants::ENV_LOG;
use crate::env::Env;

/// Pick the filter directive to use.
///
/// Each `-v` raises the level one step above the configured one.
pub fn resolve_filter(config_level: &str, verbosity: u8, env: &Env) -> String {
    if let Ok(directive) = env.var(ENV_LOG) {
        return directive;
    }
    match verbosity {
        0 => config_level.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
