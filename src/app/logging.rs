//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::debug;

/// Initialize tracing for the host application.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging(config: &AppConfig) {
    let log_level = config.log_level();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at {}", log_level);
    }
}

