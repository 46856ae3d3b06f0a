//! Logging setup for the hub
//!
//! Console output respects RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=voltline_hub::keymap=debug` - only combo resolution/dispatch
//!
//! Without RUST_LOG the console shows warnings, or debug output when
//! `debugging.enable_debug_mode` is set in the hub settings.
//!
//! # Log Files
//!
//! When `debugging.logging` is on, logs are also written to
//! `voltline-hub.log` with daily rotation, in `engine_settings.engine_log_file_dir`
//! or `~/.config/voltline-hub/logs/`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths;
use crate::settings::HubSettings;

/// Console filter directive used when RUST_LOG is unset
pub fn default_console_directive(settings: &HubSettings) -> &'static str {
    if settings.debugging.enable_debug_mode {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize tracing subscriber with console and optional file logging
pub fn init(settings: &HubSettings) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_console_directive(settings)));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if settings.debugging.logging {
        let dir = settings.engine_settings.engine_log_file_dir.as_deref();
        match config_paths::ensure_logs_dir(dir) {
            Ok(logs_dir) => {
                let file_appender =
                    tracing_appender::rolling::daily(logs_dir, config_paths::LOG_FILE_NAME);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
