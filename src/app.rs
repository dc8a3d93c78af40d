//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use pushover_send::config::{ConfigError, field};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable config, missing token or body, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Runtime error (exit code 2) - network failure, API rejection, etc.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn runtime_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Returns a follow-up hint for common configuration errors, if any.
pub fn config_hint(error: &ConfigError) -> Option<&'static str> {
    match error {
        ConfigError::FileRead { .. } => Some(
            "Run 'pushover-send init' to generate a configuration template, \
             or point --configfile at an existing one.",
        ),
        ConfigError::MissingRequired { field: f, .. }
            if *f == field::USER_TOKEN || *f == field::APP_TOKEN =>
        {
            Some("Tokens are listed on your Pushover dashboard at https://pushover.net.")
        }
        _ => None,
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if let Some(hint) = config_hint(error) {
        eprintln!("\n{hint}");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_read_suggests_init() {
        let error = ConfigError::FileRead {
            path: PathBuf::from("/etc/pushover.conf.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(config_hint(&error).unwrap().contains("pushover-send init"));
    }

    #[test]
    fn missing_tokens_point_to_dashboard() {
        let user = ConfigError::missing(field::USER_TOKEN, "");
        let app = ConfigError::missing(field::APP_TOKEN, "");

        assert!(config_hint(&user).unwrap().contains("pushover.net"));
        assert!(config_hint(&app).unwrap().contains("pushover.net"));
    }

    #[test]
    fn missing_body_has_no_extra_hint() {
        let body = ConfigError::missing(field::BODY, "");

        assert!(config_hint(&body).is_none());
    }
}
