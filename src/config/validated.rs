//! Validated configuration after merging defaults, the config file and CLI sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::json::{JsonConfig, default_config_template, expand_home};

/// A fully resolved notification, ready to hand to the transport.
///
/// Required fields are guaranteed non-empty. `url` and `device` are `Some`
/// only when explicitly provided on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    /// Token identifying the sending application
    pub app_token: String,

    /// Token identifying the recipient
    pub user_token: String,

    /// Message title
    pub title: String,

    /// Message text
    pub body: String,

    /// Notification sound name
    pub sound: String,

    /// URL attached to the message
    pub url: Option<String>,

    /// Restrict delivery to this device
    pub device: Option<String>,
}

impl fmt::Display for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Notification {{ app: {}, user: {}, title: {:?}, body: {:?}, sound: {}, url: {}, device: {} }}",
            redact(&self.app_token),
            redact(&self.user_token),
            self.title,
            self.body,
            self.sound,
            self.url.as_deref().unwrap_or("none"),
            self.device.as_deref().unwrap_or("none"),
        )
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to read the config file named on the command
/// line, or [`ValidatedConfig::from_raw`] to resolve already-parsed inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// The notification to send
    pub request: NotificationRequest,

    /// Config file the values were read from
    pub config_file: PathBuf,

    /// Dry-run mode (print the notification without sending it)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ file: {}, dry_run: {}, {} }}",
            self.config_file.display(),
            self.dry_run,
            self.request,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and the parsed config file.
    ///
    /// Each field resolves as CLI value, then config file value, then built-in default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] for the first missing field,
    /// checked in the order user token, app token, body.
    pub fn from_raw(cli: &Cli, json: &JsonConfig) -> Result<Self, ConfigError> {
        let user_token = required(
            cli.user_token.as_deref(),
            json.user_token.as_deref(),
            field::USER_TOKEN,
            "Use --user or set UserToken in the config file",
        )?;

        let app_token = required(
            cli.app_token.as_deref(),
            json.app_token.as_deref(),
            field::APP_TOKEN,
            "Use --app or set AppToken in the config file",
        )?;

        let body = required(
            cli.body.as_deref(),
            None,
            field::BODY,
            "Use --body to set the message text",
        )?;

        let title = layered(cli.title.as_deref(), json.title.as_deref(), defaults::TITLE);
        let sound = layered(cli.sound.as_deref(), json.sound.as_deref(), defaults::SOUND);

        let request = NotificationRequest {
            app_token,
            user_token,
            title,
            body,
            sound,
            url: cli.url.clone(),
            device: cli.device.clone(),
        };

        Ok(Self {
            request,
            config_file: expand_home(&cli.config),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads the config file named by `cli.config` and merges it with the CLI.
    ///
    /// The file is always read, even when the command line supplies every
    /// required value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - A required field is missing after merging
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let json = JsonConfig::load(&cli.config)?;
        Self::from_raw(cli, &json)
    }
}

/// Writes the configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileExists {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

/// CLI value, then file value, then the default.
fn layered(cli: Option<&str>, file: Option<&str>, default: &str) -> String {
    cli.or(file).unwrap_or(default).to_string()
}

/// CLI value, then file value; empty strings count as missing.
fn required(
    cli: Option<&str>,
    file: Option<&str>,
    name: &'static str,
    hint: &'static str,
) -> Result<String, ConfigError> {
    cli.or(file)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
        .ok_or_else(|| ConfigError::missing(name, hint))
}

/// Keeps only the last four characters of a secret.
fn redact(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }

    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{tail}")
}
