//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Long options that older invocations spell with a single dash (`-body text`).
const LEGACY_LONG_FLAGS: &[&str] = &[
    "configfile",
    "app",
    "user",
    "title",
    "body",
    "sound",
    "url",
    "device",
];

/// Options (other than the legacy ones) whose next argument is a value.
const OTHER_VALUE_FLAGS: &[&str] = &["-c", "-o", "--output"];

/// pushover-send: send one Pushover notification
///
/// Reads tokens and defaults from a JSON config file, applies command-line
/// overrides and delivers a single message through the Pushover API.
#[derive(Debug, Parser)]
#[command(name = "pushover-send")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON configuration file
    #[arg(
        long = "configfile",
        short = 'c',
        default_value = defaults::CONFIG_FILE,
        allow_hyphen_values = true
    )]
    pub config: PathBuf,

    /// Application token (overrides `AppToken` from the config file)
    #[arg(long = "app", value_name = "TOKEN", allow_hyphen_values = true)]
    pub app_token: Option<String>,

    /// User token (overrides `UserToken` from the config file)
    #[arg(long = "user", value_name = "TOKEN", allow_hyphen_values = true)]
    pub user_token: Option<String>,

    /// Message title (overrides `Title` from the config file)
    #[arg(long, allow_hyphen_values = true)]
    pub title: Option<String>,

    /// Message body (required)
    #[arg(long, allow_hyphen_values = true)]
    pub body: Option<String>,

    /// Notification sound (overrides `Sound` from the config file)
    #[arg(long, allow_hyphen_values = true)]
    pub sound: Option<String>,

    /// URL to attach to the message
    #[arg(long, allow_hyphen_values = true)]
    pub url: Option<String>,

    /// Deliver only to this registered device
    #[arg(long, allow_hyphen_values = true)]
    pub device: Option<String>,

    /// Resolve and print the message without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for pushover-send
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a configuration file template
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::INIT_OUTPUT, allow_hyphen_values = true)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// Single-dash long options such as `-body` are accepted as aliases of
    /// their `--body` form.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(normalize_legacy_flags(iter))
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}

/// Rewrites `-name` and `-name=value` into `--name` forms for the legacy long flags.
///
/// Values that follow a flag are passed through untouched, so `--body -app`
/// still sends the literal text `-app`. Everything after `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;
    let mut passthrough = false;

    for arg in args.into_iter().map(Into::into) {
        if passthrough || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, has_inline_value) = text
            .split_once('=')
            .map_or((text, false), |(flag, _)| (flag, true));

        let name = flag.strip_prefix("--").or_else(|| flag.strip_prefix('-'));
        if name.is_some_and(|n| LEGACY_LONG_FLAGS.contains(&n)) {
            expect_value = !has_inline_value;
            if flag.starts_with("--") {
                out.push(arg);
            } else {
                out.push(OsString::from(format!("-{text}")));
            }
            continue;
        }

        expect_value = !has_inline_value && OTHER_VALUE_FLAGS.contains(&flag);
        out.push(arg);
    }

    out
}
