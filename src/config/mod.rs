//! Configuration layer for pushover-send.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - JSON configuration file parsing ([`JsonConfig`])
//! - Validated configuration ([`ValidatedConfig`], [`NotificationRequest`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **JSON config file** - `AppToken`, `UserToken`, `Title`, `Sound`
//! 3. **Built-in defaults** - Title and sound only
//!
//! The tokens and the body have no default and must resolve to a non-empty
//! value. They are checked in the order user token, app token, body, and the
//! first failure is reported.
//!
//! # Config File Is Mandatory
//!
//! The config file is always read, even when the command line supplies every
//! required value. A missing or malformed file is an error.
//!
//! # CLI-Only Options
//!
//! `body`, `url` and `device` can only be set on the command line. `url` and
//! `device` are omitted from the outgoing message when not given.

mod cli;
pub mod defaults;
mod error;
mod json;
mod validated;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, normalize_legacy_flags};
pub use error::{ConfigError, field};
pub use json::{JsonConfig, default_config_template, expand_home};
pub use validated::{NotificationRequest, ValidatedConfig, write_default_config};
