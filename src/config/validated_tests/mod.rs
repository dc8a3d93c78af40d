//! Tests for validated configuration.

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::error::field;
use super::json::JsonConfig;
use super::validated::{NotificationRequest, ValidatedConfig};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["pushover-send"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse a JSON config
fn json(content: &str) -> JsonConfig {
    JsonConfig::parse(content).unwrap()
}

/// Config file that supplies both tokens
fn tokens_json() -> JsonConfig {
    json(r#"{ "AppToken": "file-app", "UserToken": "file-user" }"#)
}

mod display_tests;
