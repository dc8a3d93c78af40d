//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default location of the JSON configuration file.
pub const CONFIG_FILE: &str = "/etc/pushover.conf.json";

/// Default output path for the `init` subcommand.
pub const INIT_OUTPUT: &str = "pushover.conf.json";

/// Title used when neither the config file nor the command line sets one.
pub const TITLE: &str = "No title set";

/// Sound used when neither the config file nor the command line sets one.
pub const SOUND: &str = "bike";
