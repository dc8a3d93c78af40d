//! pushover-send: one-shot Pushover notifications
//!
//! A library for resolving a notification from a JSON config file and
//! command-line overrides, and delivering it through the Pushover API.

pub mod config;
pub mod pushover;
