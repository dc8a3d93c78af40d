//! Pushover transport for delivering a single notification.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - The Pushover message model ([`Message`], [`Recipient`], [`Receipt`])
//! - Sending a message exactly once ([`Notifier`], [`PushoverClient`])
//!
//! There is no retry: every send is a single attempt and any failure is
//! returned to the caller.

mod client;
mod error;
mod http;
mod message;
mod sender;


pub use client::ReqwestClient;
pub use error::{HttpError, SendError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::{Message, Receipt, Recipient};
pub use sender::{MESSAGES_ENDPOINT, Notifier, PushoverClient, interpret_response};
