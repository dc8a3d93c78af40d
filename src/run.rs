//! Application execution logic.
//!
//! Turns the validated configuration into a Pushover message and
//! dispatches it exactly once.

use thiserror::Error;

use pushover_send::config::{NotificationRequest, ValidatedConfig};
use pushover_send::pushover::{
    Message, Notifier, PushoverClient, Receipt, Recipient, ReqwestClient, SendError,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the async runtime.
    #[error("Failed to create async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The notification could not be delivered.
    #[error(transparent)]
    Send(#[from] SendError),
}

/// A request split into what the transport needs.
struct Dispatch {
    app_token: String,
    recipient: Recipient,
    message: Message,
}

impl From<NotificationRequest> for Dispatch {
    fn from(request: NotificationRequest) -> Self {
        let NotificationRequest {
            app_token,
            user_token,
            title,
            body,
            sound,
            url,
            device,
        } = request;

        let mut message = Message::with_title(body, title).with_sound(sound);
        if let Some(url) = url {
            message = message.with_url(url);
        }
        if let Some(device) = device {
            message = message.with_device(device);
        }

        Self {
            app_token,
            recipient: Recipient::new(user_token),
            message,
        }
    }
}

/// Sends the configured notification, unless in dry-run mode.
///
/// Builds a current-thread runtime for the single request; nothing is spawned.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created or the send fails.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it performs real network I/O.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - message not sent");
        return Ok(());
    }

    let dispatch = Dispatch::from(config.request);
    let client = PushoverClient::new(ReqwestClient::new(), dispatch.app_token.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)?;

    runtime.block_on(deliver(&client, &dispatch))?;
    Ok(())
}

/// Sends the message once through `notifier` and logs the receipt.
async fn deliver<N: Notifier>(notifier: &N, dispatch: &Dispatch) -> Result<Receipt, SendError> {
    tracing::info!("Sending to Pushover");

    let receipt = notifier
        .send(&dispatch.message, &dispatch.recipient)
        .await?;

    tracing::info!("Message send completed (request {})", receipt.request);
    Ok(receipt)
}
