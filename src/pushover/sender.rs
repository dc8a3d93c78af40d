//! Notifier trait and Pushover HTTP implementation.

use super::message::ApiResponse;
use super::{HttpClient, HttpRequest, HttpResponse, Message, Receipt, Recipient, SendError};

/// The Pushover messages endpoint.
pub const MESSAGES_ENDPOINT: &str = "https://api.pushover.net/1/messages.json";

/// Trait for delivering a message to a recipient.
///
/// This abstraction lets the binary dispatch without caring how the
/// message travels and enables testing with mocks.
pub trait Notifier: Send + Sync {
    /// Sends `message` to `recipient` exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the request fails or the API rejects it.
    fn send(
        &self,
        message: &Message,
        recipient: &Recipient,
    ) -> impl std::future::Future<Output = Result<Receipt, SendError>> + Send;
}

/// Pushover API client bound to one application token.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```
/// use pushover_send::pushover::{PushoverClient, ReqwestClient};
///
/// let client = PushoverClient::new(ReqwestClient::new(), "app-token");
/// assert_eq!(client.endpoint().host_str(), Some("api.pushover.net"));
/// ```
#[derive(Debug)]
pub struct PushoverClient<H> {
    http: H,
    app_token: String,
    endpoint: url::Url,
}

impl<H> PushoverClient<H> {
    /// Creates a client that posts to [`MESSAGES_ENDPOINT`].
    #[must_use]
    pub fn new(http: H, app_token: impl Into<String>) -> Self {
        Self {
            http,
            app_token: app_token.into(),
            endpoint: default_endpoint(),
        }
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: url::Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    /// Returns the application token.
    #[must_use]
    pub fn app_token(&self) -> &str {
        &self.app_token
    }

    /// Builds the form POST for `message`.
    #[must_use]
    pub fn build_request(&self, message: &Message, recipient: &Recipient) -> HttpRequest {
        HttpRequest::post(self.endpoint.clone())
            .with_form(message.form_fields(&self.app_token, recipient))
    }
}

impl<H: HttpClient> Notifier for PushoverClient<H> {
    async fn send(&self, message: &Message, recipient: &Recipient) -> Result<Receipt, SendError> {
        let request = self.build_request(message, recipient);

        tracing::debug!("POST {}", request.url);
        let response = self.http.request(request).await?;

        interpret_response(&response)
    }
}

/// Maps an HTTP response from the messages endpoint to a receipt or error.
///
/// Pushover always answers with a JSON body carrying `status`; a 2xx response
/// with `status: 1` is the only success.
///
/// # Errors
///
/// - [`SendError::Rejected`] when the body reports a failure
/// - [`SendError::InvalidResponse`] when the body is not a Pushover response,
///   or when a non-2xx response claims success
pub fn interpret_response(response: &HttpResponse) -> Result<Receipt, SendError> {
    let status = response.status;
    let parsed: ApiResponse = response.json().map_err(|e| SendError::InvalidResponse {
        status,
        reason: format!(
            "{e}; body: {}",
            response.body_text().unwrap_or("<non-UTF-8 body>")
        ),
    })?;

    if !parsed.is_accepted() {
        return Err(SendError::Rejected {
            status,
            errors: parsed.errors,
        });
    }

    if !response.is_success() {
        return Err(SendError::InvalidResponse {
            status,
            reason: "success status in a non-2xx response".to_string(),
        });
    }

    Ok(Receipt {
        request: parsed.request,
    })
}

fn default_endpoint() -> url::Url {
    url::Url::parse(MESSAGES_ENDPOINT).expect("MESSAGES_ENDPOINT is a valid URL")
}
