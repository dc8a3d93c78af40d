//! Pushover message model.

use serde::Deserialize;

/// The user (or group) a message is delivered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    user_token: String,
}

impl Recipient {
    /// Creates a recipient from a user or group token.
    #[must_use]
    pub fn new(user_token: impl Into<String>) -> Self {
        Self {
            user_token: user_token.into(),
        }
    }

    /// Returns the user token.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.user_token
    }
}

/// A notification message.
///
/// Optional fields left as `None` are not sent at all, so the API applies
/// its own defaults for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message text
    pub body: String,
    /// Message title
    pub title: Option<String>,
    /// Notification sound name
    pub sound: Option<String>,
    /// Supplementary URL
    pub url: Option<String>,
    /// Target device name
    pub device: Option<String>,
}

impl Message {
    /// Creates a message with only a body.
    #[must_use]
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            title: None,
            sound: None,
            url: None,
            device: None,
        }
    }

    /// Creates a message with a body and a title.
    #[must_use]
    pub fn with_title(body: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::new(body)
        }
    }

    /// Sets the notification sound.
    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }

    /// Attaches a URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Restricts delivery to a single device.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Returns the form fields for the messages endpoint.
    ///
    /// Order is fixed: `token`, `user`, `message`, then whichever of
    /// `title`, `sound`, `url`, `device` are set.
    #[must_use]
    pub fn form_fields<'a>(
        &'a self,
        app_token: &'a str,
        recipient: &'a Recipient,
    ) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![
            ("token", app_token),
            ("user", recipient.token()),
            ("message", self.body.as_str()),
        ];

        let optional = [
            ("title", &self.title),
            ("sound", &self.sound),
            ("url", &self.url),
            ("device", &self.device),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter_map(|(name, value)| value.as_deref().map(|v| (name, v))),
        );

        fields
    }
}

/// Acknowledgement that the API accepted a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Request identifier assigned by Pushover
    pub request: String,
}

/// Body of every response from the messages endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse {
    /// 1 on success, anything else on failure
    pub status: i64,
    /// Request identifier
    #[serde(default)]
    pub request: String,
    /// Error messages when `status` is not 1
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiResponse {
    pub(super) const fn is_accepted(&self) -> bool {
        self.status == 1
    }
}
