//! JSON configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConfigError, defaults};

/// Root configuration structure from the JSON file.
///
/// All fields are optional to allow partial configuration that is
/// merged with built-in defaults and CLI arguments. Unknown keys are ignored,
/// and an explicit `null` counts as absent.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JsonConfig {
    /// Application token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_token: Option<String>,

    /// Recipient user token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,

    /// Default message title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Default notification sound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl JsonConfig {
    /// Loads configuration from a JSON file.
    ///
    /// A leading `~/` in `path` is expanded to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_home(path);
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!("Read {} bytes from {}", content.len(), path.display());

        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParse { path, source: e })
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::JsonParse {
            path: PathBuf::from("<inline>"),
            source: e,
        })
    }
}

/// Expands a leading `~` component to the home directory.
///
/// Paths without a leading `~`, or when no home directory can be determined,
/// are returned unchanged.
#[must_use]
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest))
}

/// Generates a configuration file template.
///
/// Token fields are left empty so that an unedited template fails validation
/// instead of sending with placeholder credentials.
#[must_use]
pub fn default_config_template() -> String {
    let template = JsonConfig {
        app_token: Some(String::new()),
        user_token: Some(String::new()),
        title: Some(defaults::TITLE.to_string()),
        sound: Some(defaults::SOUND.to_string()),
    };

    // Serializing a struct of strings cannot fail.
    let mut rendered = serde_json::to_string_pretty(&template).unwrap_or_default();
    rendered.push('\n');
    rendered
}
