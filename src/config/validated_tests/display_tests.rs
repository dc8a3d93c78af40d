//! Tests for the human-readable configuration summary.

use super::*;

fn request() -> NotificationRequest {
    let cli = cli(&["--app", "app-token-1234", "--user", "user-token-9876", "--body", "hi"]);
    ValidatedConfig::from_raw(&cli, &JsonConfig::default())
        .unwrap()
        .request
}

#[test]
fn tokens_are_redacted() {
    let text = request().to_string();

    assert!(!text.contains("app-token-1234"));
    assert!(!text.contains("user-token-9876"));
    assert!(text.contains("****1234"));
    assert!(text.contains("****9876"));
}

#[test]
fn short_tokens_are_fully_masked() {
    let cli = cli(&["--app", "abc", "--user", "u", "--body", "hi"]);
    let text = ValidatedConfig::from_raw(&cli, &JsonConfig::default())
        .unwrap()
        .request
        .to_string();

    assert!(text.contains("app: ***,"));
    assert!(text.contains("user: *,"));
}

#[test]
fn unset_optionals_show_none() {
    let text = request().to_string();

    assert!(text.contains("url: none"));
    assert!(text.contains("device: none"));
}

#[test]
fn config_summary_includes_file_and_request() {
    let cli = cli(&["-c", "/tmp/p.json", "--app", "a", "--user", "u", "--body", "hello"]);
    let config = ValidatedConfig::from_raw(&cli, &JsonConfig::default()).unwrap();
    let text = config.to_string();

    assert!(text.contains("/tmp/p.json"));
    assert!(text.contains("\"hello\""));
    assert!(text.contains(defaults::SOUND));
}
