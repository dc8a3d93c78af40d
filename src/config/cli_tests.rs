//! Tests for CLI argument parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use super::cli::{Cli, Command, normalize_legacy_flags};
use super::defaults;

fn normalized(args: &[&str]) -> Vec<String> {
    normalize_legacy_flags(args.iter().copied())
        .into_iter()
        .map(|a| a.into_string().unwrap())
        .collect()
}

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args_uses_defaults() {
        let cli = Cli::parse_from_iter(["pushover-send"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(defaults::CONFIG_FILE));
        assert!(cli.app_token.is_none());
        assert!(cli.user_token.is_none());
        assert!(cli.title.is_none());
        assert!(cli.body.is_none());
        assert!(cli.sound.is_none());
        assert!(cli.url.is_none());
        assert!(cli.device.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_all_message_options() {
        let cli = Cli::parse_from_iter([
            "pushover-send",
            "--configfile",
            "/tmp/p.json",
            "--app",
            "app123",
            "--user",
            "user456",
            "--title",
            "Backup",
            "--body",
            "Backup finished",
            "--sound",
            "cosmic",
            "--url",
            "https://example.com/report",
            "--device",
            "phone",
        ]);

        assert_eq!(cli.config, PathBuf::from("/tmp/p.json"));
        assert_eq!(cli.app_token.as_deref(), Some("app123"));
        assert_eq!(cli.user_token.as_deref(), Some("user456"));
        assert_eq!(cli.title.as_deref(), Some("Backup"));
        assert_eq!(cli.body.as_deref(), Some("Backup finished"));
        assert_eq!(cli.sound.as_deref(), Some("cosmic"));
        assert_eq!(cli.url.as_deref(), Some("https://example.com/report"));
        assert_eq!(cli.device.as_deref(), Some("phone"));
    }

    #[test]
    fn parse_short_config_flag() {
        let cli = Cli::parse_from_iter(["pushover-send", "-c", "local.json"]);

        assert_eq!(cli.config, PathBuf::from("local.json"));
    }

    #[test]
    fn parse_runtime_flags() {
        let cli = Cli::parse_from_iter(["pushover-send", "--dry-run", "-v"]);

        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn literal_unset_is_a_real_value() {
        let cli = Cli::parse_from_iter(["pushover-send", "--url", "unset"]);

        assert_eq!(cli.url.as_deref(), Some("unset"));
    }

    #[test]
    fn empty_value_is_distinct_from_absent() {
        let cli = Cli::parse_from_iter(["pushover-send", "--title", ""]);

        assert_eq!(cli.title.as_deref(), Some(""));
    }
}

mod legacy_flags {
    use super::*;

    #[test]
    fn single_dash_long_flags_are_accepted() {
        let cli = Cli::parse_from_iter([
            "pushover-send",
            "-configfile",
            "/tmp/p.json",
            "-app",
            "a",
            "-user",
            "u",
            "-body",
            "hello",
            "-device",
            "phone",
        ]);

        assert_eq!(cli.config, PathBuf::from("/tmp/p.json"));
        assert_eq!(cli.app_token.as_deref(), Some("a"));
        assert_eq!(cli.user_token.as_deref(), Some("u"));
        assert_eq!(cli.body.as_deref(), Some("hello"));
        assert_eq!(cli.device.as_deref(), Some("phone"));
    }

    #[test]
    fn single_dash_with_inline_value() {
        let cli = Cli::parse_from_iter(["pushover-send", "-title=Alert", "-sound=siren"]);

        assert_eq!(cli.title.as_deref(), Some("Alert"));
        assert_eq!(cli.sound.as_deref(), Some("siren"));
    }

    #[test]
    fn rewrites_only_known_names() {
        assert_eq!(
            normalized(&["prog", "-body", "x", "-v", "-c", "f.json"]),
            ["prog", "--body", "x", "-v", "-c", "f.json"]
        );
    }

    #[test]
    fn value_that_looks_like_a_flag_is_untouched() {
        assert_eq!(
            normalized(&["prog", "-body", "-app", "-user", "u"]),
            ["prog", "--body", "-app", "--user", "u"]
        );
    }

    #[test]
    fn hyphen_leading_value_parses_as_value() {
        let cli = Cli::parse_from_iter(["pushover-send", "-body", "-app"]);

        assert_eq!(cli.body.as_deref(), Some("-app"));
        assert!(cli.app_token.is_none());
    }

    #[test]
    fn dash_prefixed_text_is_accepted_for_message_options() {
        let cli = Cli::parse_from_iter([
            "pushover-send",
            "--body",
            "- backup done",
            "-title",
            "-5C alert",
            "--device",
            "-phone",
        ]);

        assert_eq!(cli.body.as_deref(), Some("- backup done"));
        assert_eq!(cli.title.as_deref(), Some("-5C alert"));
        assert_eq!(cli.device.as_deref(), Some("-phone"));
    }

    #[test]
    fn dash_prefixed_tokens_and_paths_are_accepted() {
        let cli = Cli::parse_from_iter([
            "pushover-send",
            "-app",
            "-a1b2",
            "--user",
            "-u3c4",
            "-c",
            "-odd.json",
            "--sound",
            "-none",
            "--url",
            "-x",
        ]);

        assert_eq!(cli.app_token.as_deref(), Some("-a1b2"));
        assert_eq!(cli.user_token.as_deref(), Some("-u3c4"));
        assert_eq!(cli.config, PathBuf::from("-odd.json"));
        assert_eq!(cli.sound.as_deref(), Some("-none"));
        assert_eq!(cli.url.as_deref(), Some("-x"));
    }

    #[test]
    fn inline_value_does_not_consume_next_argument() {
        assert_eq!(
            normalized(&["prog", "-body=x", "-app", "a"]),
            ["prog", "--body=x", "--app", "a"]
        );
    }

    #[test]
    fn double_dash_form_is_kept() {
        assert_eq!(
            normalized(&["prog", "--body", "-sound"]),
            ["prog", "--body", "-sound"]
        );
    }

    #[test]
    fn arguments_after_terminator_are_untouched() {
        assert_eq!(
            normalized(&["prog", "--", "-body"]),
            ["prog", "--", "-body"]
        );
    }

    #[test]
    fn accepts_os_strings() {
        let args = vec![OsString::from("prog"), OsString::from("-url")];
        let out = normalize_legacy_flags(args);

        assert_eq!(out, vec![OsString::from("prog"), OsString::from("--url")]);
    }
}

mod init_command {
    use super::*;

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["pushover-send", "init"]);

        assert!(cli.is_init());
        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from(defaults::INIT_OUTPUT));
            }
            None => panic!("Expected init command"),
        }
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["pushover-send", "init", "-o", "custom.json"]);

        match cli.command {
            Some(Command::Init { output }) => {
                assert_eq!(output, PathBuf::from("custom.json"));
            }
            None => panic!("Expected init command"),
        }
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["pushover-send", "--body", "hi"]);

        assert!(!cli.is_init());
    }
}
