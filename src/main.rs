//! pushover-send: one-shot Pushover notifications
//!
//! Resolves one notification from the config file and flags, then sends it.

use std::path::Path;
use std::process::ExitCode;

use pushover_send::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match &cli.command {
        Some(Command::Init { output }) => handle_init(output),
        None => handle_run(&cli),
    }
}

/// Writes a config template for `init`.
fn handle_init(output: &Path) -> ExitCode {
    if let Err(e) = write_default_config(output) {
        eprintln!("Error: {e}");
        return exit_code::CONFIG_ERROR;
    }

    println!("Configuration template written to: {}", output.display());
    println!("Fill in AppToken and UserToken before sending.");
    exit_code::SUCCESS
}

/// Resolves the notification, echoes it and sends it once.
///
/// Configuration errors are reported before logging is set up, since
/// `--verbose` only takes effect once the configuration is valid.
#[cfg(not(tarpaulin_include))]
fn handle_run(cli: &Cli) -> ExitCode {
    let config = ValidatedConfig::load(cli).inspect_err(|e| {
        eprintln!("Configuration error: {e}");
        print_config_hint(e);
    });
    let Ok(config) = config else {
        return exit_code::CONFIG_ERROR;
    };

    setup_tracing(config.verbose);
    tracing::info!(
        "{} {} using {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.config_file.display()
    );
    tracing::info!("{}", config.request);

    match run::execute(config) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Send failed: {e}");
            exit_code::runtime_error()
        }
    }
}
