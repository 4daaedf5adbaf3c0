//! Receptionist CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Configuration error

use std::process::ExitCode;

use clap::Parser;
use receptionist_chat::ChatError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, CliError, Commands};

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let level = cli.log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,receptionist={}", level)));
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let config_path = cli.config.clone();
    let result = match cli.command {
        Commands::Chat(args) => commands::chat::execute(args, config_path.as_deref()).await,
        Commands::Ask(args) => commands::ask::execute(args, config_path.as_deref()).await,
        Commands::Calendar(args) => commands::calendar::execute(args).await,
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(CliError::EmptyMessage) = cause.downcast_ref::<CliError>() {
            return ExitCodes::INVALID_ARGS;
        }
        match cause.downcast_ref::<ChatError>() {
            Some(ChatError::ConfigNotFound(_)) | Some(ChatError::InvalidConfig { .. }) => {
                return ExitCodes::CONFIG_ERROR;
            }
            Some(ChatError::InvalidMonth { .. }) => return ExitCodes::INVALID_ARGS,
            _ => {}
        }
    }

    ExitCodes::GENERAL_ERROR
}
