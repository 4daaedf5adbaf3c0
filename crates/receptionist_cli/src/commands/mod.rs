//! CLI command definitions.
//!
//! Each subcommand maps to one way of talking to the receptionist.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::debug;

use receptionist_chat::ReceptionistConfig;

pub mod ask;
pub mod calendar;
pub mod chat;

/// Receptionist - seat booking and scheduling assistant
#[derive(Parser)]
#[command(name = "receptionist")]
#[command(version, about = "Receptionist - seat booking and scheduling assistant")]
#[command(long_about = r#"
A rule-based AI receptionist that books desks and meeting rooms from plain
text requests. Bookings are kept in memory for the current session only.

COMMANDS:
  chat      → Interactive conversation with bookings and schedule views
  ask       → Send a single message and print the reply
  calendar  → Print the schedule view for a month

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "RECEPTIONIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat(chat::ChatArgs),

    /// Send one message and print the reply
    Ask(ask::AskArgs),

    /// Print the schedule view for a month
    Calendar(calendar::CalendarArgs),
}

/// Errors raised by the commands themselves rather than the library
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Nothing to send: the message is empty")]
    EmptyMessage,
}

impl Cli {
    /// Log level for the `receptionist` target when `RUST_LOG` is unset.
    ///
    /// The chat prompt shares the terminal with stderr, so it stays at `warn`
    /// unless `-v` is given.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else if matches!(self.command, Commands::Chat(_)) {
            "warn"
        } else {
            "info"
        }
    }
}

/// Load the configuration file, or the defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<ReceptionistConfig> {
    debug!("Loading configuration from {:?}", path);
    ReceptionistConfig::load_or_default(path).context("Failed to load configuration")
}
