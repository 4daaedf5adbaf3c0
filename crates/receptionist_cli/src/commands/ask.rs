//! Ask command - Send a single message.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use tracing::info;

use receptionist_chat::AppState;

use super::CliError;

#[derive(Args)]
pub struct AskArgs {
    /// Message to send
    #[arg(required = true)]
    pub message: Vec<String>,

    /// Print the exchange as JSON
    #[arg(long)]
    pub json: bool,

    /// Reply immediately instead of simulating thinking time
    #[arg(long)]
    pub no_delay: bool,
}

pub async fn execute(args: AskArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if args.no_delay || args.json {
        config = config.without_delay();
    }

    let text = args.message.join(" ");
    let mut state = AppState::new(&config, chrono::Local::now().date_naive());

    let Some(exchange) = state.send_message_with_delay(&text).await else {
        return Err(CliError::EmptyMessage.into());
    };

    if let Some(ref booking) = exchange.booking {
        info!("Created {} booking {}", booking.kind(), booking.id);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&exchange)?);
    } else {
        println!("{}", exchange.reply.text);
    }

    Ok(())
}
