//! Chat command - Interactive session with the receptionist.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use receptionist_chat::{AppState, Tab};

#[derive(Args)]
pub struct ChatArgs {
    /// Reply immediately instead of simulating thinking time
    #[arg(long)]
    pub no_delay: bool,
}

/// A line typed at the chat prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    /// Free text for the receptionist
    Message(String),
    /// Switch to a view
    Show(Tab),
    NextMonth,
    PreviousMonth,
    /// Send the n-th quick action (1-based)
    Quick(Option<usize>),
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix('/') else {
            return Self::Message(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match parts.next().unwrap_or("") {
            "chat" => Self::Show(Tab::Chat),
            "bookings" => Self::Show(Tab::Bookings),
            "schedule" | "calendar" => Self::Show(Tab::Schedule),
            "next" => Self::NextMonth,
            "prev" | "previous" => Self::PreviousMonth,
            "quick" => Self::Quick(parts.next().and_then(|n| n.parse().ok())),
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Decode a raw stdin line, replacing invalid UTF-8 instead of failing
    fn from_bytes(raw: &[u8]) -> Self {
        Self::parse(&String::from_utf8_lossy(raw))
    }
}

const COMMANDS_HELP: &str = "Commands:
  /chat              Show the conversation
  /bookings          Show your bookings
  /schedule          Show the calendar
  /next, /prev       Move the calendar one month
  /quick [N]         List quick actions, or send number N
  /help              Show this help
  /quit              Leave the chat";

pub async fn execute(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = super::load_config(config_path)?;
    if args.no_delay {
        config = config.without_delay();
    }

    let today = chrono::Local::now().date_naive();
    let mut state = AppState::new(&config, today);
    info!("Chat session started");

    println!("🤖 AI Receptionist - Smart Booking & Scheduling Assistant");
    println!("{}", state.render_tabs());
    println!();
    println!("{}", state.render_transcript());
    print_quick_actions(&state);
    println!("Type /help for commands.");

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut line = Vec::new();
    loop {
        print!("> ");
        std::io::stdout().flush().context("Failed to write prompt")?;

        line.clear();
        let read = stdin
            .read_until(b'\n', &mut line)
            .await
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }

        match Input::from_bytes(&line) {
            Input::Message(text) => send(&mut state, &text).await,
            Input::Quick(None) => print_quick_actions(&state),
            Input::Quick(Some(n)) => match state.chat.quick_actions().get(n.wrapping_sub(1)) {
                Some(action) => {
                    println!("> {}", action);
                    send(&mut state, action).await;
                }
                None => println!("No quick action {}", n),
            },
            Input::Show(tab) => {
                state.select_tab(tab);
                show_active(&state, today);
            }
            Input::NextMonth => {
                state.next_month();
                state.select_tab(Tab::Schedule);
                show_active(&state, today);
            }
            Input::PreviousMonth => {
                state.previous_month();
                state.select_tab(Tab::Schedule);
                show_active(&state, today);
            }
            Input::Help => println!("{}", COMMANDS_HELP),
            Input::Quit => break,
            Input::Unknown(cmd) => println!("Unknown command /{} (try /help)", cmd),
        }
    }

    info!("Chat session ended with {} booking(s)", state.store.len());
    println!("👋 Goodbye!");
    Ok(())
}

async fn send(state: &mut AppState, text: &str) {
    if !state.chat.reply_delay().is_zero() && !text.trim().is_empty() {
        println!("💬 Receptionist is typing...");
    }

    match state.send_message_with_delay(text).await {
        Some(exchange) => {
            println!();
            println!("Receptionist ({}):", exchange.reply.clock_time());
            println!("{}", exchange.reply.text);
            println!();
            if exchange.booking.is_some() {
                println!("{}", state.render_tabs());
            }
        }
        None => debug!("Empty input, nothing sent"),
    }
}

fn show_active(state: &AppState, today: chrono::NaiveDate) {
    println!("{}", state.render_tabs());
    println!();
    println!("{}", state.render_active_view(today));
}

fn print_quick_actions(state: &AppState) {
    println!("✨ Quick Actions:");
    for (i, action) in state.chat.quick_actions().iter().enumerate() {
        println!("  {}. {}", i + 1, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_messages() {
        assert_eq!(
            Input::parse("  Book a seat  "),
            Input::Message("Book a seat".to_string())
        );
        assert_eq!(Input::parse(""), Input::Message(String::new()));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Input::parse("/bookings"), Input::Show(Tab::Bookings));
        assert_eq!(Input::parse("/calendar"), Input::Show(Tab::Schedule));
        assert_eq!(Input::parse("/next"), Input::NextMonth);
        assert_eq!(Input::parse("/prev"), Input::PreviousMonth);
        assert_eq!(Input::parse("/quick"), Input::Quick(None));
        assert_eq!(Input::parse("/quick 2"), Input::Quick(Some(2)));
        assert_eq!(Input::parse("/exit"), Input::Quit);
        assert_eq!(Input::parse("/dance"), Input::Unknown("dance".to_string()));
    }

    #[test]
    fn test_invalid_utf8_line_is_a_message() {
        match Input::from_bytes(b"\xff\xfe hello\n") {
            Input::Message(text) => assert!(text.ends_with("hello")),
            other => panic!("expected a message, got {:?}", other),
        }

        assert_eq!(Input::from_bytes(b"/quit\r\n"), Input::Quit);
        assert_eq!(
            Input::from_bytes(b"book a seat\n"),
            Input::Message("book a seat".to_string())
        );
    }

    #[tokio::test]
    async fn test_lines_after_invalid_utf8_are_still_read() {
        let input: &[u8] = b"book a seat\n\xff\xfe hello\n/quit\n";
        let mut reader = BufReader::new(input);
        let mut line = Vec::new();
        let mut parsed = Vec::new();

        while reader.read_until(b'\n', &mut line).await.unwrap() > 0 {
            parsed.push(Input::from_bytes(&line));
            line.clear();
        }

        assert_eq!(parsed.len(), 3);
        assert!(matches!(parsed[1], Input::Message(_)));
        assert_eq!(parsed[2], Input::Quit);
    }
}
