//! Chat session.
//!
//! Holds the transcript and routes each user message through the
//! [`IntentMatcher`]. When a reply carries a booking, the session hands it
//! to a [`BookingSink`]; the session itself never stores bookings.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::config::ReceptionistConfig;
use crate::intent::{Intent, IntentMatcher};
use crate::store::BookingSink;
use crate::types::{Booking, Message};

/// Suggestions offered below the chat input
pub const QUICK_ACTIONS: [&str; 4] = [
    "Book a seat for tomorrow",
    "Schedule a meeting",
    "Check availability",
    "View my bookings",
];

/// Result of one user message
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub intent: Intent,
    /// The user's message as added to the transcript
    pub user: Message,
    /// The assistant's reply as added to the transcript
    pub reply: Message,
    /// Booking created for this message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

/// A single conversation with the receptionist
#[derive(Debug, Clone)]
pub struct ChatSession {
    matcher: IntentMatcher,
    messages: Vec<Message>,
    reply_delay: Duration,
}

impl ChatSession {
    /// Start a session with the default configuration
    pub fn new() -> Self {
        Self::from_config(&ReceptionistConfig::default())
    }

    /// Start a session; the transcript opens with the configured greeting
    pub fn from_config(config: &ReceptionistConfig) -> Self {
        Self {
            matcher: IntentMatcher::from_config(config),
            messages: vec![Message::assistant(&config.greeting)],
            reply_delay: config.reply_delay(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn quick_actions(&self) -> &'static [&'static str] {
        &QUICK_ACTIONS
    }

    /// Send a message and reply immediately.
    ///
    /// Whitespace-only input is ignored and returns `None`.
    pub fn send<S>(&mut self, text: &str, sink: &mut S) -> Option<Exchange>
    where
        S: BookingSink + ?Sized,
    {
        let user = self.accept(text)?;
        Some(self.answer(user, sink))
    }

    /// Send a message and reply after the configured "thinking" delay.
    pub async fn send_with_delay<S>(&mut self, text: &str, sink: &mut S) -> Option<Exchange>
    where
        S: BookingSink + ?Sized,
    {
        let user = self.accept(text)?;
        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }
        Some(self.answer(user, sink))
    }

    fn accept(&mut self, text: &str) -> Option<Message> {
        if text.trim().is_empty() {
            debug!("Ignoring empty message");
            return None;
        }

        let user = Message::user(text);
        self.messages.push(user.clone());
        Some(user)
    }

    fn answer<S>(&mut self, user: Message, sink: &mut S) -> Exchange
    where
        S: BookingSink + ?Sized,
    {
        let reply = self.matcher.respond(&user.text);
        let booking = reply.booking.map(|request| sink.booking_created(request));

        let message = Message::assistant(reply.text);
        self.messages.push(message.clone());

        Exchange {
            intent: reply.intent,
            user,
            reply: message,
            booking,
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
