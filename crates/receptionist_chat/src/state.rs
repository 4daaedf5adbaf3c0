//! Application state.
//!
//! Everything the front end needs lives in one explicit value that the
//! caller owns and passes around: the booking store, the chat session, the
//! active tab and the calendar month on screen.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::ReceptionistConfig;
use crate::display::render_bookings;
use crate::schedule::{render_schedule, CalendarMonth};
use crate::session::{ChatSession, Exchange};
use crate::store::BookingStore;
use crate::types::{Sender, Tab};

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: BookingStore,
    pub chat: ChatSession,
    active_tab: Tab,
    calendar_month: CalendarMonth,
}

impl AppState {
    /// Fresh state with the calendar on the month containing `today`
    pub fn new(config: &ReceptionistConfig, today: NaiveDate) -> Self {
        Self {
            store: BookingStore::new(),
            chat: ChatSession::from_config(config),
            active_tab: Tab::Chat,
            calendar_month: CalendarMonth::containing(today),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!("Switching to {:?} tab", tab);
        self.active_tab = tab;
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        self.calendar_month
    }

    pub fn next_month(&mut self) {
        self.calendar_month = self.calendar_month.next();
    }

    pub fn previous_month(&mut self) {
        self.calendar_month = self.calendar_month.previous();
    }

    /// Send a chat message; bookings it creates land in the store
    pub fn send_message(&mut self, text: &str) -> Option<Exchange> {
        self.chat.send(text, &mut self.store)
    }

    /// Same as [`send_message`](Self::send_message), with the reply delay
    pub async fn send_message_with_delay(&mut self, text: &str) -> Option<Exchange> {
        self.chat.send_with_delay(text, &mut self.store).await
    }

    /// Tab bar labels, with the active tab highlighted
    pub fn render_tabs(&self) -> String {
        Tab::ALL
            .iter()
            .map(|tab| {
                let label = tab.label(self.store.len());
                if *tab == self.active_tab {
                    format!("[{}]", label)
                } else {
                    format!(" {} ", label)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Render whichever tab is active
    pub fn render_active_view(&self, today: NaiveDate) -> String {
        match self.active_tab {
            Tab::Chat => self.render_transcript(),
            Tab::Bookings => render_bookings(&self.store),
            Tab::Schedule => render_schedule(self.calendar_month, &self.store, today),
        }
    }

    /// The chat transcript, oldest first
    pub fn render_transcript(&self) -> String {
        self.chat
            .messages()
            .iter()
            .map(|m| {
                let who = match m.sender {
                    Sender::User => "You",
                    Sender::Assistant => "Receptionist",
                };
                format!("{} ({}):\n{}\n", who, m.clock_time(), m.text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
