//! Core types for the receptionist chat.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a booking
pub type BookingId = Uuid;

/// What a booking reserves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingKind {
    /// A seat or desk on an office floor
    Seat,
    /// A meeting room slot
    Meeting,
}

impl BookingKind {
    /// Get the display name for this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Seat => "Seat",
            Self::Meeting => "Meeting",
        }
    }
}

impl fmt::Display for BookingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seat => write!(f, "seat"),
            Self::Meeting => write!(f, "meeting"),
        }
    }
}

/// Confirmation state of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
}

impl BookingStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
        }
    }
}

/// Booking details synthesized from a chat message, before the store
/// has assigned an identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingRequest {
    #[serde(rename = "type")]
    pub kind: BookingKind,
    /// Free-text date label ("today", "friday", "10/24", ...)
    pub date: String,
    /// Free-text time label ("9 am", "2:00 PM", ...)
    pub time: String,
    pub duration: String,
    pub location: String,
    pub status: BookingStatus,
}

/// A booking held in the session's store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking ID (UUID)
    pub id: BookingId,
    #[serde(flatten)]
    pub details: BookingRequest,
    /// When the booking was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a booking from a request with a fresh identifier
    pub fn from_request(details: BookingRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            details,
            created_at: Utc::now(),
        }
    }

    pub fn kind(&self) -> BookingKind {
        self.details.kind
    }

    pub fn status(&self) -> BookingStatus {
        self.details.status
    }

    pub fn date(&self) -> &str {
        &self.details.date
    }

    pub fn time(&self) -> &str {
        &self.details.time
    }

    pub fn duration(&self) -> &str {
        &self.details.duration
    }

    pub fn location(&self) -> &str {
        &self.details.location
    }
}

/// Who sent a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID (UUID)
    pub id: String,
    /// Who sent the message
    pub sender: Sender,
    /// Message text
    pub text: String,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new user message
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a new assistant message
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender: Sender::Assistant,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Local wall-clock time of the message as `HH:MM`
    pub fn clock_time(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

/// Views of the application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Chat,
    Bookings,
    Schedule,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Bookings, Tab::Schedule];

    /// Tab label; the bookings tab carries the current booking count
    pub fn label(&self, booking_count: usize) -> String {
        match self {
            Self::Chat => "Chat Assistant".to_string(),
            Self::Bookings => format!("My Bookings ({})", booking_count),
            Self::Schedule => "Schedule".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat_request() -> BookingRequest {
        BookingRequest {
            kind: BookingKind::Seat,
            date: "today".to_string(),
            time: "9:00 AM".to_string(),
            duration: "8 hours".to_string(),
            location: "Office Floor 3".to_string(),
            status: BookingStatus::Confirmed,
        }
    }

    #[test]
    fn test_booking_serializes_flat() {
        let booking = Booking::from_request(seat_request());
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["type"], "seat");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["location"], "Office Floor 3");
        assert!(json.get("details").is_none());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_from_request_assigns_distinct_ids() {
        let a = Booking::from_request(seat_request());
        let b = Booking::from_request(seat_request());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::Bookings.label(3), "My Bookings (3)");
        assert_eq!(Tab::Chat.label(3), "Chat Assistant");
        assert_eq!(Tab::default(), Tab::Chat);
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hello");
        assert_eq!(msg.sender, Sender::User);
        assert_eq!(msg.text, "hello");
        assert_eq!(msg.clock_time().len(), 5);

        let msg = Message::assistant("hi");
        assert_eq!(msg.sender, Sender::Assistant);
    }
}
