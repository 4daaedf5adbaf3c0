//! Rule-based intent matching.
//!
//! Each message is lowercased and checked against an ordered list of
//! keyword rules; the first rule that matches decides the reply. Seat and
//! meeting requests also yield a [`BookingRequest`]. Matching is a pure
//! function of the input text and never fails: anything unrecognized gets
//! the fallback reply.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BookingDefaults, ReceptionistConfig};
use crate::types::{BookingKind, BookingRequest, BookingStatus};

const DATE_PATTERN: &str =
    r"tomorrow|today|monday|tuesday|wednesday|thursday|friday|(\d{1,2}/\d{1,2})|next week";
const TIME_PATTERN: &str = r"(\d{1,2})(:\d{2})?\s*(am|pm)";

/// What the user asked for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    BookSeat,
    ScheduleMeeting,
    CheckAvailability,
    ViewBookings,
    CancelBooking,
    Help,
    Fallback,
}

impl Intent {
    /// Rules in evaluation order; `Fallback` is implied after the last one
    pub const RULES: [Intent; 6] = [
        Intent::BookSeat,
        Intent::ScheduleMeeting,
        Intent::CheckAvailability,
        Intent::ViewBookings,
        Intent::CancelBooking,
        Intent::Help,
    ];

    /// Whether this rule matches an already-lowercased message
    fn matches(&self, msg: &str) -> bool {
        match self {
            Self::BookSeat => {
                msg.contains("book") && (msg.contains("seat") || msg.contains("desk"))
            }
            Self::ScheduleMeeting => {
                msg.contains("schedule") || msg.contains("meeting") || msg.contains("book a room")
            }
            Self::CheckAvailability => {
                msg.contains("available") || msg.contains("availability") || msg.contains("free")
            }
            Self::ViewBookings => {
                msg.contains("my booking") || msg.contains("reservation") || msg.contains("show")
            }
            Self::CancelBooking => msg.contains("cancel"),
            Self::Help => msg.contains("help") || msg.contains("what can you do"),
            Self::Fallback => true,
        }
    }
}

/// The assistant's answer to one message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
    /// Booking to create, for seat and meeting intents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingRequest>,
}

/// Matches free text against the receptionist's rules
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    date_re: Regex,
    time_re: Regex,
    seat: BookingDefaults,
    meeting: BookingDefaults,
}

impl IntentMatcher {
    /// Create a matcher with the built-in placeholders
    pub fn new() -> Self {
        Self::with_defaults(BookingDefaults::seat(), BookingDefaults::meeting())
    }

    /// Create a matcher with custom seat and meeting placeholders
    pub fn with_defaults(seat: BookingDefaults, meeting: BookingDefaults) -> Self {
        Self {
            date_re: Regex::new(DATE_PATTERN).expect("date pattern is valid"),
            time_re: Regex::new(TIME_PATTERN).expect("time pattern is valid"),
            seat,
            meeting,
        }
    }

    pub fn from_config(config: &ReceptionistConfig) -> Self {
        Self::with_defaults(config.seat_defaults(), config.meeting_defaults())
    }

    /// Classify a message without building a reply
    pub fn classify(&self, text: &str) -> Intent {
        first_matching_rule(&text.to_lowercase())
    }

    /// Produce the reply, and possibly a booking, for a message
    pub fn respond(&self, text: &str) -> Reply {
        let msg = text.to_lowercase();
        let intent = first_matching_rule(&msg);
        debug!("Matched intent {:?}", intent);

        match intent {
            Intent::BookSeat => {
                let booking = self.seat_request(&msg);
                Reply {
                    intent,
                    text: seat_confirmation(&booking),
                    booking: Some(booking),
                }
            }
            Intent::ScheduleMeeting => {
                let booking = self.meeting_request();
                Reply {
                    intent,
                    text: meeting_confirmation(&booking),
                    booking: Some(booking),
                }
            }
            _ => Reply {
                intent,
                text: canned_reply(intent).to_string(),
                booking: None,
            },
        }
    }

    /// Extract the first date label (lowercase), if any
    pub fn extract_date(&self, text: &str) -> Option<String> {
        let msg = text.to_lowercase();
        self.date_re.find(&msg).map(|m| m.as_str().to_string())
    }

    /// Extract the first time-of-day label (lowercase), if any
    pub fn extract_time(&self, text: &str) -> Option<String> {
        let msg = text.to_lowercase();
        self.time_re.find(&msg).map(|m| m.as_str().to_string())
    }

    fn seat_request(&self, msg: &str) -> BookingRequest {
        let date = self
            .date_re
            .find(msg)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| self.seat.date.clone());
        let time = self
            .time_re
            .find(msg)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| self.seat.time.clone());

        BookingRequest {
            kind: BookingKind::Seat,
            date,
            time,
            duration: self.seat.duration.clone(),
            location: self.seat.location.clone(),
            status: BookingStatus::Confirmed,
        }
    }

    fn meeting_request(&self) -> BookingRequest {
        BookingRequest {
            kind: BookingKind::Meeting,
            date: self.meeting.date.clone(),
            time: self.meeting.time.clone(),
            duration: self.meeting.duration.clone(),
            location: self.meeting.location.clone(),
            status: BookingStatus::Confirmed,
        }
    }
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn first_matching_rule(msg: &str) -> Intent {
    Intent::RULES
        .into_iter()
        .find(|rule| rule.matches(msg))
        .unwrap_or(Intent::Fallback)
}

/// Upper-case the first letter of a label ("tomorrow" -> "Tomorrow")
pub fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn seat_confirmation(booking: &BookingRequest) -> String {
    format!(
        "Perfect! I've booked a seat for you:\n\n\
         📅 Date: {}\n⏰ Time: {}\n📍 Location: {}\n⏱️ Duration: {}\n\n\
         Your booking confirmation has been sent. Is there anything else you need?",
        booking.date, booking.time, booking.location, booking.duration
    )
}

fn meeting_confirmation(booking: &BookingRequest) -> String {
    format!(
        "Great! I've scheduled your meeting:\n\n\
         📅 Date: {}\n⏰ Time: {}\n📍 Location: {}\n⏱️ Duration: {}\n\n\
         Meeting invite sent! Would you like to add any attendees?",
        capitalize(&booking.date),
        booking.time,
        booking.location,
        booking.duration
    )
}

fn canned_reply(intent: Intent) -> &'static str {
    match intent {
        Intent::CheckAvailability => AVAILABILITY_REPLY,
        Intent::ViewBookings => VIEW_BOOKINGS_REPLY,
        Intent::CancelBooking => CANCEL_REPLY,
        Intent::Help => HELP_REPLY,
        Intent::BookSeat | Intent::ScheduleMeeting | Intent::Fallback => FALLBACK_REPLY,
    }
}

// Canned replies

const AVAILABILITY_REPLY: &str = "Let me check availability for you:

✅ Today: 5 seats available on Floor 3
✅ Tomorrow: 8 seats available on Floor 3
✅ Conference Room A: Available 2-4 PM
✅ Conference Room B: Available all day

Would you like to book any of these?";

const VIEW_BOOKINGS_REPLY: &str = "You can view all your bookings in the \"My Bookings\" tab above. You currently have bookings scheduled. Would you like to make a new booking?";

const CANCEL_REPLY: &str = "To cancel a booking, please go to the \"My Bookings\" tab where you can manage all your reservations. Which booking would you like to cancel?";

const HELP_REPLY: &str = "I can help you with:

🪑 Book a seat/desk for any day
📅 Schedule meetings and conference rooms
🔍 Check availability
📋 View your bookings
❌ Cancel reservations

Just tell me what you need! For example:
- \"Book a seat for tomorrow\"
- \"Schedule a meeting for 3 PM\"
- \"Check availability for Friday\"";

const FALLBACK_REPLY: &str = "I understand you're interested in booking or scheduling. Could you please specify:

• Do you want to book a seat/desk?
• Or schedule a meeting room?
• What date and time would you prefer?

Example: \"Book a seat for tomorrow at 9 AM\"";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_seat_with_date_and_time() {
        let matcher = IntentMatcher::new();
        let reply = matcher.respond("Book a seat for tomorrow at 9 AM");

        assert_eq!(reply.intent, Intent::BookSeat);
        let booking = reply.booking.unwrap();
        assert_eq!(booking.kind, BookingKind::Seat);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.date, "tomorrow");
        assert_eq!(booking.time, "9 am");
        assert_eq!(booking.duration, "8 hours");
        assert_eq!(booking.location, "Office Floor 3");
        assert!(reply.text.contains("Date: tomorrow"));
        assert!(reply.text.contains("Time: 9 am"));
    }

    #[test]
    fn test_book_desk_uses_placeholders() {
        let matcher = IntentMatcher::new();
        let booking = matcher.respond("please BOOK me a DESK").booking.unwrap();

        assert_eq!(booking.kind, BookingKind::Seat);
        assert_eq!(booking.date, "today");
        assert_eq!(booking.time, "9:00 AM");
    }

    #[test]
    fn test_seat_date_variants() {
        let matcher = IntentMatcher::new();

        let booking = matcher.respond("book a seat on Friday at 10:30pm").booking.unwrap();
        assert_eq!(booking.date, "friday");
        assert_eq!(booking.time, "10:30pm");

        let booking = matcher.respond("book a desk for 10/24").booking.unwrap();
        assert_eq!(booking.date, "10/24");

        let booking = matcher.respond("book a desk for next week").booking.unwrap();
        assert_eq!(booking.date, "next week");
    }

    #[test]
    fn test_first_date_match_wins() {
        let matcher = IntentMatcher::new();
        let booking = matcher
            .respond("book a seat today, or maybe tomorrow")
            .booking
            .unwrap();
        assert_eq!(booking.date, "today");
    }

    #[test]
    fn test_schedule_meeting() {
        let matcher = IntentMatcher::new();

        for input in ["Schedule a meeting", "team meeting at 4pm", "can I book a room?"] {
            let reply = matcher.respond(input);
            assert_eq!(reply.intent, Intent::ScheduleMeeting, "input: {}", input);

            let booking = reply.booking.unwrap();
            assert_eq!(booking.kind, BookingKind::Meeting);
            assert_eq!(booking.date, "tomorrow");
            assert_eq!(booking.time, "2:00 PM");
            assert_eq!(booking.location, "Conference Room A");
            assert!(reply.text.contains("Date: Tomorrow"));
        }
    }

    #[test]
    fn test_seat_rule_precedes_meeting_rule() {
        let matcher = IntentMatcher::new();
        let reply = matcher.respond("book a desk near the meeting rooms");
        assert_eq!(reply.intent, Intent::BookSeat);
    }

    #[test]
    fn test_canned_intents_have_no_booking() {
        let matcher = IntentMatcher::new();
        let cases = [
            ("Check availability", Intent::CheckAvailability, "5 seats available"),
            ("Is anything free?", Intent::CheckAvailability, "Conference Room B"),
            ("View my bookings", Intent::ViewBookings, "My Bookings"),
            ("show me everything", Intent::ViewBookings, "My Bookings"),
            ("I want to cancel", Intent::CancelBooking, "cancel a booking"),
            ("help", Intent::Help, "I can help you with"),
            ("what can you do", Intent::Help, "Check availability"),
        ];

        for (input, intent, fragment) in cases {
            let reply = matcher.respond(input);
            assert_eq!(reply.intent, intent, "input: {}", input);
            assert!(reply.booking.is_none());
            assert!(reply.text.contains(fragment), "input: {}", input);
        }
    }

    #[test]
    fn test_fallback() {
        let matcher = IntentMatcher::new();
        let reply = matcher.respond("hello there");

        assert_eq!(reply.intent, Intent::Fallback);
        assert!(reply.booking.is_none());
        assert!(reply.text.contains("Book a seat for tomorrow at 9 AM"));

        assert_eq!(matcher.respond("").intent, Intent::Fallback);
    }

    #[test]
    fn test_classify_agrees_with_respond() {
        let matcher = IntentMatcher::new();
        for input in ["book a seat", "meeting", "free?", "show", "cancel", "help", "hi"] {
            assert_eq!(matcher.classify(input), matcher.respond(input).intent);
        }
    }

    #[test]
    fn test_custom_defaults() {
        let mut seat = BookingDefaults::seat();
        seat.location = "Office Floor 7".to_string();
        let matcher = IntentMatcher::with_defaults(seat, BookingDefaults::meeting());

        let reply = matcher.respond("book a seat");
        assert_eq!(reply.booking.unwrap().location, "Office Floor 7");
        assert!(reply.text.contains("Office Floor 7"));
    }

    #[test]
    fn test_extractors() {
        let matcher = IntentMatcher::new();
        assert_eq!(matcher.extract_date("Tuesday please"), Some("tuesday".to_string()));
        assert_eq!(matcher.extract_date("saturday"), None);
        assert_eq!(matcher.extract_time("at 3 PM"), Some("3 pm".to_string()));
        assert_eq!(matcher.extract_time("at noon"), None);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("tomorrow"), "Tomorrow");
        assert_eq!(capitalize(""), "");
    }
}
