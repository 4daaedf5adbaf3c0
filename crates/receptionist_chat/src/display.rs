//! Bookings list view.

use std::fmt::Write as _;

use crate::intent::capitalize;
use crate::store::BookingStore;
use crate::types::{Booking, BookingStatus};

/// Example requests shown when there are no bookings yet
pub const EMPTY_STATE_SUGGESTIONS: [&str; 3] = [
    "Book a seat for tomorrow",
    "Schedule a meeting for 3 PM",
    "I need a desk for next Monday",
];

/// Render the bookings view: one card per booking and the summary
pub fn render_bookings(store: &BookingStore) -> String {
    let mut out = String::new();

    if store.is_empty() {
        out.push_str("No Bookings Yet\n\n");
        out.push_str(
            "You don't have any bookings at the moment. \
             Use the Chat Assistant to create your first booking!\n\n",
        );
        out.push_str("Try saying:\n");
        for suggestion in EMPTY_STATE_SUGGESTIONS {
            let _ = writeln!(out, "  • \"{}\"", suggestion);
        }
        return out;
    }

    out.push_str("My Bookings\n");
    out.push_str("Manage all your seat bookings and meeting schedules\n");

    for booking in store.bookings() {
        out.push('\n');
        out.push_str(&render_card(booking));
    }

    let summary = store.summary();
    out.push_str("\nBooking Summary\n");
    let _ = writeln!(out, "  Total Bookings: {}", summary.total);
    let _ = writeln!(out, "  Confirmed:      {}", summary.confirmed);
    let _ = writeln!(out, "  Seats:          {}", summary.seats);

    out
}

/// Render a single booking card
pub fn render_card(booking: &Booking) -> String {
    let status_icon = match booking.status() {
        BookingStatus::Confirmed => "✔",
        BookingStatus::Pending => "✖",
    };

    format!(
        "{} Booking  [{} {}]\n  Date:            {}\n  Time & Duration: {} ({})\n  Location:        {}\n",
        booking.kind().display_name(),
        status_icon,
        booking.status().display_name(),
        capitalize(booking.date()),
        booking.time(),
        booking.duration(),
        booking.location()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookingKind, BookingRequest};

    #[test]
    fn test_empty_state() {
        let out = render_bookings(&BookingStore::new());
        assert!(out.starts_with("No Bookings Yet"));
        assert!(out.contains("I need a desk for next Monday"));
        assert!(!out.contains("Booking Summary"));
    }

    #[test]
    fn test_cards_and_summary() {
        let mut store = BookingStore::new();
        store.add(BookingRequest {
            kind: BookingKind::Seat,
            date: "tomorrow".to_string(),
            time: "9 am".to_string(),
            duration: "8 hours".to_string(),
            location: "Office Floor 3".to_string(),
            status: BookingStatus::Confirmed,
        });
        store.add(BookingRequest {
            kind: BookingKind::Meeting,
            date: "tomorrow".to_string(),
            time: "2:00 PM".to_string(),
            duration: "1 hour".to_string(),
            location: "Conference Room A".to_string(),
            status: BookingStatus::Pending,
        });

        let out = render_bookings(&store);
        assert!(out.contains("Seat Booking  [✔ Confirmed]"));
        assert!(out.contains("Meeting Booking  [✖ Pending]"));
        assert!(out.contains("Date:            Tomorrow"));
        assert!(out.contains("9 am (8 hours)"));
        assert!(out.contains("Total Bookings: 2"));
        assert!(out.contains("Confirmed:      1"));
        assert!(out.contains("Seats:          1"));

        // Cards follow insertion order
        let seat = out.find("Seat Booking").unwrap();
        let meeting = out.find("Meeting Booking").unwrap();
        assert!(seat < meeting);
    }
}
