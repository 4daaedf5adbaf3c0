//! In-memory booking store.
//!
//! Bookings live for the lifetime of the process. The store only ever
//! appends; insertion order is the display order.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::{Booking, BookingId, BookingKind, BookingRequest, BookingStatus};

/// Receives bookings synthesized by the chat session
#[cfg_attr(test, mockall::automock)]
pub trait BookingSink {
    /// Record a newly requested booking and return it with its identifier
    fn booking_created(&mut self, request: BookingRequest) -> Booking;
}

/// Counts shown under the bookings list
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub total: usize,
    pub confirmed: usize,
    pub seats: usize,
}

/// Ordered, append-only list of bookings
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a booking, assigning a fresh identifier
    pub fn add(&mut self, request: BookingRequest) -> &Booking {
        let booking = Booking::from_request(request);
        info!(
            "Booked {} for {} at {} ({})",
            booking.kind(),
            booking.date(),
            booking.time(),
            booking.id
        );
        self.bookings.push(booking);
        &self.bookings[self.bookings.len() - 1]
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, id: &BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.id == id)
    }

    /// The first `limit` bookings, in insertion order
    pub fn upcoming(&self, limit: usize) -> &[Booking] {
        &self.bookings[..self.bookings.len().min(limit)]
    }

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            total: self.bookings.len(),
            confirmed: self
                .bookings
                .iter()
                .filter(|b| b.status() == BookingStatus::Confirmed)
                .count(),
            seats: self
                .bookings
                .iter()
                .filter(|b| b.kind() == BookingKind::Seat)
                .count(),
        }
    }
}

impl BookingSink for BookingStore {
    fn booking_created(&mut self, request: BookingRequest) -> Booking {
        self.add(request).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn request(kind: BookingKind, date: &str, status: BookingStatus) -> BookingRequest {
        BookingRequest {
            kind,
            date: date.to_string(),
            time: "9:00 AM".to_string(),
            duration: "1 hour".to_string(),
            location: "Office Floor 3".to_string(),
            status,
        }
    }

    #[test]
    fn test_append_preserves_order_and_ids() {
        let mut store = BookingStore::new();
        let dates = ["today", "tomorrow", "friday", "10/24", "next week"];

        for date in dates {
            store.booking_created(request(BookingKind::Seat, date, BookingStatus::Confirmed));
        }

        assert_eq!(store.len(), dates.len());
        let stored: Vec<_> = store.bookings().iter().map(|b| b.date()).collect();
        assert_eq!(stored, dates);

        let ids: HashSet<_> = store.bookings().iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), dates.len());
    }

    #[test]
    fn test_get_by_id() {
        let mut store = BookingStore::new();
        let id = store
            .add(request(BookingKind::Meeting, "tomorrow", BookingStatus::Confirmed))
            .id;

        assert_eq!(store.get(&id).unwrap().kind(), BookingKind::Meeting);
        assert!(store.get(&uuid::Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_upcoming_limit() {
        let mut store = BookingStore::new();
        assert!(store.upcoming(5).is_empty());

        for i in 0..7 {
            let date = format!("1/{}", i + 1);
            store.add(request(BookingKind::Seat, &date, BookingStatus::Confirmed));
        }

        let upcoming = store.upcoming(5);
        assert_eq!(upcoming.len(), 5);
        assert_eq!(upcoming[0].date(), "1/1");
        assert_eq!(upcoming[4].date(), "1/5");
    }

    #[test]
    fn test_summary() {
        let mut store = BookingStore::new();
        assert_eq!(store.summary(), BookingSummary::default());

        store.add(request(BookingKind::Seat, "today", BookingStatus::Confirmed));
        store.add(request(BookingKind::Meeting, "tomorrow", BookingStatus::Confirmed));
        store.add(request(BookingKind::Seat, "friday", BookingStatus::Pending));

        assert_eq!(
            store.summary(),
            BookingSummary {
                total: 3,
                confirmed: 2,
                seats: 2,
            }
        );
    }
}
