//! Monthly schedule view.
//!
//! Booking dates are free-text labels, so the calendar resolves them
//! relative to "today" before marking days. Labels that cannot be
//! resolved ("sometime soon") are listed but never marked.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::error::{ChatError, ChatResult};
use crate::intent::capitalize;
use crate::store::BookingStore;
use crate::types::Booking;

/// Number of bookings listed under "Upcoming Bookings"
pub const UPCOMING_LIMIT: usize = 5;

const WEEKDAY_HEADER: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A resource shown under "Available Today"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    /// Count or availability badge
    pub badge: &'static str,
    pub detail: &'static str,
}

pub const AVAILABLE_TODAY: [Resource; 4] = [
    Resource {
        name: "Desk Spaces",
        badge: "12",
        detail: "Floor 3 • 8 AM - 6 PM",
    },
    Resource {
        name: "Conference Room A",
        badge: "Available",
        detail: "Next slot: 2 PM - 4 PM",
    },
    Resource {
        name: "Conference Room B",
        badge: "Available",
        detail: "Next slot: 10 AM - 12 PM",
    },
    Resource {
        name: "Meeting Pods",
        badge: "4",
        detail: "Floor 2 • Quick meetings",
    },
];

/// A calendar month being viewed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> ChatResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(ChatError::InvalidMonth { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Column of the first day, 0 = Sunday
    pub fn first_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        if next == self.first {
            // Last representable month
            return 31;
        }
        (next - self.first).num_days() as u32
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// "October 2026"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// Resolve a booking's date label to a calendar date.
///
/// Understands `today`, `tomorrow`, `next week`, weekday names (next
/// occurrence, today included) and `m/d` in the current year.
pub fn resolve_date(label: &str, today: NaiveDate) -> Option<NaiveDate> {
    let label = label.trim().to_lowercase();
    match label.as_str() {
        "today" => return Some(today),
        "tomorrow" => return today.succ_opt(),
        "next week" => return today.checked_add_signed(Duration::days(7)),
        _ => {}
    }

    if let Ok(weekday) = label.parse::<Weekday>() {
        let from = today.weekday().num_days_from_sunday();
        let ahead = (weekday.num_days_from_sunday() + 7 - from) % 7;
        return today.checked_add_signed(Duration::days(i64::from(ahead)));
    }

    let (month, day) = label.split_once('/')?;
    let month = month.parse().ok()?;
    let day = day.parse().ok()?;
    NaiveDate::from_ymd_opt(today.year(), month, day)
}

/// Days of `month` that have at least one booking
pub fn booked_days(bookings: &[Booking], month: CalendarMonth, today: NaiveDate) -> BTreeSet<u32> {
    bookings
        .iter()
        .filter_map(|b| resolve_date(b.date(), today))
        .filter(|date| month.contains(*date))
        .map(|date| date.day())
        .collect()
}

/// Render the month grid with today and booked days marked
pub fn render_calendar(month: CalendarMonth, bookings: &[Booking], today: NaiveDate) -> String {
    let booked = booked_days(bookings, month, today);
    let today_day = month.contains(today).then(|| today.day());

    let mut out = String::new();
    let _ = writeln!(out, "{:^35}", month.title());
    let _ = writeln!(out, "{:^35}", "Your Schedule Overview");
    out.push('\n');

    for name in WEEKDAY_HEADER {
        let _ = write!(out, "{:^5}", name);
    }
    out.push('\n');

    let lead = month.first_weekday();
    for _ in 0..lead {
        out.push_str("     ");
    }

    for day in 1..=month.days_in_month() {
        let (open, close) = if today_day == Some(day) { ('[', ']') } else { (' ', ' ') };
        let mark = if booked.contains(&day) { '*' } else { ' ' };
        let _ = write!(out, "{}{:>2}{}{}", open, day, close, mark);

        if (lead + day) % 7 == 0 {
            out.push('\n');
        }
    }
    if (lead + month.days_in_month()) % 7 != 0 {
        out.push('\n');
    }

    out.push_str("\n[n] today   * booking\n");
    out
}

/// Render the full schedule view: calendar, upcoming bookings and
/// resources available today
pub fn render_schedule(month: CalendarMonth, store: &BookingStore, today: NaiveDate) -> String {
    let mut out = render_calendar(month, store.bookings(), today);

    out.push_str("\nUpcoming Bookings\n");
    let upcoming = store.upcoming(UPCOMING_LIMIT);
    if upcoming.is_empty() {
        out.push_str("  No upcoming bookings\n");
    }
    for booking in upcoming {
        let _ = writeln!(
            out,
            "  • {} - {}\n    {} • {}",
            booking.kind().display_name(),
            capitalize(booking.date()),
            booking.time(),
            booking.location()
        );
    }

    out.push_str("\nAvailable Today\n");
    for resource in AVAILABLE_TODAY {
        let _ = writeln!(
            out,
            "  {:<20} {:>9}\n    {}",
            resource.name, resource.badge, resource.detail
        );
    }

    out
}
