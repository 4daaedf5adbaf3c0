//! # receptionist_chat - Rule-based AI Receptionist
//!
//! This crate provides a mock receptionist that:
//! - Answers free-text messages from a fixed set of keyword rules
//! - Books seats/desks and meeting rooms from those messages
//! - Keeps bookings in memory for the lifetime of the process
//! - Renders the bookings list and a monthly schedule as text
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   Chat Session  │────▶│ Intent Matcher  │────▶│  Booking Store  │
//! └─────────────────┘     └─────────────────┘     └────────┬────────┘
//!                                                          │
//!                                   ┌──────────────────────┤
//!                                   ▼                      ▼
//!                          ┌───────────────┐      ┌───────────────┐
//!                          │ Bookings View │      │ Schedule View │
//!                          └───────────────┘      └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use receptionist_chat::{BookingStore, ChatSession, ReceptionistConfig};
//!
//! let config = ReceptionistConfig::default().without_delay();
//! let mut session = ChatSession::from_config(&config);
//! let mut store = BookingStore::new();
//!
//! let exchange = session.send("Book a seat for tomorrow at 9 AM", &mut store).unwrap();
//! assert!(exchange.booking.is_some());
//! assert_eq!(store.len(), 1);
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod intent;
pub mod schedule;
pub mod session;
pub mod state;
pub mod store;
pub mod types;

pub use config::*;
pub use display::*;
pub use error::*;
pub use intent::*;
pub use schedule::*;
pub use session::*;
pub use state::*;
pub use store::*;
pub use types::*;
