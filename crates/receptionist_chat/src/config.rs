//! Receptionist configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides:
//!
//! ```yaml
//! replyDelayMs: 250
//! seat:
//!   location: Office Floor 5
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChatError, ChatResult};

pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI receptionist. I can help you book seats, schedule meetings, and manage your reservations. What would you like to do today?";

/// Placeholder values for a synthesized booking.
///
/// For seats, `date` and `time` are only used when the message does not
/// name them. Meetings always use these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingDefaults {
    pub date: String,
    pub time: String,
    pub duration: String,
    pub location: String,
}

impl BookingDefaults {
    pub fn seat() -> Self {
        Self {
            date: "today".to_string(),
            time: "9:00 AM".to_string(),
            duration: "8 hours".to_string(),
            location: "Office Floor 3".to_string(),
        }
    }

    pub fn meeting() -> Self {
        Self {
            date: "tomorrow".to_string(),
            time: "2:00 PM".to_string(),
            duration: "1 hour".to_string(),
            location: "Conference Room A".to_string(),
        }
    }
}

/// Per-field overrides of [`BookingDefaults`] as written in a config file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BookingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl BookingOverrides {
    /// Apply these overrides on top of `base`
    pub fn apply(&self, base: BookingDefaults) -> BookingDefaults {
        BookingDefaults {
            date: self.date.clone().unwrap_or(base.date),
            time: self.time.clone().unwrap_or(base.time),
            duration: self.duration.clone().unwrap_or(base.duration),
            location: self.location.clone().unwrap_or(base.location),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReceptionistConfig {
    /// Artificial "thinking" delay before the assistant replies
    pub reply_delay_ms: u64,
    /// First assistant message of every session
    pub greeting: String,
    pub seat: BookingOverrides,
    pub meeting: BookingOverrides,
}

impl Default for ReceptionistConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            greeting: DEFAULT_GREETING.to_string(),
            seat: BookingOverrides::default(),
            meeting: BookingOverrides::default(),
        }
    }
}

impl ReceptionistConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ChatResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ChatError::ConfigNotFound(path.to_path_buf()));
        }

        debug!("Reading config from {:?}", path);
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| ChatError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ChatResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Same configuration with the reply delay removed
    pub fn without_delay(mut self) -> Self {
        self.reply_delay_ms = 0;
        self
    }

    /// Effective seat placeholders
    pub fn seat_defaults(&self) -> BookingDefaults {
        self.seat.apply(BookingDefaults::seat())
    }

    /// Effective meeting placeholders
    pub fn meeting_defaults(&self) -> BookingDefaults {
        self.meeting.apply(BookingDefaults::meeting())
    }
}
