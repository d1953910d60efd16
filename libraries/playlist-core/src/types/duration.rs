//! Song length in `mm:ss` form

use crate::error::{Result, ValidationError};
use std::fmt;
use std::str::FromStr;

/// A song length as stored by the server (`"5:55"`, `"12:03"`).
///
/// Minutes are one or more digits; seconds are exactly two digits below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SongDuration {
    minutes: u32,
    seconds: u8,
}

impl SongDuration {
    /// Create from minutes and seconds. Seconds roll over into minutes.
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self {
            minutes: minutes.saturating_add(seconds / 60),
            seconds: (seconds % 60) as u8,
        }
    }

    /// Create from a total number of seconds. Minutes saturate at `u32::MAX`.
    pub fn from_secs(total: u64) -> Self {
        Self {
            minutes: u32::try_from(total / 60).unwrap_or(u32::MAX),
            seconds: (total % 60) as u8,
        }
    }

    /// Total length in seconds
    pub fn as_secs(self) -> u64 {
        u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Whole minutes
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    /// Remaining seconds (0-59)
    pub fn seconds(self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for SongDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

impl FromStr for SongDuration {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid =
            || ValidationError::invalid_field("duration", format!("expected mm:ss, got {s:?}"));

        let (minutes, seconds) = s.split_once(':').ok_or_else(invalid)?;
        if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
        let seconds: u8 = seconds.parse().map_err(|_| invalid())?;
        if seconds >= 60 {
            return Err(invalid());
        }

        Ok(Self { minutes, seconds })
    }
}
