/// ID types for Playlist Manager entities
use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playlist identifier (server-assigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(i64);

impl PlaylistId {
    /// Wrap a raw server identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Ensure the identifier refers to something the server could have assigned
    pub fn validate(self) -> Result<Self> {
        if self.0 <= 0 {
            return Err(ValidationError::invalid_id("playlist", self.0));
        }
        Ok(self)
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlaylistId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::invalid_id("playlist", s))
            .map(Self)
            .and_then(Self::validate)
    }
}

/// Song identifier (server-assigned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(i64);

impl SongId {
    /// Wrap a raw server identifier
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Ensure the identifier refers to something the server could have assigned
    pub fn validate(self) -> Result<Self> {
        if self.0 <= 0 {
            return Err(ValidationError::invalid_id("song", self.0));
        }
        Ok(self)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SongId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::invalid_id("song", s))
            .map(Self)
            .and_then(Self::validate)
    }
}
