/// Playlist domain types
use crate::error::{require_text, Result, ValidationError};
use crate::types::{empty_as_none, PlaylistId, Song};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Playlist as returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Server-assigned identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Free-form description
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cover image URL
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Creation timestamp (server-assigned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Songs owned by this playlist, when the server nests them
    #[serde(default)]
    pub songs: Vec<Song>,
}

/// Data for creating a new playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlaylist {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl NewPlaylist {
    /// Create a payload with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            thumbnail: None,
        }
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Check required fields before the payload is sent
    pub fn validate(&self) -> Result<()> {
        require_text("Playlist", "name", &self.name)?;
        validate_thumbnail(self.thumbnail.as_deref())
    }
}

/// Partial update for a playlist. Unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl PlaylistPatch {
    /// Change the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Change the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Change the thumbnail URL
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.thumbnail.is_none()
    }

    /// Fields that are present must satisfy the same rules as on create
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require_text("Playlist", "name", name)?;
        }
        validate_thumbnail(self.thumbnail.as_deref())
    }
}

/// Blank thumbnails are allowed; anything else must be an absolute http(s) URL.
fn validate_thumbnail(thumbnail: Option<&str>) -> Result<()> {
    let Some(raw) = thumbnail.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(());
    };

    let url = Url::parse(raw)
        .map_err(|e| ValidationError::invalid_field("thumbnail", e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ValidationError::invalid_field(
            "thumbnail",
            format!("unsupported scheme {other}"),
        )),
    }
}
