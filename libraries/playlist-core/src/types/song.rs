//! Song types

use crate::error::{require_text, Result};
use crate::types::{empty_as_none, PlaylistId, SongDuration, SongId};
use serde::{Deserialize, Serialize};

/// A song as returned by the server. Always belongs to exactly one playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    /// Owning playlist
    pub playlist: PlaylistId,
    pub title: String,
    pub artist: String,
    #[serde(default, deserialize_with = "empty_as_none", skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Length as `mm:ss`
    pub duration: String,
    pub genre: String,
}

impl Song {
    /// Parsed length, if the stored duration is well formed
    pub fn length(&self) -> Option<SongDuration> {
        self.duration.parse().ok()
    }
}

/// Data for creating a new song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub playlist: PlaylistId,
    pub title: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    pub duration: String,
    pub genre: String,
}

impl NewSong {
    /// Create a payload with every required field
    pub fn new(
        playlist: PlaylistId,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            playlist,
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration: duration.into(),
            genre: genre.into(),
        }
    }

    /// Set the album
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Check required fields before the payload is sent
    pub fn validate(&self) -> Result<()> {
        self.playlist.validate()?;
        require_text("Song", "title", &self.title)?;
        require_text("Song", "artist", &self.artist)?;
        require_text("Song", "duration", &self.duration)?;
        self.duration.parse::<SongDuration>()?;
        require_text("Song", "genre", &self.genre)
    }
}

/// Partial update for a song. Unset fields are left unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<PlaylistId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl SongPatch {
    /// Move the song to another playlist
    #[must_use]
    pub fn with_playlist(mut self, playlist: PlaylistId) -> Self {
        self.playlist = Some(playlist);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.playlist.is_none()
            && self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.duration.is_none()
            && self.genre.is_none()
    }

    /// Fields that are present must satisfy the same rules as on create
    pub fn validate(&self) -> Result<()> {
        if let Some(playlist) = self.playlist {
            playlist.validate()?;
        }
        if let Some(title) = &self.title {
            require_text("Song", "title", title)?;
        }
        if let Some(artist) = &self.artist {
            require_text("Song", "artist", artist)?;
        }
        if let Some(duration) = &self.duration {
            duration.parse::<SongDuration>()?;
        }
        if let Some(genre) = &self.genre {
            require_text("Song", "genre", genre)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn valid_song() -> NewSong {
        NewSong::new(PlaylistId::new(1), "Bohemian Rhapsody", "Queen", "5:55", "Rock")
    }

    #[test]
    fn complete_song_is_valid() {
        assert!(valid_song().validate().is_ok());
        assert!(valid_song().with_album("A Night at the Opera").validate().is_ok());
    }

    #[test]
    fn song_requires_positive_playlist() {
        let mut song = valid_song();
        song.playlist = PlaylistId::new(0);
        assert!(matches!(
            song.validate(),
            Err(ValidationError::InvalidId { entity: "playlist", .. })
        ));
    }

    #[test]
    fn song_requires_text_fields() {
        let mut song = valid_song();
        song.artist = String::new();
        assert_eq!(
            song.validate().unwrap_err(),
            ValidationError::missing("Song", "artist")
        );

        let mut song = valid_song();
        song.genre = " ".into();
        assert_eq!(
            song.validate().unwrap_err(),
            ValidationError::missing("Song", "genre")
        );
    }

    #[test]
    fn song_duration_must_be_mm_ss() {
        let mut song = valid_song();
        song.duration = "355".into();
        assert!(matches!(
            song.validate(),
            Err(ValidationError::InvalidField { field: "duration", .. })
        ));
    }

    #[test]
    fn patch_validates_present_fields_only() {
        assert!(SongPatch::default().with_title("New").validate().is_ok());
        assert!(SongPatch::default().with_duration("7:1").validate().is_err());
        assert!(SongPatch::default()
            .with_playlist(PlaylistId::new(-1))
            .validate()
            .is_err());
    }

    #[test]
    fn song_length_parses_duration() {
        let song: Song = serde_json::from_value(serde_json::json!({
            "id": 9,
            "playlist": 1,
            "title": "Intro",
            "artist": "Band",
            "album": "",
            "duration": "1:30",
            "genre": "Pop"
        }))
        .unwrap();

        assert!(song.album.is_none());
        assert_eq!(song.length().map(SongDuration::as_secs), Some(90));
    }
}
