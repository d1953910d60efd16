//! Song resource operations.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{ApiResponse, SongQuery};
use playlist_core::{NewSong, PlaylistId, Song, SongId, SongPatch};
use tracing::debug;

/// Maps song calls to REST requests. Holds no state of its own.
pub struct SongService<'a> {
    api: &'a ApiClient,
}

impl<'a> SongService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch every song, across all playlists.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Song>>> {
        self.api.get("songs/").await
    }

    /// Fetch a single song.
    pub async fn get(&self, id: SongId) -> Result<ApiResponse<Song>> {
        let id = id.validate()?;
        self.api.get(&format!("songs/{id}/")).await
    }

    /// Fetch the songs belonging to one playlist.
    pub async fn list_by_playlist(&self, playlist: PlaylistId) -> Result<ApiResponse<Vec<Song>>> {
        let playlist = playlist.validate()?;
        self.api.get(&format!("songs/?playlist={playlist}")).await
    }

    /// Fetch songs matching a filter / search / ordering.
    pub async fn query(&self, query: &SongQuery) -> Result<ApiResponse<Vec<Song>>> {
        if let Some(playlist) = query.playlist {
            playlist.validate()?;
        }

        let params = query.to_query_string();
        let path = if params.is_empty() {
            "songs/".to_string()
        } else {
            format!("songs/?{params}")
        };

        debug!(path = %path, "Querying songs");
        self.api.get(&path).await
    }

    /// Create a song. Playlist, title, artist, duration, and genre are required.
    pub async fn create(&self, song: &NewSong) -> Result<ApiResponse<Song>> {
        song.validate()?;
        debug!(playlist = %song.playlist, title = %song.title, "Creating song");
        self.api.post("songs/", song).await
    }

    /// Update a song. Only the fields set on `patch` are sent.
    pub async fn update(&self, id: SongId, patch: &SongPatch) -> Result<ApiResponse<Song>> {
        let id = id.validate()?;
        patch.validate()?;
        self.api.put(&format!("songs/{id}/"), patch).await
    }

    /// Delete a song.
    pub async fn delete(&self, id: SongId) -> Result<ApiResponse<()>> {
        let id = id.validate()?;
        self.api.delete(&format!("songs/{id}/")).await
    }
}
