//! Playlist resource operations.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::ApiResponse;
use playlist_core::{NewPlaylist, Playlist, PlaylistId, PlaylistPatch};
use tracing::debug;

/// Maps playlist calls to REST requests. Holds no state of its own.
pub struct PlaylistService<'a> {
    api: &'a ApiClient,
}

impl<'a> PlaylistService<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Fetch all playlists.
    pub async fn list(&self) -> Result<ApiResponse<Vec<Playlist>>> {
        self.api.get("playlists/").await
    }

    /// Fetch one playlist, with its songs nested.
    pub async fn get(&self, id: PlaylistId) -> Result<ApiResponse<Playlist>> {
        let id = id.validate()?;
        self.api.get(&format!("playlists/{id}/")).await
    }

    /// Create a playlist. `name` is required.
    pub async fn create(&self, playlist: &NewPlaylist) -> Result<ApiResponse<Playlist>> {
        playlist.validate()?;
        debug!(name = %playlist.name, "Creating playlist");
        self.api.post("playlists/", playlist).await
    }

    /// Update a playlist. Only the fields set on `patch` are sent.
    pub async fn update(
        &self,
        id: PlaylistId,
        patch: &PlaylistPatch,
    ) -> Result<ApiResponse<Playlist>> {
        let id = id.validate()?;
        patch.validate()?;
        self.api.put(&format!("playlists/{id}/"), patch).await
    }

    /// Delete a playlist. The server removes its songs as well.
    pub async fn delete(&self, id: PlaylistId) -> Result<ApiResponse<()>> {
        let id = id.validate()?;
        self.api.delete(&format!("playlists/{id}/")).await
    }
}
