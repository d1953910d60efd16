//! Root store: the application context every view works through.

use crate::error::Result as StorageResult;
use crate::playlists::PlaylistsModule;
use crate::songs::{SongMutation, SongsModule};
use crate::storage::KeyValueStore;
use crate::ui::UiModule;
use playlist_client::{ApiClient, Result, SongQuery};
use playlist_core::{
    Document, NewPlaylist, NewSong, Playlist, PlaylistId, PlaylistPatch, Song, SongId, SongPatch,
    Theme,
};
use tracing::info;

/// Application state plus the collaborators its actions need.
///
/// Owns the API client, durable storage, and the presentation document, and
/// exposes the three state modules. The theme is read from storage once, here.
///
/// # Example
///
/// ```ignore
/// use playlist_client::{ApiClient, ClientConfig};
/// use playlist_core::HeadlessDocument;
/// use playlist_store::{storage::MemoryStore, Store};
///
/// let api = ApiClient::new(ClientConfig::default())?;
/// let storage = Box::new(MemoryStore::new());
/// let mut store = Store::new(api, storage, Box::new(HeadlessDocument::new()));
/// store.initialize_theme();
///
/// store.fetch_playlists().await?;
/// println!("{} playlists", store.playlists().count());
/// ```
pub struct Store {
    api: ApiClient,
    storage: Box<dyn KeyValueStore>,
    document: Box<dyn Document>,
    playlists: PlaylistsModule,
    songs: SongsModule,
    ui: UiModule,
}

impl Store {
    pub fn new(
        api: ApiClient,
        storage: Box<dyn KeyValueStore>,
        document: Box<dyn Document>,
    ) -> Self {
        let ui = UiModule::load(storage.as_ref());
        Self {
            api,
            storage,
            document,
            playlists: PlaylistsModule::new(),
            songs: SongsModule::new(),
            ui,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn playlists(&self) -> &PlaylistsModule {
        &self.playlists
    }

    pub fn songs(&self) -> &SongsModule {
        &self.songs
    }

    pub fn ui(&self) -> &UiModule {
        &self.ui
    }

    /// Presentation surface, shared with the router for title updates
    pub fn document_mut(&mut self) -> &mut dyn Document {
        self.document.as_mut()
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    // ------------------------------------------------------------------
    // Playlist actions
    // ------------------------------------------------------------------

    pub async fn fetch_playlists(&mut self) -> Result<()> {
        self.playlists.fetch_playlists(&self.api).await
    }

    pub async fn fetch_playlist(&mut self, id: PlaylistId) -> Result<Playlist> {
        self.playlists.fetch_playlist(&self.api, id).await
    }

    pub async fn create_playlist(&mut self, playlist: &NewPlaylist) -> Result<Playlist> {
        self.playlists.create_playlist(&self.api, playlist).await
    }

    pub async fn update_playlist(
        &mut self,
        id: PlaylistId,
        patch: &PlaylistPatch,
    ) -> Result<Playlist> {
        self.playlists.update_playlist(&self.api, id, patch).await
    }

    /// Delete a playlist and drop its songs locally, as the server does.
    pub async fn delete_playlist(&mut self, id: PlaylistId) -> Result<()> {
        self.playlists.delete_playlist(&self.api, id).await?;
        self.songs.commit(SongMutation::RemoveByPlaylist(id));
        info!(id = %id, "Dropped songs of deleted playlist");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Song actions
    // ------------------------------------------------------------------

    pub async fn fetch_songs(&mut self) -> Result<()> {
        self.songs.fetch_songs(&self.api).await
    }

    pub async fn fetch_songs_by_playlist(&mut self, playlist: PlaylistId) -> Result<()> {
        self.songs.fetch_songs_by_playlist(&self.api, playlist).await
    }

    pub async fn search_songs(&mut self, query: &SongQuery) -> Result<()> {
        self.songs.search_songs(&self.api, query).await
    }

    pub async fn create_song(&mut self, song: &NewSong) -> Result<Song> {
        self.songs.create_song(&self.api, song).await
    }

    pub async fn update_song(&mut self, id: SongId, patch: &SongPatch) -> Result<Song> {
        self.songs.update_song(&self.api, id, patch).await
    }

    pub async fn delete_song(&mut self, id: SongId) -> Result<()> {
        self.songs.delete_song(&self.api, id).await
    }

    // ------------------------------------------------------------------
    // Theme actions
    // ------------------------------------------------------------------

    pub fn set_theme(&mut self, theme: Theme) -> StorageResult<()> {
        self.ui.set_theme(theme, self.storage.as_mut(), self.document.as_mut())
    }

    pub fn toggle_theme(&mut self) -> StorageResult<Theme> {
        self.ui.toggle_theme(self.storage.as_mut(), self.document.as_mut())
    }

    pub fn initialize_theme(&mut self) {
        self.ui.initialize_theme(self.document.as_mut());
    }
}
