//! Playlists state module
//!
//! Holds the fetched playlist collection and the playlist currently open in
//! the detail view. State is written only by [`PlaylistsModule::commit`];
//! actions call the API first and commit once the response is in hand.

use playlist_client::{ApiClient, Result};
use playlist_core::{NewPlaylist, Playlist, PlaylistId, PlaylistPatch};
use tracing::info;

/// State writers for the playlists module
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistMutation {
    /// Replace the whole collection
    SetPlaylists(Vec<Playlist>),
    /// Set (or clear) the playlist open in the detail view
    SetCurrent(Option<Playlist>),
    /// Append a newly created playlist
    Add(Playlist),
    /// Replace the entry with the same id; appended when absent
    Upsert(Playlist),
    /// Replace the entry with the same id; ignored when absent
    Replace(Playlist),
    /// Drop the entry with this id
    Remove(PlaylistId),
}

/// In-memory playlist state
#[derive(Debug, Clone, Default)]
pub struct PlaylistsModule {
    playlists: Vec<Playlist>,
    current: Option<Playlist>,
}

impl PlaylistsModule {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// All playlists, in server order
    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn by_id(&self, id: PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Playlist open in the detail view
    pub fn current(&self) -> Option<&Playlist> {
        self.current.as_ref()
    }

    pub fn count(&self) -> usize {
        self.playlists.len()
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Apply a mutation. This is the only code path that writes state.
    pub fn commit(&mut self, mutation: PlaylistMutation) {
        match mutation {
            PlaylistMutation::SetPlaylists(playlists) => self.playlists = playlists,
            PlaylistMutation::SetCurrent(playlist) => self.current = playlist,
            PlaylistMutation::Add(playlist) => self.playlists.push(playlist),
            PlaylistMutation::Upsert(playlist) => {
                if self.current.as_ref().is_some_and(|c| c.id == playlist.id) {
                    self.current = Some(playlist.clone());
                }
                match self.playlists.iter_mut().find(|p| p.id == playlist.id) {
                    Some(existing) => *existing = playlist,
                    None => self.playlists.push(playlist),
                }
            }
            PlaylistMutation::Replace(playlist) => {
                if self.current.as_ref().is_some_and(|c| c.id == playlist.id) {
                    self.current = Some(playlist.clone());
                }
                if let Some(existing) = self.playlists.iter_mut().find(|p| p.id == playlist.id) {
                    *existing = playlist;
                }
            }
            PlaylistMutation::Remove(id) => {
                self.playlists.retain(|p| p.id != id);
                if self.current.as_ref().is_some_and(|c| c.id == id) {
                    self.current = None;
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Load every playlist, replacing the collection
    pub async fn fetch_playlists(&mut self, api: &ApiClient) -> Result<()> {
        let response = api.playlists().list().await?;
        info!(count = response.data.len(), "Fetched playlists");
        self.commit(PlaylistMutation::SetPlaylists(response.data));
        Ok(())
    }

    /// Load one playlist (with its songs) and make it current
    pub async fn fetch_playlist(&mut self, api: &ApiClient, id: PlaylistId) -> Result<Playlist> {
        let playlist = api.playlists().get(id).await?.data;
        self.commit(PlaylistMutation::SetCurrent(Some(playlist.clone())));
        self.commit(PlaylistMutation::Upsert(playlist.clone()));
        Ok(playlist)
    }

    pub async fn create_playlist(
        &mut self,
        api: &ApiClient,
        playlist: &NewPlaylist,
    ) -> Result<Playlist> {
        let created = api.playlists().create(playlist).await?.data;
        info!(id = %created.id, name = %created.name, "Created playlist");
        self.commit(PlaylistMutation::Add(created.clone()));
        Ok(created)
    }

    pub async fn update_playlist(
        &mut self,
        api: &ApiClient,
        id: PlaylistId,
        patch: &PlaylistPatch,
    ) -> Result<Playlist> {
        let updated = api.playlists().update(id, patch).await?.data;
        info!(id = %updated.id, "Updated playlist");
        self.commit(PlaylistMutation::Replace(updated.clone()));
        Ok(updated)
    }

    pub async fn delete_playlist(&mut self, api: &ApiClient, id: PlaylistId) -> Result<()> {
        api.playlists().delete(id).await?;
        info!(id = %id, "Deleted playlist");
        self.commit(PlaylistMutation::Remove(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(id: i64, name: &str) -> Playlist {
        Playlist {
            id: PlaylistId::new(id),
            name: name.to_string(),
            description: None,
            thumbnail: None,
            created_at: None,
            songs: Vec::new(),
        }
    }

    #[test]
    fn set_playlists_replaces_collection() {
        let mut module = PlaylistsModule::new();
        module.commit(PlaylistMutation::Add(playlist(9, "stale")));
        module.commit(PlaylistMutation::SetPlaylists(vec![
            playlist(1, "a"),
            playlist(2, "b"),
        ]));

        assert_eq!(module.count(), 2);
        assert!(module.by_id(PlaylistId::new(9)).is_none());
    }

    #[test]
    fn upsert_replaces_matching_entry_in_place() {
        let mut module = PlaylistsModule::new();
        module.commit(PlaylistMutation::SetPlaylists(vec![
            playlist(1, "a"),
            playlist(2, "b"),
            playlist(3, "c"),
        ]));
        module.commit(PlaylistMutation::Upsert(playlist(2, "renamed")));

        let names: Vec<_> = module.all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "renamed", "c"]);
    }

    #[test]
    fn upsert_refreshes_current() {
        let mut module = PlaylistsModule::new();
        module.commit(PlaylistMutation::SetCurrent(Some(playlist(2, "b"))));
        module.commit(PlaylistMutation::Upsert(playlist(2, "renamed")));

        assert_eq!(module.current().unwrap().name, "renamed");
    }

    #[test]
    fn replace_refreshes_current_but_never_appends() {
        let mut module = PlaylistsModule::new();
        module.commit(PlaylistMutation::SetPlaylists(vec![playlist(1, "a")]));
        module.commit(PlaylistMutation::SetCurrent(Some(playlist(1, "a"))));

        module.commit(PlaylistMutation::Replace(playlist(5, "elsewhere")));
        assert_eq!(module.count(), 1);

        module.commit(PlaylistMutation::Replace(playlist(1, "renamed")));
        assert_eq!(module.all()[0].name, "renamed");
        assert_eq!(module.current().unwrap().name, "renamed");
    }

    #[test]
    fn remove_clears_matching_current() {
        let mut module = PlaylistsModule::new();
        module.commit(PlaylistMutation::SetPlaylists(vec![playlist(1, "a"), playlist(2, "b")]));
        module.commit(PlaylistMutation::SetCurrent(Some(playlist(2, "b"))));

        module.commit(PlaylistMutation::Remove(PlaylistId::new(2)));

        assert_eq!(module.count(), 1);
        assert!(module.current().is_none());
        assert!(module.by_id(PlaylistId::new(1)).is_some());
    }
}
