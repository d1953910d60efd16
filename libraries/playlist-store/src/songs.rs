//! Songs state module

use playlist_client::{ApiClient, Result, SongQuery};
use playlist_core::{NewSong, PlaylistId, Song, SongId, SongPatch};
use tracing::info;

/// State writers for the songs module
#[derive(Debug, Clone, PartialEq)]
pub enum SongMutation {
    /// Replace the whole collection
    SetSongs(Vec<Song>),
    /// Append a newly created song
    Add(Song),
    /// Replace the entry with the same id; appended when absent
    Upsert(Song),
    /// Replace the entry with the same id; ignored when absent
    Replace(Song),
    /// Drop the entry with this id
    Remove(SongId),
    /// Drop every song owned by a playlist
    RemoveByPlaylist(PlaylistId),
}

/// In-memory song state
#[derive(Debug, Clone, Default)]
pub struct SongsModule {
    songs: Vec<Song>,
}

impl SongsModule {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn all(&self) -> &[Song] {
        &self.songs
    }

    pub fn by_id(&self, id: SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    /// Songs owned by one playlist, in collection order
    pub fn for_playlist(&self, playlist: PlaylistId) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(move |s| s.playlist == playlist)
    }

    pub fn count(&self) -> usize {
        self.songs.len()
    }

    /// Summed length of a playlist's songs. Malformed durations count as zero.
    pub fn total_duration_secs(&self, playlist: PlaylistId) -> u64 {
        self.for_playlist(playlist)
            .filter_map(Song::length)
            .fold(0, |total, d| total.saturating_add(d.as_secs()))
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Apply a mutation. This is the only code path that writes state.
    pub fn commit(&mut self, mutation: SongMutation) {
        match mutation {
            SongMutation::SetSongs(songs) => self.songs = songs,
            SongMutation::Add(song) => self.songs.push(song),
            SongMutation::Upsert(song) => {
                match self.songs.iter_mut().find(|s| s.id == song.id) {
                    Some(existing) => *existing = song,
                    None => self.songs.push(song),
                }
            }
            SongMutation::Replace(song) => {
                if let Some(existing) = self.songs.iter_mut().find(|s| s.id == song.id) {
                    *existing = song;
                }
            }
            SongMutation::Remove(id) => self.songs.retain(|s| s.id != id),
            SongMutation::RemoveByPlaylist(playlist) => {
                self.songs.retain(|s| s.playlist != playlist);
            }
        }
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Load every song, replacing the collection
    pub async fn fetch_songs(&mut self, api: &ApiClient) -> Result<()> {
        let response = api.songs().list().await?;
        info!(count = response.data.len(), "Fetched songs");
        self.commit(SongMutation::SetSongs(response.data));
        Ok(())
    }

    /// Load one playlist's songs, replacing the collection
    pub async fn fetch_songs_by_playlist(
        &mut self,
        api: &ApiClient,
        playlist: PlaylistId,
    ) -> Result<()> {
        let response = api.songs().list_by_playlist(playlist).await?;
        info!(playlist = %playlist, count = response.data.len(), "Fetched playlist songs");
        self.commit(SongMutation::SetSongs(response.data));
        Ok(())
    }

    /// Load songs matching a query, replacing the collection
    pub async fn search_songs(&mut self, api: &ApiClient, query: &SongQuery) -> Result<()> {
        let response = api.songs().query(query).await?;
        info!(count = response.data.len(), "Searched songs");
        self.commit(SongMutation::SetSongs(response.data));
        Ok(())
    }

    pub async fn create_song(&mut self, api: &ApiClient, song: &NewSong) -> Result<Song> {
        let created = api.songs().create(song).await?.data;
        info!(id = %created.id, playlist = %created.playlist, "Created song");
        self.commit(SongMutation::Add(created.clone()));
        Ok(created)
    }

    pub async fn update_song(
        &mut self,
        api: &ApiClient,
        id: SongId,
        patch: &SongPatch,
    ) -> Result<Song> {
        let updated = api.songs().update(id, patch).await?.data;
        info!(id = %updated.id, "Updated song");
        self.commit(SongMutation::Replace(updated.clone()));
        Ok(updated)
    }

    pub async fn delete_song(&mut self, api: &ApiClient, id: SongId) -> Result<()> {
        api.songs().delete(id).await?;
        info!(id = %id, "Deleted song");
        self.commit(SongMutation::Remove(id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i64, playlist: i64, duration: &str) -> Song {
        Song {
            id: SongId::new(id),
            playlist: PlaylistId::new(playlist),
            title: format!("Song {id}"),
            artist: "Artist".into(),
            album: None,
            duration: duration.into(),
            genre: "Pop".into(),
        }
    }

    #[test]
    fn remove_drops_only_matching_id() {
        let mut module = SongsModule::new();
        module.commit(SongMutation::SetSongs(vec![
            song(4, 1, "1:00"),
            song(5, 1, "2:00"),
            song(6, 2, "3:00"),
        ]));

        module.commit(SongMutation::Remove(SongId::new(5)));

        let ids: Vec<_> = module.all().iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, [4, 6]);
    }

    #[test]
    fn remove_by_playlist_cascades() {
        let mut module = SongsModule::new();
        module.commit(SongMutation::SetSongs(vec![
            song(1, 1, "1:00"),
            song(2, 2, "1:00"),
            song(3, 1, "1:00"),
        ]));

        module.commit(SongMutation::RemoveByPlaylist(PlaylistId::new(1)));

        assert_eq!(module.count(), 1);
        assert_eq!(module.all()[0].id, SongId::new(2));
    }

    #[test]
    fn replace_ignores_songs_outside_the_collection() {
        let mut module = SongsModule::new();
        module.commit(SongMutation::SetSongs(vec![song(1, 1, "1:00")]));

        module.commit(SongMutation::Replace(song(9, 2, "2:00")));
        assert_eq!(module.count(), 1);

        let mut renamed = song(1, 1, "1:00");
        renamed.title = "Renamed".into();
        module.commit(SongMutation::Replace(renamed));
        assert_eq!(module.all()[0].title, "Renamed");
    }

    #[test]
    fn total_duration_of_long_songs_does_not_overflow() {
        let mut module = SongsModule::new();
        module.commit(SongMutation::SetSongs(
            (1..=8).map(|id| song(id, 1, "9999999:59")).collect(),
        ));

        assert_eq!(
            module.total_duration_secs(PlaylistId::new(1)),
            8 * (9_999_999 * 60 + 59)
        );
    }

    #[test]
    fn total_duration_skips_malformed_lengths() {
        let mut module = SongsModule::new();
        module.commit(SongMutation::SetSongs(vec![
            song(1, 1, "1:30"),
            song(2, 1, "2:45"),
            song(3, 1, "??"),
            song(4, 2, "9:00"),
        ]));

        assert_eq!(module.total_duration_secs(PlaylistId::new(1)), 255);
        assert_eq!(module.for_playlist(PlaylistId::new(2)).count(), 1);
    }
}
