mod duration;
mod ids;
mod playlist;
mod song;
mod theme;

pub use duration::SongDuration;
pub use ids::{PlaylistId, SongId};
pub use playlist::{NewPlaylist, Playlist, PlaylistPatch};
pub use song::{NewSong, Song, SongPatch};
pub use theme::Theme;

use serde::{Deserialize, Deserializer};

/// The server sends blank optional text fields as `""`
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
