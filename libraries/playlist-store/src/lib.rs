//! Playlist Manager Store
//!
//! Client-side state for Playlist Manager, split into independent modules:
//!
//! - **Playlists**: fetched playlists and the playlist open in the detail view
//! - **Songs**: fetched songs, filtered by playlist or search
//! - **UI**: the light/dark theme, persisted and mirrored onto the document
//!
//! Every module has the same shape: read-only queries, a mutation enum applied
//! by `commit` (the only state writer), and actions that call the API and then
//! commit. A failed action leaves state unchanged and returns the client error
//! as-is.
//!
//! [`Store`] ties the modules to the collaborators their actions need.

pub mod error;
pub mod playlists;
pub mod songs;
pub mod storage;
mod store;
pub mod ui;

pub use error::{Result, StorageError};
pub use playlists::{PlaylistMutation, PlaylistsModule};
pub use songs::{SongMutation, SongsModule};
pub use storage::{FileStore, KeyValueStore, MemoryStore, THEME_KEY};
pub use store::Store;
pub use ui::{UiModule, UiMutation};
