//! Playlist Manager Client
//!
//! HTTP client library for the Playlist Manager REST API.
//!
//! # Features
//!
//! - **Transport**: one configured `reqwest` client with a JSON content type,
//!   a bounded timeout, and request/response logging
//! - **Playlists**: list, get, create, update, delete
//! - **Songs**: list, get, filter by playlist, search, create, update, delete
//! - **Validation**: malformed ids and payloads are rejected before any request
//!
//! # Example
//!
//! ```ignore
//! use playlist_client::{ApiClient, ClientConfig};
//! use playlist_core::{NewPlaylist, PlaylistId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ApiClient::new(ClientConfig::new("http://localhost:8000/api/"))?;
//!
//!     let created = api.playlists().create(&NewPlaylist::new("Road Trip")).await?;
//!     println!("Created playlist {}", created.data.id);
//!
//!     let songs = api.songs().list_by_playlist(created.data.id).await?;
//!     println!("It has {} songs", songs.data.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod playlists;
mod songs;
mod types;

// Re-export main types
pub use client::ApiClient;
pub use error::{ClientError, Result};
pub use types::{
    ApiResponse, ClientConfig, SongOrdering, SongQuery, DEFAULT_BASE_URL, DEFAULT_TIMEOUT,
};

// Re-export resource services for direct use if needed
pub use playlists::PlaylistService;
pub use songs::SongService;
