//! Playlist Manager Core
//!
//! Platform-agnostic domain types, validation, and presentation seams shared by
//! the client, store, and router crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Playlist`, `Song`, `Theme`, and the payloads used to
//!   create or patch them
//! - **Identifiers**: `PlaylistId`, `SongId` (server-assigned integers)
//! - **Validation**: `ValidationError`, raised before any request leaves the client
//! - **Presentation**: the `Document` trait that receives title and theme side effects
//!
//! # Example
//!
//! ```rust
//! use playlist_core::{NewSong, PlaylistId};
//!
//! let song = NewSong::new(PlaylistId::new(1), "Bohemian Rhapsody", "Queen", "5:55", "Rock")
//!     .with_album("A Night at the Opera");
//! assert!(song.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod document;
pub mod error;
pub mod types;

pub use document::{Document, HeadlessDocument};
pub use error::{Result, ValidationError};
pub use types::{
    NewPlaylist, NewSong, Playlist, PlaylistId, PlaylistPatch, Song, SongDuration, SongId,
    SongPatch, Theme,
};

#[cfg(any(test, feature = "mock"))]
pub use document::MockDocument;
