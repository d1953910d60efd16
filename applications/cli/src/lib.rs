//! Playlist Manager CLI Library
//!
//! Command-line client for a Playlist Manager server: playlists, songs, the
//! persisted theme, and route resolution.
//!
//! This library exposes the command handlers for testing purposes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Commands};
pub use commands::run;
pub use config::AppConfig;
pub use error::{AppError, Result};
