/// Command-line definitions
use clap::{Args, Parser, Subcommand};
use playlist_client::SongOrdering;
use playlist_core::{PlaylistId, SongId, Theme};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "playlist-manager")]
#[command(version)]
#[command(about = "Manage playlists and songs on a Playlist Manager server", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PLM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List, inspect and edit playlists
    #[command(subcommand)]
    Playlists(PlaylistCommand),
    /// List, add and edit songs
    #[command(subcommand)]
    Songs(SongCommand),
    /// Show or change the light/dark theme
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Resolve an application path to the view it renders
    Route {
        /// Path such as /playlist/42
        path: String,
        /// Base path the application is served under
        #[arg(long)]
        base: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlaylistCommand {
    /// List all playlists
    List,
    /// Show one playlist with its songs
    Show { id: PlaylistId },
    /// Create a playlist
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        /// Thumbnail image URL
        #[arg(short, long)]
        thumbnail: Option<String>,
    },
    /// Change fields of a playlist
    Update {
        id: PlaylistId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        thumbnail: Option<String>,
    },
    /// Delete a playlist and its songs
    Delete { id: PlaylistId },
}

#[derive(Debug, Subcommand)]
pub enum SongCommand {
    /// List songs, optionally filtered and ordered
    List {
        /// Only songs of this playlist
        #[arg(short, long)]
        playlist: Option<PlaylistId>,
        /// Match title, artist, album or genre
        #[arg(short, long)]
        search: Option<String>,
        /// Sort by title, artist or duration
        #[arg(short, long)]
        ordering: Option<SongOrdering>,
        /// Reverse the ordering
        #[arg(long, requires = "ordering")]
        desc: bool,
    },
    /// Add a song to a playlist
    Add(NewSongArgs),
    /// Change fields of a song
    Update {
        id: SongId,
        #[command(flatten)]
        fields: SongFieldArgs,
    },
    /// Delete a song
    Delete { id: SongId },
}

#[derive(Debug, Args)]
pub struct NewSongArgs {
    #[arg(short, long)]
    pub playlist: PlaylistId,
    #[arg(short, long)]
    pub title: String,
    #[arg(short, long)]
    pub artist: String,
    #[arg(long)]
    pub album: Option<String>,
    /// Length as m:ss
    #[arg(short, long)]
    pub duration: String,
    #[arg(short, long)]
    pub genre: String,
}

#[derive(Debug, Args)]
pub struct SongFieldArgs {
    /// Move the song to another playlist
    #[arg(short, long)]
    pub playlist: Option<PlaylistId>,
    #[arg(short, long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub artist: Option<String>,
    #[arg(long)]
    pub album: Option<String>,
    #[arg(short, long)]
    pub duration: Option<String>,
    #[arg(short, long)]
    pub genre: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set { theme: Theme },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_song_query_flags() {
        let cli = Cli::try_parse_from([
            "playlist-manager",
            "songs",
            "list",
            "--playlist",
            "3",
            "--ordering",
            "title",
            "--desc",
        ])
        .unwrap();

        match cli.command {
            Commands::Songs(SongCommand::List {
                playlist,
                ordering,
                desc,
                search,
            }) => {
                assert_eq!(playlist, Some(PlaylistId::new(3)));
                assert_eq!(ordering, Some(SongOrdering::Title));
                assert!(desc);
                assert!(search.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_invalid_ids_before_running() {
        assert!(Cli::try_parse_from(["playlist-manager", "playlists", "show", "abc"]).is_err());
        assert!(Cli::try_parse_from(["playlist-manager", "playlists", "show", "0"]).is_err());
    }

    #[test]
    fn desc_requires_ordering() {
        assert!(Cli::try_parse_from(["playlist-manager", "songs", "list", "--desc"]).is_err());
    }

    #[test]
    fn parses_theme_case_insensitively() {
        let cli = Cli::try_parse_from(["playlist-manager", "theme", "set", "DARK"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme(ThemeCommand::Set { theme: Theme::Dark })
        ));
    }
}
