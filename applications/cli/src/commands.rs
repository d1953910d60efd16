/// Command handlers
///
/// Each handler drives the store and writes a human-readable report to `out`.
use crate::cli::{Commands, NewSongArgs, PlaylistCommand, SongCommand, SongFieldArgs, ThemeCommand};
use crate::error::{AppError, Result};
use playlist_client::SongQuery;
use playlist_core::{NewPlaylist, NewSong, Playlist, PlaylistPatch, Song, SongDuration, SongPatch};
use playlist_router::{Navigator, Router};
use playlist_store::Store;
use std::io::Write;

/// Run one command against the store
pub async fn run(command: Commands, store: &mut Store, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Playlists(cmd) => playlists(cmd, store, out).await,
        Commands::Songs(cmd) => songs(cmd, store, out).await,
        Commands::Theme(cmd) => theme(cmd, store, out),
        Commands::Route { path, base } => route(&path, base.as_deref(), store, out),
    }
}

async fn playlists(cmd: PlaylistCommand, store: &mut Store, out: &mut dyn Write) -> Result<()> {
    match cmd {
        PlaylistCommand::List => {
            store.fetch_playlists().await?;
            if store.playlists().count() == 0 {
                writeln!(out, "No playlists")?;
            }
            for playlist in store.playlists().all() {
                writeln!(out, "{}", playlist_line(playlist))?;
            }
        }
        PlaylistCommand::Show { id } => {
            let playlist = store.fetch_playlist(id).await?;
            store.fetch_songs_by_playlist(id).await?;

            writeln!(out, "#{} {}", playlist.id, playlist.name)?;
            if let Some(description) = &playlist.description {
                writeln!(out, "Description: {description}")?;
            }
            if let Some(thumbnail) = &playlist.thumbnail {
                writeln!(out, "Thumbnail: {thumbnail}")?;
            }
            if let Some(created_at) = playlist.created_at {
                writeln!(out, "Created: {}", created_at.format("%Y-%m-%d %H:%M UTC"))?;
            }

            let total = SongDuration::from_secs(store.songs().total_duration_secs(id));
            let count = store.songs().for_playlist(id).count();
            writeln!(out, "Songs ({count}, {total}):")?;
            for song in store.songs().for_playlist(id) {
                writeln!(out, "{}", song_line(song))?;
            }
        }
        PlaylistCommand::Create {
            name,
            description,
            thumbnail,
        } => {
            let mut playlist = NewPlaylist::new(name);
            if let Some(description) = description {
                playlist = playlist.with_description(description);
            }
            if let Some(thumbnail) = thumbnail {
                playlist = playlist.with_thumbnail(thumbnail);
            }

            let created = store.create_playlist(&playlist).await?;
            writeln!(out, "Created playlist {}", playlist_line(&created).trim_start())?;
        }
        PlaylistCommand::Update {
            id,
            name,
            description,
            thumbnail,
        } => {
            let patch = PlaylistPatch {
                name,
                description,
                thumbnail,
            };
            if patch.is_empty() {
                return Err(AppError::Usage("Nothing to update".to_string()));
            }

            let updated = store.update_playlist(id, &patch).await?;
            writeln!(out, "Updated playlist {}", playlist_line(&updated).trim_start())?;
        }
        PlaylistCommand::Delete { id } => {
            store.delete_playlist(id).await?;
            writeln!(out, "Deleted playlist #{id}")?;
        }
    }
    Ok(())
}

async fn songs(cmd: SongCommand, store: &mut Store, out: &mut dyn Write) -> Result<()> {
    match cmd {
        SongCommand::List {
            playlist,
            search,
            ordering,
            desc,
        } => {
            let query = SongQuery {
                playlist,
                search,
                ordering,
                descending: desc,
            };
            if query == SongQuery::default() {
                store.fetch_songs().await?;
            } else {
                store.search_songs(&query).await?;
            }

            if store.songs().count() == 0 {
                writeln!(out, "No songs")?;
            }
            for song in store.songs().all() {
                writeln!(out, "{}", song_line(song))?;
            }
        }
        SongCommand::Add(args) => {
            let created = store.create_song(&new_song(args)).await?;
            writeln!(out, "Added song {}", song_line(&created).trim_start())?;
        }
        SongCommand::Update { id, fields } => {
            let patch = song_patch(fields);
            if patch.is_empty() {
                return Err(AppError::Usage("Nothing to update".to_string()));
            }

            let updated = store.update_song(id, &patch).await?;
            writeln!(out, "Updated song {}", song_line(&updated).trim_start())?;
        }
        SongCommand::Delete { id } => {
            store.delete_song(id).await?;
            writeln!(out, "Deleted song #{id}")?;
        }
    }
    Ok(())
}

fn theme(cmd: ThemeCommand, store: &mut Store, out: &mut dyn Write) -> Result<()> {
    let theme = match cmd {
        ThemeCommand::Show => store.ui().theme(),
        ThemeCommand::Toggle => store.toggle_theme()?,
        ThemeCommand::Set { theme } => {
            store.set_theme(theme)?;
            theme
        }
    };
    writeln!(out, "Theme: {theme}")?;
    Ok(())
}

fn route(path: &str, base: Option<&str>, store: &mut Store, out: &mut dyn Write) -> Result<()> {
    let mut router = Router::new();
    if let Some(base) = base {
        router = router.with_base(base);
    }

    let mut navigator = Navigator::new(router);
    let route = navigator.push(path, store.document_mut())?.route;

    writeln!(out, "View: {}", route.view)?;
    writeln!(out, "Path: {}", route.path)?;
    if let Some(from) = &route.redirected_from {
        writeln!(out, "Redirected from: {from}")?;
    }
    for (name, value) in &route.props {
        writeln!(out, "Prop {name}: {value}")?;
    }
    writeln!(out, "Title: {}", route.title())?;
    Ok(())
}

fn new_song(args: NewSongArgs) -> NewSong {
    let song = NewSong::new(args.playlist, args.title, args.artist, args.duration, args.genre);
    match args.album {
        Some(album) => song.with_album(album),
        None => song,
    }
}

fn song_patch(fields: SongFieldArgs) -> SongPatch {
    SongPatch {
        playlist: fields.playlist,
        title: fields.title,
        artist: fields.artist,
        album: fields.album,
        duration: fields.duration,
        genre: fields.genre,
    }
}

fn playlist_line(playlist: &Playlist) -> String {
    let mut line = format!("{:>4}  {}", format!("#{}", playlist.id), playlist.name);
    if let Some(description) = &playlist.description {
        line.push_str(" - ");
        line.push_str(description);
    }
    line
}

fn song_line(song: &Song) -> String {
    let album = song
        .album
        .as_deref()
        .map(|album| format!(" ({album})"))
        .unwrap_or_default();
    format!(
        "{:>4}  {} - {}{} [{}] {}",
        format!("#{}", song.id),
        song.title,
        song.artist,
        album,
        song.duration,
        song.genre
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_core::{PlaylistId, SongId};

    #[test]
    fn song_line_includes_album_when_present() {
        let mut song = Song {
            id: SongId::new(7),
            playlist: PlaylistId::new(1),
            title: "Blue".into(),
            artist: "Joni".into(),
            album: None,
            duration: "3:05".into(),
            genre: "Folk".into(),
        };
        assert_eq!(song_line(&song), "  #7  Blue - Joni [3:05] Folk");

        song.album = Some("Blue".into());
        assert_eq!(song_line(&song), "  #7  Blue - Joni (Blue) [3:05] Folk");
    }

    #[test]
    fn song_patch_maps_only_given_fields() {
        let patch = song_patch(SongFieldArgs {
            playlist: None,
            title: Some("New".into()),
            artist: None,
            album: None,
            duration: None,
            genre: None,
        });

        assert_eq!(patch, SongPatch::default().with_title("New"));
    }
}
