//! Types for Playlist Manager API requests and responses.

use std::fmt;
use std::time::Duration;

/// Default API root used by the development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for connecting to the Playlist Manager API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; resource paths are joined beneath it (e.g. "http://localhost:8000/api/")
    pub base_url: String,
    /// Upper bound for a whole request, including reading the body
    pub timeout: Duration,
    /// Upper bound for establishing the connection
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given API root with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: Duration::from_secs(5),
        }
    }
}

/// A successful response: status plus decoded body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Drop the status and keep the body
    pub fn into_data(self) -> T {
        self.data
    }
}

// =============================================================================
// Song query
// =============================================================================

/// Fields the server can order songs by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongOrdering {
    Title,
    Artist,
    Duration,
}

impl SongOrdering {
    fn field(self) -> &'static str {
        match self {
            SongOrdering::Title => "title",
            SongOrdering::Artist => "artist",
            SongOrdering::Duration => "duration",
        }
    }
}

impl fmt::Display for SongOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl std::str::FromStr for SongOrdering {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "title" => Ok(SongOrdering::Title),
            "artist" => Ok(SongOrdering::Artist),
            "duration" => Ok(SongOrdering::Duration),
            other => Err(format!("cannot order songs by {other:?}")),
        }
    }
}

/// Filters for listing songs.
///
/// `search` matches title, artist, album, and genre on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongQuery {
    pub playlist: Option<playlist_core::PlaylistId>,
    pub search: Option<String>,
    pub ordering: Option<SongOrdering>,
    pub descending: bool,
}

impl SongQuery {
    /// Query for the songs of one playlist
    pub fn for_playlist(playlist: playlist_core::PlaylistId) -> Self {
        Self {
            playlist: Some(playlist),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn ordered_by(mut self, ordering: SongOrdering, descending: bool) -> Self {
        self.ordering = Some(ordering);
        self.descending = descending;
        self
    }

    /// Encoded query string, without the leading `?`
    pub(crate) fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(playlist) = self.playlist {
            query.append_pair("playlist", &playlist.to_string());
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            query.append_pair("search", search);
        }
        if let Some(ordering) = self.ordering {
            let value = if self.descending {
                format!("-{}", ordering.field())
            } else {
                ordering.field().to_string()
            };
            query.append_pair("ordering", &value);
        }
        query.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_core::PlaylistId;

    #[test]
    fn default_config_matches_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api/");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn empty_query_has_no_pairs() {
        assert_eq!(SongQuery::default().to_query_string(), "");
    }

    #[test]
    fn query_encodes_all_filters() {
        let query = SongQuery::for_playlist(PlaylistId::new(4))
            .with_search("rock & roll")
            .ordered_by(SongOrdering::Duration, true);

        assert_eq!(
            query.to_query_string(),
            "playlist=4&search=rock+%26+roll&ordering=-duration"
        );
    }

    #[test]
    fn blank_search_is_omitted() {
        let query = SongQuery::default().with_search("  ");
        assert_eq!(query.to_query_string(), "");
    }
}
