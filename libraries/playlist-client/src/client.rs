//! HTTP client wrapper for the Playlist Manager API.

use crate::error::{ClientError, Result};
use crate::playlists::PlaylistService;
use crate::songs::SongService;
use crate::types::{ApiResponse, ClientConfig};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

/// Thin wrapper around `reqwest` bound to one API root.
///
/// Every request carries `Content-Type: application/json` and is bounded by
/// the configured timeout. Requests and responses are logged; payloads are
/// never altered. Failures are returned as-is, there are no retries.
///
/// # Example
///
/// ```ignore
/// use playlist_client::{ApiClient, ClientConfig};
///
/// let api = ApiClient::new(ClientConfig::new("http://localhost:8000/api/"))?;
/// let playlists = api.playlists().list().await?.data;
/// println!("Found {} playlists", playlists.len());
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let raw = config.base_url.trim();
        if raw.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }
        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Resource paths are relative, so the root must end in exactly one slash
        let normalized = format!("{}/", raw.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("PlaylistManager/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The normalized API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Playlist resource operations.
    pub fn playlists(&self) -> PlaylistService<'_> {
        PlaylistService::new(self)
    }

    /// Song resource operations.
    pub fn songs(&self) -> SongService<'_> {
        SongService::new(self)
    }

    /// `GET` a resource and decode its JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        decode(path, response).await
    }

    /// `POST` a JSON body and decode the JSON reply.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        decode(path, response).await
    }

    /// `PUT` a JSON body and decode the JSON reply.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        decode(path, response).await
    }

    /// `DELETE` a resource. The reply body (usually empty) is discarded.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse<()>> {
        let response = self.send::<()>(Method::DELETE, path, None).await?;
        Ok(ApiResponse {
            status: response.status().as_u16(),
            data: (),
        })
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        debug!(method = %method, path = %path, "API request");

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(method = %method, path = %path, error = %e, "API request error");
                return Err(e.into());
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!(method = %method, status = status.as_u16(), path = %path, "API response");
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let data = error_payload(&text);
        warn!(
            method = %method,
            status = status.as_u16(),
            path = %path,
            payload = ?data,
            "API response error"
        );

        Err(ClientError::Server {
            status: status.as_u16(),
            data,
            message: format!("Request failed with status code {}", status.as_u16()),
        })
    }
}

/// Error bodies are JSON when the server produced them, plain text otherwise
fn error_payload(text: &str) -> Option<serde_json::Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(text)
            .unwrap_or_else(|_| serde_json::Value::String(text.to_string())),
    )
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<ApiResponse<T>> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await?;
    let data = serde_json::from_slice(&bytes).map_err(|e| {
        warn!(status, path = %path, error = %e, "API response decode error");
        ClientError::Parse(format!("{path}: {e}"))
    })?;
    Ok(ApiResponse { status, data })
}
