//! HTTP client for the remote portfolio store.
//!
//! The store is an external REST API that owns every portfolio record. This
//! crate only reads from it: it issues `GET` requests, maps HTTP status codes
//! onto [`StoreError`], and decodes JSON bodies into caller-chosen types.
//!
//! Requests are never retried. A failed request surfaces immediately so the
//! caller can render an explicit error state.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`RemoteStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl StoreConfig {
    /// Creates a config for `base_url` with the default timeout.
    ///
    /// Trailing slashes are stripped so paths can always be joined with `/`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store base URL `{0}`")]
    InvalidBaseUrl(String),
    #[error("request to `{path}` failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("`{path}` answered with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("could not decode response from `{path}`: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// HTTP status of the failed response, if the store answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Read-only client for the remote portfolio store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base_url: String,
    http: Client,
}

impl RemoteStore {
    /// Builds a client for the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidBaseUrl`] when the base URL is not an
    /// absolute `http`/`https` URL, and [`StoreError::Transport`] when the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|_| StoreError::InvalidBaseUrl(config.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StoreError::InvalidBaseUrl(config.base_url));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| StoreError::Transport {
                path: config.base_url.clone(),
                source,
            })?;

        Ok(Self {
            base_url: config.base_url,
            http,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetches a JSON array from `path`.
    ///
    /// # Errors
    ///
    /// Any non-2xx status (including 404) is an error here, since a
    /// collection endpoint that does not exist is a misconfiguration.
    pub async fn fetch_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, StoreError> {
        match self.get(&self.url_for(path), path).await? {
            Some(body) => decode(path, &body),
            None => Err(StoreError::Status {
                path: path.to_owned(),
                status: StatusCode::NOT_FOUND.as_u16(),
            }),
        }
    }

    /// Fetches a single JSON record from `path`.
    ///
    /// A 404 response or a literal `null` body both yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, other non-2xx statuses, and
    /// bodies that do not decode into `T`.
    pub async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, StoreError> {
        match self.get(&self.url_for(path), path).await? {
            Some(body) => decode::<Option<T>>(path, &body),
            None => Ok(None),
        }
    }

    /// URL of record `id` under `collection`, with `id` percent-encoded as a
    /// single path segment.
    ///
    /// Returns `None` for ids that cannot name a segment: empty, `.` or `..`.
    #[must_use]
    pub fn record_url(&self, collection: &str, id: &str) -> Option<Url> {
        if matches!(id, "" | "." | "..") {
            return None;
        }
        let mut url = Url::parse(&self.url_for(collection)).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(id);
        Some(url)
    }

    /// Fetches record `id` from `collection`.
    ///
    /// Ids are opaque and any string is sent as-is, encoded. An id that no
    /// URL can address is reported as missing without a request.
    ///
    /// # Errors
    ///
    /// Same as [`RemoteStore::fetch_one`].
    pub async fn fetch_record<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let Some(url) = self.record_url(collection, id) else {
            debug!(collection, "id cannot address a record, treating as missing");
            return Ok(None);
        };
        let path = url.path().to_owned();
        match self.get(url.as_str(), &path).await? {
            Some(body) => decode::<Option<T>>(&path, &body),
            None => Ok(None),
        }
    }

    /// Issues the `GET` and returns the body, or `None` on 404. `path` only
    /// labels logs and errors.
    async fn get(&self, url: &str, path: &str) -> Result<Option<Vec<u8>>, StoreError> {
        debug!(%url, "requesting remote store");

        let response = self.http.get(url).send().await.map_err(|source| {
            warn!(%url, error = %source, "remote store request failed");
            StoreError::Transport {
                path: path.to_owned(),
                source,
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "remote store has no such record");
            return Ok(None);
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "remote store rejected request");
            return Err(StoreError::Status {
                path: path.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| {
            warn!(%url, error = %source, "failed to read remote store body");
            StoreError::Transport {
                path: path.to_owned(),
                source,
            }
        })?;
        Ok(Some(body.to_vec()))
    }
}

fn decode<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(body).map_err(|source| {
        warn!(path, error = %source, "remote store returned malformed JSON");
        StoreError::Decode {
            path: path.to_owned(),
            source,
        }
    })
}
