//! Blocking HTTP client for the remote directory API.
//!
//! One GET per nearby search and one request per CRUD call. Nothing is
//! cached, retried, deduplicated or cancelled: every call is a fresh round
//! trip.

mod nearby;
mod services;

pub use nearby::{NearbyQuery, NearbyResponse};
pub use services::{ImageUpload, ServiceForm};

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

use crate::config::AppConfig;

const USER_AGENT: &str = "nearby-directory/0.1";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection, TLS or body-read failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(&config.api_base_url, config.request_timeout_secs)
    }

    /// Build a client against an arbitrary origin (a mock server in tests).
    pub fn with_base_url(base_url: &str, timeout_secs: Option<u64>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout_secs.map(Duration::from_secs))
            .build()?;

        // Exactly one trailing slash, so joined endpoints extend the path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidArgument(format!("bad endpoint path '{path}': {e}")))
    }

    /// Read a response body as JSON, turning non-2xx statuses into errors.
    fn read_json(response: reqwest::blocking::Response, endpoint: &str) -> Result<Value, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}

/// Reject ids that would not stay a single path segment.
///
/// Empty ids turn into `/getXById/`, and `.` or `..` survive percent
/// encoding and are resolved away by `Url::join`.
fn require_id(id: &str) -> Result<&str, FetchError> {
    let id = id.trim();
    match id {
        "" => Err(FetchError::InvalidArgument("id must not be empty".into())),
        "." | ".." => Err(FetchError::InvalidArgument(format!("invalid id '{id}'"))),
        _ => Ok(id),
    }
}
