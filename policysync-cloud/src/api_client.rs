//! HTTP client for the policy API.
//!
//! Performs one bearer-authenticated round trip per call and normalizes the
//! response: 200 yields the body, any other status yields the service's own
//! error payload. No retries; a failed request is reported immediately.

use crate::config::SyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::types::ApiToken;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use tracing::debug;

/// Content type for JSON:API requests.
pub const JSON_API: &str = "application/vnd.api+json";

/// Content type for raw policy uploads.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Authenticated transport shared by the resolver and the uploader.
pub struct PolicyApiClient {
    client: Client,
    base_url: String,
    token: ApiToken,
}

impl PolicyApiClient {
    pub fn new(config: &SyncConfig) -> SyncResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("policysync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request to `path` (relative to the base URL).
    ///
    /// Returns the response body on 200. Any other status becomes
    /// [`SyncError::Api`] carrying the body verbatim; connection-level
    /// failures surface as [`SyncError::Http`].
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        content_type: &str,
    ) -> SyncResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(self.token.expose())
            .header(CONTENT_TYPE, content_type);
        if let Some(body) = body {
            req = req.body(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!("{method} {path} -> {status} ({} bytes)", bytes.len());

        if status != StatusCode::OK {
            return Err(SyncError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }
}
