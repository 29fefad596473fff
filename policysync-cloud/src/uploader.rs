//! Pushes raw policy content to a remote policy's upload slot.

use crate::api_client::{PolicyApiClient, OCTET_STREAM};
use crate::error::SyncResult;
use reqwest::Method;
use std::sync::Arc;
use tracing::debug;

/// Uploads policy documents in a single request body.
pub struct PolicyUploader {
    api: Arc<PolicyApiClient>,
}

impl PolicyUploader {
    pub fn new(api: Arc<PolicyApiClient>) -> Self {
        Self { api }
    }

    /// Replaces the content of `policy_id` with `content`.
    pub async fn upload(&self, policy_id: &str, content: &[u8]) -> SyncResult<()> {
        self.api
            .send(
                Method::PUT,
                &format!("/policies/{policy_id}/upload"),
                Some(content.to_vec()),
                OCTET_STREAM,
            )
            .await?;

        debug!("uploaded {} bytes to policy {policy_id}", content.len());
        Ok(())
    }
}
