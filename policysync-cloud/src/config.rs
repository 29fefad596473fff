//! Policy sync configuration.

use crate::error::{SyncError, SyncResult};
use crate::types::ApiToken;
use std::path::PathBuf;

/// Base URL of the Terraform Cloud v2 API.
pub const DEFAULT_API_BASE_URL: &str = "https://app.terraform.io/api/v2";

/// Directory scanned for policy documents when none is given.
pub const DEFAULT_POLICY_DIR: &str = "./policies";

/// Configuration for a policy sync run.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Base URL for the policy API, without trailing slash
    /// (e.g., "https://app.terraform.io/api/v2").
    pub api_base_url: String,

    /// Bearer token sent on every request.
    pub token: ApiToken,

    /// Organization whose policies are listed during resolution.
    pub organization: String,

    /// Policy set the synced policies belong to.
    pub policy_set_id: String,

    /// Directory holding the local `.rego` documents.
    pub policy_dir: PathBuf,
}

impl SyncConfig {
    pub fn new(
        token: impl Into<String>,
        organization: impl Into<String>,
        policy_set_id: impl Into<String>,
    ) -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            token: ApiToken::new(token),
            organization: organization.into(),
            policy_set_id: policy_set_id.into(),
            policy_dir: PathBuf::from(DEFAULT_POLICY_DIR),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_policy_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.policy_dir = dir.into();
        self
    }

    /// Checks required fields before any network activity.
    pub fn validate(&self) -> SyncResult<()> {
        if self.token.expose().trim().is_empty() {
            return Err(SyncError::Config("API token is empty".to_string()));
        }
        if self.organization.trim().is_empty() {
            return Err(SyncError::Config("organization is empty".to_string()));
        }
        if self.policy_set_id.trim().is_empty() {
            return Err(SyncError::Config("policy set id is empty".to_string()));
        }
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://"))
        {
            return Err(SyncError::Config(format!(
                "api base url must be http(s): {}",
                self.api_base_url
            )));
        }
        Ok(())
    }
}
