//! Policy sync orchestrator.
//!
//! Drives each local document through:
//! - Read (local file content)
//! - Resolve (name -> remote identifier)
//! - Upload (content -> remote identifier)
//!
//! Documents are processed one at a time. A failure at any stage is logged
//! and recorded for that document only; the run moves on to the next one.

use crate::api_client::PolicyApiClient;
use crate::config::SyncConfig;
use crate::documents::{self, document_name, PolicyDocument};
use crate::error::SyncResult;
use crate::resolver::PolicyResolver;
use crate::types::*;
use crate::uploader::PolicyUploader;

use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Policy sync engine: resolve then upload, per document.
pub struct PolicySyncEngine {
    resolver: PolicyResolver,
    uploader: PolicyUploader,
    dry_run: bool,
}

impl PolicySyncEngine {
    pub fn new(resolver: PolicyResolver, uploader: PolicyUploader) -> Self {
        Self {
            resolver,
            uploader,
            dry_run: false,
        }
    }

    /// Builds the engine and its shared API client from a validated config.
    pub fn from_config(config: &SyncConfig) -> SyncResult<Self> {
        let api = Arc::new(PolicyApiClient::new(config)?);
        Ok(Self::new(
            PolicyResolver::new(api.clone(), config.organization.clone()),
            PolicyUploader::new(api),
        ))
    }

    /// Resolve only; never issue uploads.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Syncs every policy document in `policy_dir`.
    ///
    /// Only a directory that cannot be listed fails the run; per-document
    /// failures end up in the returned report.
    pub async fn run(&self, policy_dir: &Path) -> SyncResult<SyncReport> {
        let started_at = Utc::now();
        let paths = documents::discover(policy_dir).await?;
        info!(
            "syncing {} policy documents from {}",
            paths.len(),
            policy_dir.display()
        );

        let mut outcomes = Vec::with_capacity(paths.len());
        for path in &paths {
            outcomes.push(self.sync_document(path).await);
        }

        let report = SyncReport {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };
        info!(
            "sync finished: {} uploaded, {} failed, {} not found",
            report.uploaded_ids().len(),
            report.failures().len(),
            report.not_found().len()
        );
        Ok(report)
    }

    /// Runs read -> resolve -> upload for a single document.
    pub async fn sync_document(&self, path: &Path) -> DocumentOutcome {
        let document = match PolicyDocument::read(path).await {
            Ok(doc) => doc,
            Err(e) => {
                error!("error reading policy file {}: {e}", path.display());
                return DocumentOutcome::Failed {
                    document: document_name(path),
                    stage: SyncStage::Read,
                    cause: e.to_string(),
                };
            }
        };
        let name = document.name;

        let policy_id = match self.resolver.resolve(&name).await {
            Ok(Resolution::Found(id)) => id,
            Ok(Resolution::NotFound) => {
                warn!("no remote policy named {name}, skipping upload");
                return DocumentOutcome::NotFound { document: name };
            }
            Err(e) => {
                error!("error getting policy ID for {name}: {e}");
                return DocumentOutcome::Failed {
                    document: name,
                    stage: SyncStage::Resolve,
                    cause: e.to_string(),
                };
            }
        };

        if self.dry_run {
            info!("dry run: {name} would be uploaded to {policy_id}");
            return DocumentOutcome::Resolved {
                document: name,
                policy_id,
            };
        }

        match self.uploader.upload(&policy_id, &document.content).await {
            Ok(()) => {
                info!("uploaded {name} to {policy_id}");
                DocumentOutcome::Uploaded {
                    document: name,
                    policy_id,
                }
            }
            Err(e) => {
                error!("error uploading policy {name} to {policy_id}: {e}");
                DocumentOutcome::Failed {
                    document: name,
                    stage: SyncStage::Upload,
                    cause: e.to_string(),
                }
            }
        }
    }
}
