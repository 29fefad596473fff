//! Shared types for policy sync operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token for the policy API. Fixed for the process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// A policy record as listed by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePolicy {
    pub id: String,
    pub name: String,
}

/// Outcome of a successful lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Found(String),
    NotFound,
}

impl Resolution {
    pub fn policy_id(&self) -> Option<&str> {
        match self {
            Self::Found(id) => Some(id.as_str()),
            Self::NotFound => None,
        }
    }
}

/// Stage of the per-document pipeline at which a failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStage {
    Read,
    Resolve,
    Upload,
}

impl fmt::Display for SyncStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Read => "read",
            Self::Resolve => "resolve",
            Self::Upload => "upload",
        };
        f.write_str(s)
    }
}

/// Result of processing one local policy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DocumentOutcome {
    /// Content was accepted by the service.
    Uploaded { document: String, policy_id: String },
    /// Dry run: the identifier was found but nothing was uploaded.
    Resolved { document: String, policy_id: String },
    /// No remote policy carries this document's name.
    NotFound { document: String },
    Failed {
        document: String,
        stage: SyncStage,
        cause: String,
    },
}

impl DocumentOutcome {
    pub fn document(&self) -> &str {
        match self {
            Self::Uploaded { document, .. }
            | Self::Resolved { document, .. }
            | Self::NotFound { document }
            | Self::Failed { document, .. } => document.as_str(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Everything that happened during one sync run, in processing order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<DocumentOutcome>,
}

impl SyncReport {
    /// Identifiers whose upload was accepted, in the order their documents were processed.
    pub fn uploaded_ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DocumentOutcome::Uploaded { policy_id, .. } => Some(policy_id.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&DocumentOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure()).collect()
    }

    pub fn not_found(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                DocumentOutcome::NotFound { document } => Some(document.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True when no document failed or went unmatched.
    pub fn is_clean(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| matches!(o, DocumentOutcome::Uploaded { .. } | DocumentOutcome::Resolved { .. }))
    }
}
