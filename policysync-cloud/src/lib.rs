//! Policy sync engine for policysync.
//!
//! Pushes local `.rego` policy documents to a remote policy service:
//! - API client with bearer auth and verbatim service errors
//! - Name-to-identifier resolution over the policy listing
//! - Raw content upload per policy identifier
//! - Sequential orchestration with per-document failure isolation

pub mod api_client;
pub mod config;
pub mod documents;
pub mod error;
pub mod resolver;
pub mod sync_engine;
pub mod types;
pub mod uploader;

pub use config::SyncConfig;
pub use error::{SyncError, SyncResult};
pub use sync_engine::PolicySyncEngine;
pub use types::*;
