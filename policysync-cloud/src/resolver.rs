//! Maps a local policy name to the identifier of the remote policy with the
//! same name.
//!
//! Every resolution re-lists the organization's policies; nothing is cached
//! between documents.

use crate::api_client::{PolicyApiClient, JSON_API};
use crate::error::{SyncError, SyncResult};
use crate::types::{RemotePolicy, Resolution};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize)]
struct PolicyRecord {
    id: String,
    attributes: PolicyAttributes,
}

#[derive(Deserialize)]
struct PolicyAttributes {
    name: String,
}

/// One page of the policy listing.
struct PolicyPage {
    policies: Vec<RemotePolicy>,
    next_page: Option<u64>,
}

/// Resolves policy names against the organization's policy listing.
pub struct PolicyResolver {
    api: Arc<PolicyApiClient>,
    organization: String,
}

impl PolicyResolver {
    pub fn new(api: Arc<PolicyApiClient>, organization: impl Into<String>) -> Self {
        Self {
            api,
            organization: organization.into(),
        }
    }

    /// Finds the first remote policy whose name equals `name` exactly.
    ///
    /// Follows `meta.pagination.next-page` until a match is found or the
    /// listing is exhausted. Listing failures are wrapped as
    /// [`SyncError::Lookup`].
    pub async fn resolve(&self, name: &str) -> SyncResult<Resolution> {
        let mut page_number = 1;
        loop {
            let page = self
                .fetch_page(page_number)
                .await
                .map_err(|e| SyncError::lookup(name, e))?;

            if let Some(found) = page.policies.into_iter().find(|p| p.name == name) {
                debug!("resolved {name} to {}", found.id);
                return Ok(Resolution::Found(found.id));
            }

            match page.next_page {
                Some(next) if next > page_number => page_number = next,
                _ => break,
            }
        }

        debug!("no remote policy named {name}");
        Ok(Resolution::NotFound)
    }

    async fn fetch_page(&self, page_number: u64) -> SyncResult<PolicyPage> {
        let mut path = format!("/organizations/{}/policies", self.organization);
        if page_number > 1 {
            path.push_str(&format!("?page[number]={page_number}"));
        }

        let body = self.api.send(Method::GET, &path, None, JSON_API).await?;
        parse_policy_page(&body)
    }
}

fn parse_policy_page(body: &[u8]) -> SyncResult<PolicyPage> {
    let doc: Value = serde_json::from_slice(body)?;

    let data = doc
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| SyncError::MalformedResponse("missing `data` array".to_string()))?;

    let mut policies = Vec::with_capacity(data.len());
    for item in data {
        match PolicyRecord::deserialize(item) {
            Ok(record) => policies.push(RemotePolicy {
                id: record.id,
                name: record.attributes.name,
            }),
            Err(e) => debug!("skipping policy entry without id/name: {e}"),
        }
    }

    let next_page = doc
        .pointer("/meta/pagination/next-page")
        .and_then(Value::as_u64);

    Ok(PolicyPage {
        policies,
        next_page,
    })
}
