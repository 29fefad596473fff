use clap::Parser;
use policysync_cloud::config::{DEFAULT_API_BASE_URL, DEFAULT_POLICY_DIR};
use policysync_cloud::SyncConfig;
use std::path::PathBuf;

/// Push local .rego policies to the matching Terraform Cloud policies.
#[derive(Parser)]
#[command(name = "policysync", version)]
pub struct Args {
    /// API token used as the bearer credential.
    #[arg(long, env = "TF_API_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Policy set the synced policies belong to.
    #[arg(long, env = "POLICY_SET_ID")]
    pub policy_set_id: String,

    /// Organization whose policies are searched by name.
    #[arg(long, env = "TF_ORGANIZATION")]
    pub organization: String,

    /// Base URL of the policy API.
    #[arg(long, env = "TF_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Directory containing the .rego documents (not searched recursively).
    #[arg(long, default_value = DEFAULT_POLICY_DIR)]
    pub policy_dir: PathBuf,

    /// Resolve policy identifiers without uploading anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the full sync report as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> SyncConfig {
        SyncConfig::new(&self.token, &self.organization, &self.policy_set_id)
            .with_api_base_url(&self.api_base_url)
            .with_policy_dir(self.policy_dir.clone())
    }
}
