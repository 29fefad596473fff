#![forbid(unsafe_code)]

mod cli;
mod report;

use anyhow::Context;
use clap::Parser;
use cli::Args;
use policysync_cloud::PolicySyncEngine;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = args.to_config();
    config.validate()?;

    info!(
        "syncing policies for organization {} (policy set {})",
        config.organization, config.policy_set_id
    );

    let engine = PolicySyncEngine::from_config(&config)
        .context("failed to build API client")?
        .with_dry_run(args.dry_run);

    let report = engine
        .run(&config.policy_dir)
        .await
        .context("policy directory unavailable")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.dry_run {
        println!("{}", report::render_dry_run(&report));
    } else {
        println!("{}", report::render_text(&report));
    }

    if let Some(problems) = report::render_problems(&report) {
        warn!("{problems}");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
