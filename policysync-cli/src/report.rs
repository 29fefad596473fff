//! Console rendering of a finished sync run.

use policysync_cloud::{DocumentOutcome, SyncReport};
use std::fmt::Write;

/// Human-readable listing of uploaded identifiers.
pub fn render_text(report: &SyncReport) -> String {
    format!(
        "The following policies have been updated: [{}]",
        report.uploaded_ids().join(", ")
    )
}

/// One line per document that did not make it, or `None` for a clean run.
pub fn render_problems(report: &SyncReport) -> Option<String> {
    if report.is_clean() {
        return None;
    }

    let mut out = String::new();
    for outcome in &report.outcomes {
        match outcome {
            DocumentOutcome::Failed {
                document,
                stage,
                cause,
            } => {
                let _ = writeln!(out, "  {document}: {stage} failed: {cause}");
            }
            DocumentOutcome::NotFound { document } => {
                let _ = writeln!(out, "  {document}: no remote policy with this name");
            }
            DocumentOutcome::Uploaded { .. } | DocumentOutcome::Resolved { .. } => {}
        }
    }
    Some(format!(
        "{} failed, {} not found:\n{}",
        report.failures().len(),
        report.not_found().len(),
        out.trim_end()
    ))
}

/// Dry-run listing: which document would go to which policy.
pub fn render_dry_run(report: &SyncReport) -> String {
    let mut out = String::from("Dry run, nothing uploaded:");
    for outcome in &report.outcomes {
        if let DocumentOutcome::Resolved {
            document,
            policy_id,
        } = outcome
        {
            let _ = write!(out, "\n  {document} -> {policy_id}");
        }
    }
    out
}
