use chrono::Utc;
use pretty_assertions::assert_eq;
use policysync_cloud::*;

fn report(outcomes: Vec<DocumentOutcome>) -> SyncReport {
    SyncReport {
        started_at: Utc::now(),
        finished_at: Utc::now(),
        outcomes,
    }
}

fn uploaded(doc: &str, id: &str) -> DocumentOutcome {
    DocumentOutcome::Uploaded {
        document: doc.into(),
        policy_id: id.into(),
    }
}

// --- Resolution ---

#[test]
fn resolution_policy_id() {
    assert_eq!(Resolution::Found("pol-1".into()).policy_id(), Some("pol-1"));
    assert_eq!(Resolution::NotFound.policy_id(), None);
}

// --- SyncReport ---

#[test]
fn uploaded_ids_in_processing_order() {
    let r = report(vec![
        uploaded("b.rego", "pol-2"),
        DocumentOutcome::NotFound {
            document: "c.rego".into(),
        },
        uploaded("a.rego", "pol-1"),
    ]);
    assert_eq!(r.uploaded_ids(), vec!["pol-2", "pol-1"]);
}

#[test]
fn failures_and_not_found_are_separate() {
    let r = report(vec![
        uploaded("a.rego", "pol-1"),
        DocumentOutcome::Failed {
            document: "b.rego".into(),
            stage: SyncStage::Upload,
            cause: "API error (500): quota exceeded".into(),
        },
        DocumentOutcome::NotFound {
            document: "c.rego".into(),
        },
    ]);
    assert_eq!(r.failures().len(), 1);
    assert_eq!(r.failures()[0].document(), "b.rego");
    assert_eq!(r.not_found(), vec!["c.rego"]);
    assert!(!r.is_clean());
}

#[test]
fn dry_run_report_is_clean() {
    let r = report(vec![DocumentOutcome::Resolved {
        document: "a.rego".into(),
        policy_id: "pol-1".into(),
    }]);
    assert!(r.is_clean());
    assert!(r.uploaded_ids().is_empty());
}

#[test]
fn empty_report_is_clean() {
    assert!(report(Vec::new()).is_clean());
}

// --- Serialization ---

#[test]
fn outcome_serializes_with_tag() {
    let json = serde_json::to_value(DocumentOutcome::Failed {
        document: "a.rego".into(),
        stage: SyncStage::Resolve,
        cause: "boom".into(),
    })
    .unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "outcome": "failed",
            "document": "a.rego",
            "stage": "resolve",
            "cause": "boom"
        })
    );
}

#[test]
fn stage_display() {
    assert_eq!(SyncStage::Read.to_string(), "read");
    assert_eq!(SyncStage::Resolve.to_string(), "resolve");
    assert_eq!(SyncStage::Upload.to_string(), "upload");
}

#[test]
fn api_token_debug_is_redacted() {
    let token = ApiToken::new("abc123");
    assert_eq!(format!("{token:?}"), "ApiToken(<redacted>)");
    assert_eq!(token.expose(), "abc123");
}
