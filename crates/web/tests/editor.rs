//! Integration tests for the editor dashboard (`GET /editor`,
//! `POST /editor/decisions`).

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_text, get, hidden_values, location, post_form, submission, FakeStudioApi};
use songcraft_core::types::{Decision, Submission, SubmissionId};
use songcraft_web::views::editor::{EditorNotice, EMPTY_STATE, LIST_FAILED};
use songcraft_web::views::escape;

fn setup(api: FakeStudioApi) -> (Arc<FakeStudioApi>, songcraft_web::state::AppState) {
    let api = Arc::new(api);
    let state = common::test_state(Arc::clone(&api));
    (api, state)
}

// ---------------------------------------------------------------------------
// Test: Pending submissions are listed with both decisions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_lists_pending_submissions() {
    let (_, state) = setup(FakeStudioApi::with_submissions(vec![
        submission(1, "lofi study beats"),
        submission(2, "epic trailer"),
    ]));
    let response = get(common::build_test_app(state), "/editor").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Editor Dashboard"));
    assert!(html.contains("Prompt: lofi study beats"));
    assert!(html.contains(r#"<audio controls src="https://cdn.example/pending/2.mp3">"#));
    assert_eq!(html.matches(">Approve</button>").count(), 2);
    assert_eq!(html.matches(">Disapprove</button>").count(), 2);
}

#[tokio::test]
async fn empty_and_failed_lists_are_distinct() {
    let (_, state) = setup(FakeStudioApi::default());
    let html = body_text(get(common::build_test_app(state), "/editor").await).await;
    assert!(html.contains(EMPTY_STATE));

    let (_, state) = setup(FakeStudioApi::default().failing_reads());
    let response = get(common::build_test_app(state), "/editor").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&escape(LIST_FAILED)));
    assert!(!html.contains(EMPTY_STATE));
}

// ---------------------------------------------------------------------------
// Test: Approve sends one decision and the item disappears
// ---------------------------------------------------------------------------

#[tokio::test]
async fn approve_sends_decision_and_hides_item() {
    let (api, state) = setup(FakeStudioApi::with_submissions(vec![
        submission(1, "lofi study beats"),
        submission(2, "epic trailer"),
    ]));
    let app = common::build_test_app(state);

    let response = post_form(
        app.clone(),
        "/editor/decisions",
        &[("id", "1"), ("approved", "true")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let target = location(&response);
    assert_eq!(target, "/editor?decided=1&notice=approved");
    assert_eq!(
        api.decisions(),
        vec![(SubmissionId::Number(1), Decision::Approve)]
    );

    // The fake still lists id 1; the dashboard filters it out.
    let html = body_text(get(app, &target).await).await;
    assert!(!html.contains("Prompt: lofi study beats"));
    assert!(html.contains("Prompt: epic trailer"));
    assert!(html.contains(&escape(EditorNotice::Approved.message())));
}

#[tokio::test]
async fn disapprove_sends_rejection() {
    let (api, state) = setup(FakeStudioApi::with_submissions(vec![submission(5, "polka")]));
    let response = post_form(
        common::build_test_app(state),
        "/editor/decisions",
        &[("id", "5"), ("approved", "false")],
    )
    .await;

    assert_eq!(location(&response), "/editor?decided=5&notice=rejected");
    assert_eq!(
        api.decisions(),
        vec![(SubmissionId::Number(5), Decision::Reject)]
    );
}

#[tokio::test]
async fn text_ids_round_trip() {
    let (api, state) = setup(FakeStudioApi::default());
    let response = post_form(
        common::build_test_app(state),
        "/editor/decisions",
        &[("id", r#""sub-7""#), ("approved", "true")],
    )
    .await;

    assert_eq!(
        location(&response),
        "/editor?decided=%22sub-7%22&notice=approved"
    );
    assert_eq!(api.decisions()[0].0, SubmissionId::Text("sub-7".into()));
}

// ---------------------------------------------------------------------------
// Test: Digit-only string ids keep their string type through the form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn digit_string_ids_stay_strings() {
    let text_submission = |id: &str, prompt: &str| Submission {
        id: SubmissionId::Text(id.to_string()),
        prompt: prompt.to_string(),
        audio_url: format!("https://cdn.example/pending/{id}.mp3"),
    };
    let (api, state) = setup(FakeStudioApi::with_submissions(vec![
        text_submission("42", "first"),
        text_submission("43", "second"),
    ]));
    let app = common::build_test_app(state);

    // Post back exactly what the dashboard rendered for the first card.
    let html = body_text(get(app.clone(), "/editor").await).await;
    let ids = hidden_values(&html, "id");
    assert_eq!(ids.len(), 2);

    let response = post_form(
        app.clone(),
        "/editor/decisions",
        &[("id", ids[0].as_str()), ("approved", "true")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        api.decisions(),
        vec![(SubmissionId::Text("42".into()), Decision::Approve)]
    );

    let html = body_text(get(app, &location(&response)).await).await;
    assert!(!html.contains("Prompt: first"));
    assert!(html.contains("Prompt: second"));
}

// ---------------------------------------------------------------------------
// Test: Studio failure keeps the item listed with a notice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_decision_keeps_item_with_notice() {
    let (api, state) = setup(
        FakeStudioApi::with_submissions(vec![submission(1, "lofi study beats")]).failing_writes(),
    );
    let app = common::build_test_app(state);

    let response = post_form(
        app.clone(),
        "/editor/decisions",
        &[("id", "1"), ("approved", "true")],
    )
    .await;
    let target = location(&response);
    assert_eq!(target, "/editor?notice=failed");
    assert!(api.decisions().is_empty());

    let html = body_text(get(app, &target).await).await;
    assert!(html.contains("Prompt: lofi study beats"));
    assert!(html.contains(r#"data-notice="failed""#));
}

// ---------------------------------------------------------------------------
// Test: A decision already in flight refuses a second one
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_in_flight_decision_is_refused() {
    let (api, state) = setup(FakeStudioApi::with_submissions(vec![submission(3, "ska")]));
    let held = state
        .decisions
        .try_begin(SubmissionId::Number(3))
        .expect("first claim succeeds");

    let response = post_form(
        common::build_test_app(state.clone()),
        "/editor/decisions",
        &[("id", "3"), ("approved", "true")],
    )
    .await;
    assert_eq!(location(&response), "/editor?notice=busy");
    assert!(api.decisions().is_empty());

    // Once the first decision completes the id is free again.
    drop(held);
    let response = post_form(
        common::build_test_app(state),
        "/editor/decisions",
        &[("id", "3"), ("approved", "true")],
    )
    .await;
    assert_eq!(location(&response), "/editor?decided=3&notice=approved");
    assert_eq!(api.decisions().len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Hand-edited query parameters are ignored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_query_values_still_render_dashboard() {
    let (_, state) = setup(FakeStudioApi::with_submissions(vec![submission(1, "lofi")]));
    let response = get(
        common::build_test_app(state),
        "/editor?notice=bogus&decided=%5B1%5D",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Editor Dashboard"));
    assert!(html.contains("Prompt: lofi"));
    assert!(!html.contains("data-notice"));
}

// ---------------------------------------------------------------------------
// Test: Malformed decisions are rejected before reaching the studio API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let (api, state) = setup(FakeStudioApi::default());

    // Blank, and bare text that was never rendered as a form value.
    for raw in ["  ", "sub-7"] {
        let response = post_form(
            common::build_test_app(state.clone()),
            "/editor/decisions",
            &[("id", raw), ("approved", "true")],
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "id {raw:?}");
    }
    assert!(api.decisions().is_empty());
}
