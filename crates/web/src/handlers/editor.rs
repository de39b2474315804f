//! Handlers for the editor dashboard.
//!
//! Decisions follow post/redirect/get: `POST /editor/decisions` sends the
//! decision and redirects to `GET /editor`, which re-fetches the pending
//! list. The id just decided is filtered out of that list so a studio API
//! that lags behind its own writes cannot show it again straight away.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use songcraft_core::types::{Decision, SubmissionId};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::editor::EditorNotice;
use crate::views::{self, Listing};

// ---------------------------------------------------------------------------
// GET /editor
// ---------------------------------------------------------------------------

/// Query parameters set by the decision redirect.
///
/// Both are kept as raw text; values that do not parse are ignored so a
/// hand-edited URL still renders the dashboard.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub decided: Option<String>,
    pub notice: Option<String>,
}

/// Render every pending submission, fetched once per request.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let decided = query
        .decided
        .as_deref()
        .and_then(|raw| SubmissionId::from_form_value(raw).ok());
    let notice = query.notice.as_deref().and_then(EditorNotice::parse);

    let html = match state.api.list_submissions().await {
        Ok(mut submissions) => {
            if let Some(decided) = &decided {
                submissions.retain(|s| &s.id != decided);
            }
            views::editor::render(Listing::Loaded(&submissions), notice)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching submissions");
            views::editor::render(Listing::Unavailable, notice)
        }
    };
    Html(html)
}

// ---------------------------------------------------------------------------
// POST /editor/decisions
// ---------------------------------------------------------------------------

/// Body of an Approve / Disapprove button press. `id` carries
/// [`SubmissionId::to_form_value`].
#[derive(Debug, Deserialize)]
pub struct DecisionForm {
    pub id: String,
    pub approved: bool,
}

/// Send one decision to the studio API and redirect back to the dashboard.
///
/// A second decision for an id whose first decision is still in flight is
/// refused without contacting the studio API.
pub async fn decide(
    State(state): State<AppState>,
    Form(form): Form<DecisionForm>,
) -> AppResult<Redirect> {
    let id = SubmissionId::from_form_value(&form.id)?;
    let decision = Decision::from_approved(form.approved);

    let Some(guard) = state.decisions.try_begin(id.clone()) else {
        tracing::warn!(%id, decision = decision.as_str(), "Decision already in flight, ignoring");
        return Ok(Redirect::to(&dashboard_location(None, EditorNotice::Busy)));
    };

    let location = match state.api.decide(guard.id(), decision).await {
        Ok(()) => {
            tracing::info!(%id, decision = decision.as_str(), "Submission decided");
            let notice = match decision {
                Decision::Approve => EditorNotice::Approved,
                Decision::Reject => EditorNotice::Rejected,
            };
            dashboard_location(Some(&id), notice)
        }
        Err(e) => {
            tracing::error!(%id, error = %e, "Error approving/rejecting submission");
            dashboard_location(None, EditorNotice::Failed)
        }
    };

    Ok(Redirect::to(&location))
}

/// `/editor?decided=<id>&notice=<notice>` with both values form-encoded.
fn dashboard_location(decided: Option<&SubmissionId>, notice: EditorNotice) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if let Some(id) = decided {
        query.append_pair("decided", &id.to_form_value());
    }
    query.append_pair("notice", notice.as_str());
    format!("/editor?{}", query.finish())
}
