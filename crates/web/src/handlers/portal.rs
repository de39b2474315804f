use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;
use crate::views::{self, Listing};

/// GET /portal -- every approved track, fetched once per request.
pub async fn gallery(State(state): State<AppState>) -> Html<String> {
    let html = match state.api.list_approved().await {
        Ok(items) => {
            tracing::debug!(count = items.len(), "Loaded approved music");
            views::portal::render(Listing::Loaded(&items))
        }
        Err(e) => {
            tracing::error!(error = %e, "Error fetching approved music");
            views::portal::render(Listing::Unavailable)
        }
    };
    Html(html)
}
