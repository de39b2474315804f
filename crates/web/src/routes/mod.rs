pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the HTML route tree.
///
/// ```text
/// GET    /                    questionnaire::show        (fresh draft, step 1)
/// POST   /                    questionnaire::transition  (next / back / submit)
/// GET    /editor              editor::dashboard          (?decided, notice)
/// POST   /editor/decisions    editor::decide
/// GET    /portal              portal::gallery
/// ```
pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::questionnaire::show).post(handlers::questionnaire::transition),
        )
        .route("/editor", get(handlers::editor::dashboard))
        .route("/editor/decisions", post(handlers::editor::decide))
        .route("/portal", get(handlers::portal::gallery))
}
