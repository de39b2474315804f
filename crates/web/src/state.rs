use std::sync::Arc;

use songcraft_client::StudioApi;

use crate::decisions::InFlightDecisions;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Studio API client. Swapped for a fake in tests.
    pub api: Arc<dyn StudioApi>,
    /// Editor decisions currently being sent upstream.
    pub decisions: Arc<InFlightDecisions>,
}

impl AppState {
    pub fn new(api: Arc<dyn StudioApi>) -> Self {
        Self {
            api,
            decisions: Arc::new(InFlightDecisions::new()),
        }
    }
}
