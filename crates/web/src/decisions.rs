//! Tracking of editor decisions that are still in flight to the studio API.
//!
//! Two approve/reject clicks on the same submission must not both reach the
//! studio API while the first is unanswered. A decision holds a
//! [`DecisionGuard`] for as long as its request runs; the id is released
//! when the guard drops, whatever the outcome.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use songcraft_core::types::SubmissionId;

/// Set of submission ids with a decision currently being sent.
#[derive(Debug, Default)]
pub struct InFlightDecisions {
    ids: Mutex<HashSet<SubmissionId>>,
}

impl InFlightDecisions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `id` for a decision. Returns `None` if another decision for the
    /// same id is still running.
    pub fn try_begin(self: &Arc<Self>, id: SubmissionId) -> Option<DecisionGuard> {
        let inserted = self
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone());

        inserted.then(|| DecisionGuard {
            owner: Arc::clone(self),
            id,
        })
    }

    pub fn is_in_flight(&self, id: &SubmissionId) -> bool {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }
}

/// Releases its submission id on drop.
#[derive(Debug)]
pub struct DecisionGuard {
    owner: Arc<InFlightDecisions>,
    id: SubmissionId,
}

impl DecisionGuard {
    pub fn id(&self) -> &SubmissionId {
        &self.id
    }
}

impl Drop for DecisionGuard {
    fn drop(&mut self) {
        self.owner
            .ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}
