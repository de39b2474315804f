//! Entity types mirrored from the studio API.
//!
//! None of these are owned here: they are read-only views of server state,
//! held only for the duration of one render.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Server-assigned identifier for a submission.
///
/// The studio API does not document whether ids are numbers or strings, so
/// both are accepted and serialized back in the shape they arrived in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl SubmissionId {
    /// Text form for hidden inputs and query strings.
    ///
    /// This is the id's JSON rendering (`42` or `"42"`), so the number/text
    /// distinction survives the trip through HTML and back.
    pub fn to_form_value(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => serde_json::Value::from(s.as_str()).to_string(),
        }
    }

    /// Parse a value produced by [`to_form_value`](Self::to_form_value),
    /// yielding exactly the variant that was rendered.
    pub fn from_form_value(raw: &str) -> Result<Self, CoreError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(CoreError::Validation(
                "Submission id must not be empty".to_string(),
            ));
        }
        serde_json::from_str(raw)
            .map_err(|_| CoreError::Validation(format!("Invalid submission id '{raw}'")))
    }
}

/// A pending generation request awaiting an editor decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: SubmissionId,
    #[serde(default)]
    pub prompt: String,
    pub audio_url: String,
}

/// A submission the editor accepted, exposed to the client portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedItem {
    pub id: SubmissionId,
    pub audio_url: String,
}

/// Editor verdict on a pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn from_approved(approved: bool) -> Self {
        if approved {
            Self::Approve
        } else {
            Self::Reject
        }
    }

    /// Wire value of the `approved` flag.
    pub fn approved(self) -> bool {
        matches!(self, Self::Approve)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approved",
            Self::Reject => "rejected",
        }
    }
}

/// Body of `POST /api/approve`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub id: SubmissionId,
    pub approved: bool,
}

impl DecisionRequest {
    pub fn new(id: SubmissionId, decision: Decision) -> Self {
        Self {
            id,
            approved: decision.approved(),
        }
    }
}
