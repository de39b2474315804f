//! REST client for the studio API endpoints.
//!
//! Wraps the four endpoints the front-end consumes (pending list, decision,
//! approved list, questionnaire submission) using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use songcraft_core::draft::SubmissionPayload;
use songcraft_core::types::{ApprovedItem, Decision, DecisionRequest, Submission, SubmissionId};

use crate::error::ApiError;

pub const PATH_SUBMISSIONS: &str = "/api/submissions";
pub const PATH_APPROVE: &str = "/api/approve";
pub const PATH_APPROVED: &str = "/api/approved";
pub const PATH_SUBMIT_QUESTIONNAIRE: &str = "/api/submit-questionnaire";

/// Operations the front-end needs from the studio API.
///
/// Responses of [`decide`](Self::decide) and
/// [`submit_questionnaire`](Self::submit_questionnaire) carry no agreed
/// shape yet, so implementations only report success or failure.
#[async_trait]
pub trait StudioApi: Send + Sync {
    /// `GET /api/submissions`: every pending submission.
    async fn list_submissions(&self) -> Result<Vec<Submission>, ApiError>;

    /// `POST /api/approve` with `{id, approved}`.
    async fn decide(&self, id: &SubmissionId, decision: Decision) -> Result<(), ApiError>;

    /// `GET /api/approved`: every approved item.
    async fn list_approved(&self) -> Result<Vec<ApprovedItem>, ApiError>;

    /// `POST /api/submit-questionnaire` with the flattened draft.
    async fn submit_questionnaire(&self, payload: &SubmissionPayload) -> Result<(), ApiError>;
}

/// HTTP client for a single studio API deployment.
#[derive(Debug, Clone)]
pub struct HttpStudioApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStudioApi {
    /// Create a client for the studio API at `base_url`
    /// (e.g. `http://localhost:8080`), failing requests after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &'static str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        let response = ensure_success(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { path, source })
    }

    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &'static str,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[async_trait]
impl StudioApi for HttpStudioApi {
    async fn list_submissions(&self) -> Result<Vec<Submission>, ApiError> {
        self.get_json(PATH_SUBMISSIONS).await
    }

    async fn decide(&self, id: &SubmissionId, decision: Decision) -> Result<(), ApiError> {
        let body = DecisionRequest::new(id.clone(), decision);
        self.post_json(PATH_APPROVE, &body).await?;
        tracing::debug!(%id, decision = decision.as_str(), "Decision accepted by studio API");
        Ok(())
    }

    async fn list_approved(&self) -> Result<Vec<ApprovedItem>, ApiError> {
        self.get_json(PATH_APPROVED).await
    }

    async fn submit_questionnaire(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        self.post_json(PATH_SUBMIT_QUESTIONNAIRE, payload).await
    }
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or [`ApiError::Status`] with the body text.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
