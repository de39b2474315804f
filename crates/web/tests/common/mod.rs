#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use songcraft_client::{ApiError, StudioApi};
use songcraft_core::draft::SubmissionPayload;
use songcraft_core::types::{ApprovedItem, Decision, Submission, SubmissionId};
use songcraft_web::config::ServerConfig;
use songcraft_web::router::build_app_router;
use songcraft_web::state::AppState;

// ---------------------------------------------------------------------------
// Fake studio API
// ---------------------------------------------------------------------------

/// In-memory studio API that records every write.
///
/// Decided submissions stay in the pending list, which models a studio API
/// whose reads lag behind its writes.
#[derive(Default)]
pub struct FakeStudioApi {
    pub submissions: Mutex<Vec<Submission>>,
    pub approved: Mutex<Vec<ApprovedItem>>,
    pub decisions: Mutex<Vec<(SubmissionId, Decision)>>,
    pub submitted: Mutex<Vec<SubmissionPayload>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FakeStudioApi {
    pub fn with_submissions(submissions: Vec<Submission>) -> Self {
        Self {
            submissions: Mutex::new(submissions),
            ..Default::default()
        }
    }

    pub fn with_approved(approved: Vec<ApprovedItem>) -> Self {
        Self {
            approved: Mutex::new(approved),
            ..Default::default()
        }
    }

    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    pub fn decisions(&self) -> Vec<(SubmissionId, Decision)> {
        self.decisions.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<SubmissionPayload> {
        self.submitted.lock().unwrap().clone()
    }

    fn check(flag: &AtomicBool) -> Result<(), ApiError> {
        if flag.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: 503,
                body: "studio unavailable".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StudioApi for FakeStudioApi {
    async fn list_submissions(&self) -> Result<Vec<Submission>, ApiError> {
        Self::check(&self.fail_reads)?;
        Ok(self.submissions.lock().unwrap().clone())
    }

    async fn decide(&self, id: &SubmissionId, decision: Decision) -> Result<(), ApiError> {
        Self::check(&self.fail_writes)?;
        self.decisions.lock().unwrap().push((id.clone(), decision));
        Ok(())
    }

    async fn list_approved(&self) -> Result<Vec<ApprovedItem>, ApiError> {
        Self::check(&self.fail_reads)?;
        Ok(self.approved.lock().unwrap().clone())
    }

    async fn submit_questionnaire(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        Self::check(&self.fail_writes)?;
        self.submitted.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

pub fn submission(id: i64, prompt: &str) -> Submission {
    Submission {
        id: SubmissionId::Number(id),
        prompt: prompt.to_string(),
        audio_url: format!("https://cdn.example/pending/{id}.mp3"),
    }
}

pub fn approved(id: i64) -> ApprovedItem {
    ApprovedItem {
        id: SubmissionId::Number(id),
        audio_url: format!("https://cdn.example/approved/{id}.mp3"),
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        studio_api_url: "http://studio.invalid".to_string(),
        request_timeout_secs: 30,
        upstream_timeout_secs: 5,
    }
}

pub fn test_state(api: Arc<FakeStudioApi>) -> AppState {
    AppState::new(api)
}

/// Build the full application router, with the same middleware stack as
/// production, around the given state.
pub fn build_test_app(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get("location")
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Values of every `<input type="hidden" name="{name}">` in `html`,
/// unescaped the way a browser would submit them.
pub fn hidden_values(html: &str, name: &str) -> Vec<String> {
    let marker = format!(r#"type="hidden" name="{name}" value=""#);
    html.split(marker.as_str())
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .map(|raw| {
            raw.replace("&quot;", "\"")
                .replace("&#39;", "'")
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&")
        })
        .collect()
}
