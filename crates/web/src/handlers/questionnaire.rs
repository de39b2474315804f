//! Handlers for the song questionnaire wizard.
//!
//! The wizard keeps no server-side session: every POST carries the whole
//! draft, the step it was rendered at and the button that was pressed.

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;

use songcraft_core::draft::{
    FoundationAnswers, PaceAnswers, PolishAnswers, ShapeAnswers, SubmissionDraft,
};
use songcraft_core::error::CoreError;
use songcraft_core::questionnaire::{
    Questionnaire, QuestionnaireStep, WizardAction, MAX_STEP, MIN_STEP,
};

use crate::error::AppResult;
use crate::state::AppState;
use crate::views;

// ---------------------------------------------------------------------------
// Form body
// ---------------------------------------------------------------------------

/// Everything one questionnaire POST carries.
///
/// All answers arrive as raw text so a half-filled or tampered form can be
/// re-rendered as entered. Absent fields fall back to the fresh-draft
/// defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireForm {
    #[serde(default)]
    pub step: String,
    pub action: Option<WizardAction>,
    pub submit_attempted: Option<String>,

    pub genre: Option<String>,
    pub mood: Option<String>,
    pub tempo: Option<String>,
    pub intensity: Option<String>,
    pub length: Option<String>,
    pub key: Option<String>,
    pub structure: Option<String>,
    pub has_lyrics: Option<String>,
    pub lyric_theme: Option<String>,
    pub vocal_style: Option<String>,
    pub instruments: Option<String>,
    pub has_music: Option<String>,
}

impl QuestionnaireForm {
    /// Step the form was rendered at. Out-of-range numbers are clamped.
    pub fn step(&self) -> Result<QuestionnaireStep, CoreError> {
        let n: i64 = self.step.trim().parse().map_err(|_| {
            CoreError::Validation(format!("Invalid step '{}'", self.step.trim()))
        })?;
        let clamped = n.clamp(i64::from(MIN_STEP), i64::from(MAX_STEP));
        QuestionnaireStep::from_number(clamped as u8)
    }

    /// Rebuild the draft, using fresh-draft defaults for absent fields.
    pub fn draft(&self) -> SubmissionDraft {
        let defaults = SubmissionDraft::default();
        SubmissionDraft {
            foundation: FoundationAnswers {
                genre: text_or(&self.genre, defaults.foundation.genre),
                mood: text_or(&self.mood, defaults.foundation.mood),
            },
            pace: PaceAnswers {
                tempo: text_or(&self.tempo, defaults.pace.tempo),
                intensity: text_or(&self.intensity, defaults.pace.intensity),
            },
            shape: ShapeAnswers {
                length: text_or(&self.length, defaults.shape.length),
                key: text_or(&self.key, defaults.shape.key),
                structure: text_or(&self.structure, defaults.shape.structure),
            },
            polish: PolishAnswers {
                // An unchecked checkbox is simply absent.
                has_lyrics: flag_or(&self.has_lyrics, false),
                lyric_theme: text_or(&self.lyric_theme, defaults.polish.lyric_theme),
                vocal_style: text_or(&self.vocal_style, defaults.polish.vocal_style),
                instruments: text_or(&self.instruments, defaults.polish.instruments),
                has_music: flag_or(&self.has_music, defaults.polish.has_music),
            },
        }
    }

    pub fn into_questionnaire(self) -> Result<Questionnaire, CoreError> {
        let step = self.step()?;
        let submit_attempted = flag_or(&self.submit_attempted, false);
        Ok(Questionnaire::resume(step, self.draft(), submit_attempted))
    }
}

fn text_or(value: &Option<String>, default: String) -> String {
    value.clone().unwrap_or(default)
}

/// Checkbox semantics: `true`/`on` are set, any other present value is not.
fn flag_or(value: &Option<String>, default: bool) -> bool {
    match value.as_deref() {
        None => default,
        Some(v) => matches!(v.trim(), "true" | "on"),
    }
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Render step 1 of a fresh questionnaire.
pub async fn show() -> Html<String> {
    Html(views::questionnaire::render(&Questionnaire::new()))
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

/// Apply the pressed button to the posted draft and render the result.
///
/// A valid submit sends the payload to the studio API exactly once. If the
/// studio API fails, the wizard returns to the last step with its answers
/// intact and a notice.
pub async fn transition(
    State(state): State<AppState>,
    Form(form): Form<QuestionnaireForm>,
) -> AppResult<Html<String>> {
    let action = form.action;
    let mut questionnaire = form.into_questionnaire()?;

    let Some(action) = action else {
        return Ok(Html(views::questionnaire::render(&questionnaire)));
    };

    if let Some(payload) = questionnaire.apply(action) {
        match state.api.submit_questionnaire(&payload).await {
            Ok(()) => {
                tracing::info!(
                    genre = %payload.genre,
                    mood = %payload.mood,
                    tempo = payload.tempo,
                    length = payload.length,
                    "Questionnaire submitted"
                );
                questionnaire.mark_succeeded();
            }
            Err(e) => {
                tracing::error!(error = %e, "Error submitting form");
                questionnaire.mark_failed();
            }
        }
    } else if action == WizardAction::Submit {
        tracing::debug!(
            errors = questionnaire.errors().map_or(0, |e| e.len()),
            "Questionnaire submit rejected by validation"
        );
    }

    Ok(Html(views::questionnaire::render(&questionnaire)))
}
