//! Questionnaire wizard: step definitions and the state machine that gates
//! the single eventual submission.
//!
//! States are `Editing(step)` for steps 1 through 4, `Submitting` while the
//! payload is in flight, and `Submitted` once the studio API accepted it.
//! Navigation is never blocked by validation; only `Submit` validates.

use serde::{Deserialize, Serialize};

use crate::draft::{SubmissionDraft, SubmissionPayload};
use crate::error::CoreError;
use crate::validation::{validate_draft, ValidationErrors};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The four steps of the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    Foundation,
    PaceAndEnergy,
    LengthAndStyle,
    LyricsAndPolish,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 4;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 4;

impl QuestionnaireStep {
    /// Convert a 1-based step number to a `QuestionnaireStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Foundation),
            2 => Ok(Self::PaceAndEnergy),
            3 => Ok(Self::LengthAndStyle),
            4 => Ok(Self::LyricsAndPolish),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Foundation => 1,
            Self::PaceAndEnergy => 2,
            Self::LengthAndStyle => 3,
            Self::LyricsAndPolish => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Set the Foundation",
            Self::PaceAndEnergy => "Dial in Pace & Energy",
            Self::LengthAndStyle => "Shape Length & Style",
            Self::LyricsAndPolish => "Add Lyrics & Polish",
        }
    }

    /// Caption of the button that advances past this step, if any.
    pub fn next_label(self) -> Option<&'static str> {
        match self {
            Self::Foundation => Some("Next: Pace & Energy"),
            Self::PaceAndEnergy => Some("Next: Length & Style"),
            Self::LengthAndStyle => Some("Next: Lyrics & Polish"),
            Self::LyricsAndPolish => None,
        }
    }

    /// The following step, clamped at the last one.
    pub fn next(self) -> Self {
        Self::from_number(self.to_number() + 1).unwrap_or(Self::LyricsAndPolish)
    }

    /// The preceding step, clamped at the first one.
    pub fn previous(self) -> Self {
        Self::from_number(self.to_number().saturating_sub(1)).unwrap_or(Self::Foundation)
    }

    pub fn is_first(self) -> bool {
        self == Self::Foundation
    }

    pub fn is_last(self) -> bool {
        self == Self::LyricsAndPolish
    }

    /// Width of the progress bar, in percent.
    pub fn progress_percent(self) -> u8 {
        self.to_number() * 100 / TOTAL_STEPS
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Editing(QuestionnaireStep),
    Submitting,
    Submitted,
}

/// User-triggered transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardAction {
    Next,
    Back,
    Submit,
}

/// A questionnaire in progress.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    state: WizardState,
    draft: SubmissionDraft,
    errors: Option<ValidationErrors>,
    submit_attempted: bool,
    submit_failed: bool,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new()
    }
}

impl Questionnaire {
    /// A fresh questionnaire on step 1 with default answers.
    pub fn new() -> Self {
        Self::resume(QuestionnaireStep::Foundation, SubmissionDraft::default(), false)
    }

    /// Rebuild a questionnaire from a previously rendered form.
    ///
    /// When `submit_attempted` is set, the inline errors are recomputed so
    /// they track the answers the user has since corrected.
    pub fn resume(step: QuestionnaireStep, draft: SubmissionDraft, submit_attempted: bool) -> Self {
        let errors = if submit_attempted {
            validate_draft(&draft).err()
        } else {
            None
        };
        Self {
            state: WizardState::Editing(step),
            draft,
            errors,
            submit_attempted,
            submit_failed: false,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// The step being edited, or `None` once submission has started.
    pub fn current_step(&self) -> Option<QuestionnaireStep> {
        match self.state {
            WizardState::Editing(step) => Some(step),
            WizardState::Submitting | WizardState::Submitted => None,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    pub fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Whether the last submission was refused by the studio API.
    pub fn submit_failed(&self) -> bool {
        self.submit_failed
    }

    pub fn is_submitted(&self) -> bool {
        self.state == WizardState::Submitted
    }

    /// Apply a user action. Returns the payload to send when the action
    /// moved the wizard into `Submitting`.
    pub fn apply(&mut self, action: WizardAction) -> Option<SubmissionPayload> {
        match action {
            WizardAction::Next => {
                self.next();
                None
            }
            WizardAction::Back => {
                self.back();
                None
            }
            WizardAction::Submit => self.submit(),
        }
    }

    pub fn next(&mut self) {
        if let WizardState::Editing(step) = self.state {
            self.state = WizardState::Editing(step.next());
        }
    }

    pub fn back(&mut self) {
        if let WizardState::Editing(step) = self.state {
            self.state = WizardState::Editing(step.previous());
        }
    }

    /// Validate the whole draft.
    ///
    /// On failure the wizard stays editable and moves to the earliest step
    /// holding an error. On success it enters `Submitting` and hands back
    /// the payload; the caller reports the outcome with
    /// [`mark_succeeded`](Self::mark_succeeded) or
    /// [`mark_failed`](Self::mark_failed).
    pub fn submit(&mut self) -> Option<SubmissionPayload> {
        if !matches!(self.state, WizardState::Editing(_)) {
            return None;
        }
        self.submit_attempted = true;
        self.submit_failed = false;

        match validate_draft(&self.draft) {
            Ok(payload) => {
                self.errors = None;
                self.state = WizardState::Submitting;
                Some(payload)
            }
            Err(errors) => {
                if let Some(step) = errors.first_step() {
                    self.state = WizardState::Editing(step);
                }
                self.errors = Some(errors);
                None
            }
        }
    }

    pub fn mark_succeeded(&mut self) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Submitted;
        }
    }

    /// The studio API refused or never answered. The draft is kept and the
    /// user is returned to the last step.
    pub fn mark_failed(&mut self) {
        if self.state == WizardState::Submitting {
            self.state = WizardState::Editing(QuestionnaireStep::LyricsAndPolish);
            self.submit_failed = true;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
