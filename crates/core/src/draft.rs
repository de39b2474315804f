//! The in-progress questionnaire answer set and the flattened payload it
//! becomes once validated.
//!
//! Answers are grouped by the wizard step that collects them. Values are
//! kept exactly as entered (text), so a draft can always be re-rendered
//! even when it is not yet valid.

use serde::{Deserialize, Serialize};

use crate::catalog::Intensity;

/// Default tempo in BPM for a fresh draft.
pub const DEFAULT_TEMPO: u16 = 120;

/// Default track length in seconds for a fresh draft.
pub const DEFAULT_LENGTH_SECS: u16 = 180;

/// Step 1: genre and mood identifiers (empty when nothing is selected).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoundationAnswers {
    pub genre: String,
    pub mood: String,
}

/// Step 2: tempo and intensity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaceAnswers {
    pub tempo: String,
    pub intensity: String,
}

impl Default for PaceAnswers {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO.to_string(),
            intensity: Intensity::Low.as_str().to_string(),
        }
    }
}

/// Step 3: length plus optional key and structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeAnswers {
    pub length: String,
    pub key: String,
    pub structure: String,
}

impl Default for ShapeAnswers {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH_SECS.to_string(),
            key: String::new(),
            structure: String::new(),
        }
    }
}

/// Step 4: lyrics, vocal style, instruments and the music flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolishAnswers {
    pub has_lyrics: bool,
    pub lyric_theme: String,
    pub vocal_style: String,
    pub instruments: String,
    pub has_music: bool,
}

impl Default for PolishAnswers {
    fn default() -> Self {
        Self {
            has_lyrics: false,
            lyric_theme: String::new(),
            vocal_style: String::new(),
            instruments: String::new(),
            has_music: true,
        }
    }
}

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub foundation: FoundationAnswers,
    pub pace: PaceAnswers,
    pub shape: ShapeAnswers,
    pub polish: PolishAnswers,
}

/// Validated draft, flattened to the body of `POST /api/submit-questionnaire`.
///
/// Genre and mood carry their identifier values (`"pop"`, `"happy"`), not
/// their labels. Optional text is omitted when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub genre: String,
    pub mood: String,
    pub tempo: u16,
    pub intensity: Intensity,
    pub length: u16,
    pub has_lyrics: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyric_theme: Option<String>,
    pub has_music: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocal_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Trim free text and drop it when blank.
pub(crate) fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fresh_draft_defaults() {
        let draft = SubmissionDraft::default();
        assert_eq!(draft.pace.tempo, "120");
        assert_eq!(draft.pace.intensity, "Low");
        assert_eq!(draft.shape.length, "180");
        assert!(draft.polish.has_music);
        assert!(!draft.polish.has_lyrics);
        assert!(draft.foundation.genre.is_empty());
    }

    #[test]
    fn payload_omits_empty_optional_text() {
        let payload = SubmissionPayload {
            genre: "pop".into(),
            mood: "happy".into(),
            tempo: 120,
            intensity: Intensity::Medium,
            length: 180,
            has_lyrics: false,
            lyric_theme: None,
            has_music: true,
            vocal_style: None,
            instruments: Some("Guitar, Piano".into()),
            structure: None,
            key: None,
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "genre": "pop",
                "mood": "happy",
                "tempo": 120,
                "intensity": "Medium",
                "length": 180,
                "hasLyrics": false,
                "hasMusic": true,
                "instruments": "Guitar, Piano"
            })
        );
    }

    #[test]
    fn optional_text_trims_and_drops_blank() {
        assert_eq!(optional_text("  C Major "), Some("C Major".to_string()));
        assert_eq!(optional_text("   "), None);
    }
}
