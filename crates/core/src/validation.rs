//! Field validators for the questionnaire.
//!
//! Each validator checks one field and returns either the typed value or a
//! [`FieldError`]. [`validate_draft`] runs all of them and either produces
//! the [`SubmissionPayload`] or every failing field, in form order.

use std::fmt;

use serde::Serialize;

use crate::catalog::{self, Choice, Intensity};
use crate::draft::{optional_text, SubmissionDraft, SubmissionPayload};
use crate::questionnaire::QuestionnaireStep;

pub const TEMPO_MIN: u16 = 60;
pub const TEMPO_MAX: u16 = 200;
pub const LENGTH_MIN_SECS: u16 = 30;
pub const LENGTH_MAX_SECS: u16 = 600;

pub const MSG_GENRE_REQUIRED: &str = "Genre is required—set the vibe!";
pub const MSG_MOOD_REQUIRED: &str = "Mood drives emotion—pick one!";
pub const MSG_TEMPO_REQUIRED: &str = "Tempo sets the pace!";
pub const MSG_TEMPO_RANGE: &str = "Tempo must be between 60 and 200 BPM";
pub const MSG_INTENSITY_REQUIRED: &str = "Intensity amps the energy!";
pub const MSG_LENGTH_REQUIRED: &str = "How long should your hit last?";
pub const MSG_LENGTH_RANGE: &str = "Length must be between 30 and 600 seconds";
pub const MSG_LYRIC_THEME_REQUIRED: &str = "Theme inspires lyrics!";
pub const MSG_MUSIC_REQUIRED: &str = "Music is essential—enable it!";

/// Questionnaire fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Genre,
    Mood,
    Tempo,
    Intensity,
    Length,
    LyricTheme,
    HasMusic,
}

impl Field {
    /// Form/wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Mood => "mood",
            Self::Tempo => "tempo",
            Self::Intensity => "intensity",
            Self::Length => "length",
            Self::LyricTheme => "lyricTheme",
            Self::HasMusic => "hasMusic",
        }
    }

    /// The wizard step that renders this field.
    pub fn step(self) -> QuestionnaireStep {
        match self {
            Self::Genre | Self::Mood => QuestionnaireStep::Foundation,
            Self::Tempo | Self::Intensity => QuestionnaireStep::PaceAndEnergy,
            Self::Length => QuestionnaireStep::LengthAndStyle,
            Self::LyricTheme | Self::HasMusic => QuestionnaireStep::LyricsAndPolish,
        }
    }
}

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }

    pub fn step(&self) -> QuestionnaireStep {
        self.field.step()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str(), self.message)
    }
}

/// Every failing field of a draft, in form order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} questionnaire field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The error for a given field, if it failed.
    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// The earliest wizard step holding an error.
    pub fn first_step(&self) -> Option<QuestionnaireStep> {
        self.0.iter().map(FieldError::step).min()
    }
}

pub fn validate_genre(raw: &str) -> Result<&'static Choice, FieldError> {
    catalog::find_genre(raw.trim()).ok_or_else(|| FieldError::new(Field::Genre, MSG_GENRE_REQUIRED))
}

pub fn validate_mood(raw: &str) -> Result<&'static Choice, FieldError> {
    catalog::find_mood(raw.trim()).ok_or_else(|| FieldError::new(Field::Mood, MSG_MOOD_REQUIRED))
}

pub fn validate_tempo(raw: &str) -> Result<u16, FieldError> {
    bounded_integer(
        raw,
        TEMPO_MIN,
        TEMPO_MAX,
        FieldError::new(Field::Tempo, MSG_TEMPO_REQUIRED),
        FieldError::new(Field::Tempo, MSG_TEMPO_RANGE),
    )
}

pub fn validate_intensity(raw: &str) -> Result<Intensity, FieldError> {
    Intensity::parse(raw.trim())
        .ok_or_else(|| FieldError::new(Field::Intensity, MSG_INTENSITY_REQUIRED))
}

pub fn validate_length(raw: &str) -> Result<u16, FieldError> {
    bounded_integer(
        raw,
        LENGTH_MIN_SECS,
        LENGTH_MAX_SECS,
        FieldError::new(Field::Length, MSG_LENGTH_REQUIRED),
        FieldError::new(Field::Length, MSG_LENGTH_RANGE),
    )
}

/// The theme is required only when lyrics are requested, and is dropped
/// entirely when they are not.
pub fn validate_lyric_theme(has_lyrics: bool, raw: &str) -> Result<Option<String>, FieldError> {
    if !has_lyrics {
        return Ok(None);
    }
    optional_text(raw)
        .map(Some)
        .ok_or_else(|| FieldError::new(Field::LyricTheme, MSG_LYRIC_THEME_REQUIRED))
}

pub fn validate_has_music(has_music: bool) -> Result<(), FieldError> {
    if has_music {
        Ok(())
    } else {
        Err(FieldError::new(Field::HasMusic, MSG_MUSIC_REQUIRED))
    }
}

/// Validate the whole draft and flatten it into the submission payload.
pub fn validate_draft(draft: &SubmissionDraft) -> Result<SubmissionPayload, ValidationErrors> {
    let mut errors = Vec::new();

    let genre = validate_genre(&draft.foundation.genre);
    let mood = validate_mood(&draft.foundation.mood);
    let tempo = validate_tempo(&draft.pace.tempo);
    let intensity = validate_intensity(&draft.pace.intensity);
    let length = validate_length(&draft.shape.length);
    let lyric_theme = validate_lyric_theme(draft.polish.has_lyrics, &draft.polish.lyric_theme);
    let has_music = validate_has_music(draft.polish.has_music);

    let genre = collect(genre, &mut errors);
    let mood = collect(mood, &mut errors);
    let tempo = collect(tempo, &mut errors);
    let intensity = collect(intensity, &mut errors);
    let length = collect(length, &mut errors);
    let lyric_theme = collect(lyric_theme, &mut errors);
    let has_music = collect(has_music, &mut errors);

    match (genre, mood, tempo, intensity, length, lyric_theme, has_music) {
        (
            Some(genre),
            Some(mood),
            Some(tempo),
            Some(intensity),
            Some(length),
            Some(lyric_theme),
            Some(()),
        ) => Ok(SubmissionPayload {
            genre: genre.value.to_string(),
            mood: mood.value.to_string(),
            tempo,
            intensity,
            length,
            has_lyrics: draft.polish.has_lyrics,
            lyric_theme,
            has_music: true,
            vocal_style: optional_text(&draft.polish.vocal_style),
            instruments: optional_text(&draft.polish.instruments),
            structure: optional_text(&draft.shape.structure),
            key: optional_text(&draft.shape.key),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

/// Parse an integer within `[min, max]`. Blank or non-integer input yields
/// `missing`; an integer outside the range yields `out_of_range`.
fn bounded_integer(
    raw: &str,
    min: u16,
    max: u16,
    missing: FieldError,
    out_of_range: FieldError,
) -> Result<u16, FieldError> {
    let value: i64 = raw.trim().parse().map_err(|_| missing)?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(out_of_range);
    }
    u16::try_from(value).map_err(|_| out_of_range)
}
