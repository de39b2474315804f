//! Questionnaire option catalog: genres, moods and intensity levels.

use serde::{Deserialize, Serialize};

/// A selectable option: the identifier sent to the studio API and the
/// label shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

/// A labelled group of options, rendered as an `<optgroup>`.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceGroup {
    pub label: &'static str,
    pub options: &'static [Choice],
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

/// Genres in display order. Popular picks come first.
pub const GENRE_GROUPS: &[ChoiceGroup] = &[
    ChoiceGroup {
        label: "Popular Hits",
        options: &[
            choice("pop", "Pop"),
            choice("hiphop", "Hip Hop"),
            choice("rock", "Rock"),
            choice("electronic", "Electronic"),
            choice("rnb", "R&B"),
        ],
    },
    ChoiceGroup {
        label: "Timeless Classics",
        options: &[
            choice("jazz", "Jazz"),
            choice("blues", "Blues"),
            choice("classical", "Classical"),
            choice("country", "Country"),
            choice("folk", "Folk"),
        ],
    },
    ChoiceGroup {
        label: "Special Vibes",
        options: &[
            choice("easylistening", "Easy Listening"),
            choice("holiday", "Holiday"),
            choice("religious", "Religious"),
            choice("latin", "Latin"),
            choice("reggae", "Reggae"),
            choice("childrens", "Children's"),
        ],
    },
];

pub const MOODS: &[Choice] = &[
    choice("happy", "Happy"),
    choice("sad", "Sad"),
    choice("energetic", "Energetic"),
    choice("relaxed", "Relaxed"),
    choice("angry", "Angry"),
    choice("calm", "Calm"),
    choice("romantic", "Romantic"),
    choice("mysterious", "Mysterious"),
    choice("uplifting", "Uplifting"),
    choice("melancholic", "Melancholic"),
    choice("empowering", "Empowering"),
    choice("nostalgic", "Nostalgic"),
    choice("playful", "Playful"),
    choice("intense", "Intense"),
];

/// All genres across groups, in display order.
pub fn genres() -> impl Iterator<Item = &'static Choice> {
    GENRE_GROUPS.iter().flat_map(|group| group.options.iter())
}

/// Look up a genre by its identifier value.
pub fn find_genre(value: &str) -> Option<&'static Choice> {
    genres().find(|c| c.value == value)
}

/// Look up a mood by its identifier value.
pub fn find_mood(value: &str) -> Option<&'static Choice> {
    MOODS.iter().find(|c| c.value == value)
}

/// Energy level of the requested track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Self::Low, Self::Medium, Self::High];

    /// Wire and display form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Exact match on the wire form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|i| i.as_str() == s)
    }
}
