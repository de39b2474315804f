//! Questionnaire page: one wizard step per render, or the confirmation.
//!
//! Answers belonging to the other steps ride along as hidden inputs so the
//! whole draft comes back with every POST.

use songcraft_core::catalog::{Intensity, GENRE_GROUPS, MOODS};
use songcraft_core::draft::SubmissionDraft;
use songcraft_core::questionnaire::{Questionnaire, QuestionnaireStep};
use songcraft_core::validation::{Field, ValidationErrors, TEMPO_MAX, TEMPO_MIN};

use super::{escape, page, tip};

pub const CONFIRMATION: &str =
    "Thank you! Your request is brewing—check back soon for magic. Share your creation?";

pub const SUBMIT_FAILED_NOTICE: &str =
    "We couldn't send your request just now. Your answers are saved below, please try again.";

const INTRO: &str = "Unlock AI-powered hits tailored to you—royalty-free and ready to wow.";

pub fn render(questionnaire: &Questionnaire) -> String {
    let mut body = String::from(
        r#"<div class="questionnaire">
<h1>Let's Craft Your Musical Masterpiece!</h1>
"#,
    );
    body.push_str(&format!(
        r#"<p class="intro">{} <a class="upsell" title="{}">Why wait?</a></p>
"#,
        escape(INTRO),
        escape("Pro tip: Custom tracks boost engagement 5x—start now!"),
    ));

    match questionnaire.current_step() {
        Some(step) => body.push_str(&render_form(questionnaire, step)),
        None => body.push_str(&format!(
            r#"<p class="confirmation">{}</p>
"#,
            escape(CONFIRMATION)
        )),
    }

    body.push_str("</div>\n");
    page("Song Questionnaire", &body)
}

fn render_form(questionnaire: &Questionnaire, step: QuestionnaireStep) -> String {
    let draft = questionnaire.draft();
    let errors = questionnaire.errors();

    let mut html = String::from("<form method=\"post\" action=\"/\">\n");
    html.push_str(&format!(
        "<div class=\"progress-bar\" style=\"width: {}%\"></div>\n",
        step.progress_percent()
    ));

    if questionnaire.submit_failed() {
        html.push_str(&format!(
            "<p class=\"notice error\" role=\"alert\">{}</p>\n",
            escape(SUBMIT_FAILED_NOTICE)
        ));
    }

    html.push_str(&hidden("step", &step.to_number().to_string()));
    if questionnaire.submit_attempted() {
        html.push_str(&hidden("submitAttempted", "true"));
    }

    for other in [
        QuestionnaireStep::Foundation,
        QuestionnaireStep::PaceAndEnergy,
        QuestionnaireStep::LengthAndStyle,
        QuestionnaireStep::LyricsAndPolish,
    ] {
        if other != step {
            html.push_str(&carried_fields(draft, other));
        }
    }

    html.push_str(&format!(
        "<section class=\"step\" data-step=\"{}\">\n<h2>Step {}: {}</h2>\n",
        step.to_number(),
        step.to_number(),
        escape(step.label())
    ));
    html.push_str(&match step {
        QuestionnaireStep::Foundation => foundation_fields(draft, errors),
        QuestionnaireStep::PaceAndEnergy => pace_fields(draft, errors),
        QuestionnaireStep::LengthAndStyle => shape_fields(draft, errors),
        QuestionnaireStep::LyricsAndPolish => polish_fields(draft, errors),
    });
    html.push_str("</section>\n");

    html.push_str(&nav_buttons(step));
    html.push_str("</form>\n");
    html
}

/// Buttons in DOM order primary-first so Enter advances; CSS reverses them.
fn nav_buttons(step: QuestionnaireStep) -> String {
    let mut html = String::from("<div class=\"nav\">\n");
    match step.next_label() {
        Some(label) => html.push_str(&format!(
            "<button type=\"submit\" name=\"action\" value=\"next\">{}</button>\n",
            escape(label)
        )),
        None => html.push_str(
            "<button type=\"submit\" name=\"action\" value=\"submit\">Generate Your Hit!</button>\n",
        ),
    }
    if !step.is_first() {
        html.push_str("<button type=\"submit\" name=\"action\" value=\"back\">Back</button>\n");
    }
    html.push_str("</div>\n");
    html
}

// ---------------------------------------------------------------------------
// Step bodies
// ---------------------------------------------------------------------------

fn foundation_fields(draft: &SubmissionDraft, errors: Option<&ValidationErrors>) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<label for=\"genre\">Genre: {}</label>\n",
        tip("Mix genres for unique blends—like pop-rock fusion for chart-toppers!")
    ));
    html.push_str("<select id=\"genre\" name=\"genre\" aria-label=\"Select genre\">\n");
    html.push_str("<option value=\"\">Select...</option>\n");
    for group in GENRE_GROUPS {
        html.push_str(&format!("<optgroup label=\"{}\">\n", escape(group.label)));
        for option in group.options {
            html.push_str(&option_tag(
                option.value,
                option.label,
                draft.foundation.genre == option.value,
            ));
        }
        html.push_str("</optgroup>\n");
    }
    html.push_str("</select>\n");
    html.push_str(&field_error(errors, Field::Genre));

    html.push_str(&format!(
        "<label for=\"mood\">Mood: {}</label>\n",
        tip("Moods evoke feelings—happy tracks go viral on social!")
    ));
    html.push_str("<select id=\"mood\" name=\"mood\" aria-label=\"Select mood\">\n");
    html.push_str("<option value=\"\">Select...</option>\n");
    for option in MOODS {
        html.push_str(&option_tag(
            option.value,
            option.label,
            draft.foundation.mood == option.value,
        ));
    }
    html.push_str("</select>\n");
    html.push_str(&field_error(errors, Field::Mood));

    html
}

fn pace_fields(draft: &SubmissionDraft, errors: Option<&ValidationErrors>) -> String {
    let mut html = String::new();
    let tempo = escape(&draft.pace.tempo);

    html.push_str(&format!(
        "<label for=\"tempo\">Tempo (BPM): {}</label>\n",
        tip("120 BPM is dance-floor gold—slide to your beat!")
    ));
    html.push_str(&format!(
        "<input type=\"range\" id=\"tempo\" name=\"tempo\" min=\"{TEMPO_MIN}\" max=\"{TEMPO_MAX}\" \
         value=\"{tempo}\" aria-label=\"Tempo slider\" \
         oninput=\"document.getElementById('tempo-readout').textContent = this.value + ' BPM'\">\n\
         <span id=\"tempo-readout\" aria-live=\"polite\">{tempo} BPM</span>\n"
    ));
    html.push_str(&field_error(errors, Field::Tempo));

    html.push_str(&format!(
        "<label for=\"intensity\">Intensity: {}</label>\n",
        tip("High intensity = epic drops—perfect for workouts or ads!")
    ));
    html.push_str("<select id=\"intensity\" name=\"intensity\" aria-label=\"Select intensity\">\n");
    for level in Intensity::ALL {
        html.push_str(&option_tag(
            level.as_str(),
            level.as_str(),
            draft.pace.intensity == level.as_str(),
        ));
    }
    html.push_str("</select>\n");
    html.push_str(&field_error(errors, Field::Intensity));

    html
}

fn shape_fields(draft: &SubmissionDraft, errors: Option<&ValidationErrors>) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<label for=\"length\">Length (seconds): {}</label>\n",
        tip("180s is TikTok-ready—extend for full stories!")
    ));
    html.push_str(&format!(
        "<input type=\"number\" id=\"length\" name=\"length\" value=\"{}\" aria-label=\"Track length\">\n",
        escape(&draft.shape.length)
    ));
    html.push_str(&field_error(errors, Field::Length));

    html.push_str(&text_field(
        "key",
        "Key",
        "C Major keeps it uplifting—pro secret for feel-good vibes.",
        &draft.shape.key,
        "e.g., C Major",
        "Musical key",
    ));
    html.push_str(&text_field(
        "structure",
        "Structure",
        "Verse-Chorus builds hooks—catchy for streams!",
        &draft.shape.structure,
        "e.g., Verse-Chorus-Verse",
        "Song structure",
    ));

    html
}

fn polish_fields(draft: &SubmissionDraft, errors: Option<&ValidationErrors>) -> String {
    let polish = &draft.polish;
    let mut html = String::new();

    html.push_str(&format!(
        "<label for=\"hasLyrics\">Include Lyrics? {}</label>\n\
         <input type=\"checkbox\" id=\"hasLyrics\" name=\"hasLyrics\" value=\"true\"{} \
         aria-label=\"Include lyrics\" \
         onchange=\"document.getElementById('lyric-theme-field').hidden = !this.checked\">\n",
        tip("Lyrics tell stories—boost shares and connects!"),
        if polish.has_lyrics { " checked" } else { "" },
    ));

    html.push_str(&format!(
        "<div id=\"lyric-theme-field\"{}>\n",
        if polish.has_lyrics { "" } else { " hidden" }
    ));
    html.push_str(&text_field(
        "lyricTheme",
        "Lyric Theme",
        "Love themes dominate charts—make it personal!",
        &polish.lyric_theme,
        "e.g., Love, Adventure",
        "Lyric theme",
    ));
    html.push_str(&field_error(errors, Field::LyricTheme));
    html.push_str("</div>\n");

    html.push_str(&text_field(
        "vocalStyle",
        "Vocal Style",
        "Robotic for futuristic edge—stand out!",
        &polish.vocal_style,
        "e.g., Male, Female, Robotic",
        "Vocal style",
    ));
    html.push_str(&text_field(
        "instruments",
        "Instrument Preferences",
        "Guitar + synth = hybrid magic—pro blend!",
        &polish.instruments,
        "e.g., Guitar, Piano",
        "Instruments",
    ));

    // Disabled controls are not submitted; the hidden input carries the value.
    html.push_str(
        "<label>Include Music? (Always Recommended)</label>\n\
         <input type=\"checkbox\" checked disabled aria-label=\"Include music (enabled)\">\n",
    );
    html.push_str(&hidden("hasMusic", "true"));
    html.push_str(&field_error(errors, Field::HasMusic));

    html
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Hidden inputs carrying the answers of a step that is not on screen.
fn carried_fields(draft: &SubmissionDraft, step: QuestionnaireStep) -> String {
    match step {
        QuestionnaireStep::Foundation => [
            hidden("genre", &draft.foundation.genre),
            hidden("mood", &draft.foundation.mood),
        ]
        .concat(),
        QuestionnaireStep::PaceAndEnergy => [
            hidden("tempo", &draft.pace.tempo),
            hidden("intensity", &draft.pace.intensity),
        ]
        .concat(),
        QuestionnaireStep::LengthAndStyle => [
            hidden("length", &draft.shape.length),
            hidden("key", &draft.shape.key),
            hidden("structure", &draft.shape.structure),
        ]
        .concat(),
        QuestionnaireStep::LyricsAndPolish => [
            hidden("hasLyrics", bool_str(draft.polish.has_lyrics)),
            hidden("lyricTheme", &draft.polish.lyric_theme),
            hidden("vocalStyle", &draft.polish.vocal_style),
            hidden("instruments", &draft.polish.instruments),
            hidden("hasMusic", "true"),
        ]
        .concat(),
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">\n",
        name,
        escape(value)
    )
}

fn option_tag(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    )
}

fn text_field(
    name: &str,
    label: &str,
    help: &str,
    value: &str,
    placeholder: &str,
    aria_label: &str,
) -> String {
    format!(
        "<label for=\"{name}\">{label}: {tip}</label>\n\
         <input id=\"{name}\" name=\"{name}\" value=\"{value}\" placeholder=\"{placeholder}\" aria-label=\"{aria_label}\">\n",
        tip = tip(help),
        value = escape(value),
        placeholder = escape(placeholder),
    )
}

fn field_error(errors: Option<&ValidationErrors>, field: Field) -> String {
    errors
        .and_then(|errors| errors.for_field(field))
        .map(|err| {
            format!(
                "<p class=\"field-error\" data-field=\"{}\">{}</p>\n",
                field.as_str(),
                escape(err.message)
            )
        })
        .unwrap_or_default()
}
