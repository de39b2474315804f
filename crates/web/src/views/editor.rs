use songcraft_core::types::Submission;

use super::{escape, page, Listing};

pub const EMPTY_STATE: &str = "No pending submissions.";
pub const LIST_FAILED: &str = "Could not load pending submissions. Refresh to try again.";

/// Outcome of the last decision, carried across the post/redirect/get hop
/// in the `notice` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorNotice {
    Approved,
    Rejected,
    Failed,
    Busy,
}

impl EditorNotice {
    /// Inverse of [`as_str`](Self::as_str); unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "failed" => Some(Self::Failed),
            "busy" => Some(Self::Busy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
            Self::Busy => "busy",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Approved => "Submission approved.",
            Self::Rejected => "Submission rejected.",
            Self::Failed => {
                "Could not send your decision. The submission is still pending, try again."
            }
            Self::Busy => "A decision for that submission is already on its way.",
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Self::Failed | Self::Busy)
    }
}

pub fn render(listing: Listing<'_, Submission>, notice: Option<EditorNotice>) -> String {
    let mut body = String::from("<div class=\"editor\">\n<h1>Editor Dashboard</h1>\n");

    if let Some(notice) = notice {
        body.push_str(&format!(
            "<p class=\"notice {}\" role=\"status\" data-notice=\"{}\">{}</p>\n",
            if notice.is_error() { "error" } else { "ok" },
            notice.as_str(),
            escape(notice.message())
        ));
    }

    match listing {
        Listing::Unavailable => body.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(LIST_FAILED)
        )),
        Listing::Loaded([]) => body.push_str(&format!("<p class=\"empty\">{EMPTY_STATE}</p>\n")),
        Listing::Loaded(submissions) => {
            for submission in submissions {
                body.push_str(&submission_card(submission));
            }
        }
    }

    body.push_str("</div>\n");
    page("Editor Dashboard", &body)
}

fn submission_card(submission: &Submission) -> String {
    format!(
        r#"<div class="submission" data-id="{id}">
<p>Prompt: {prompt}</p>
<audio controls src="{src}"></audio>
<form method="post" action="/editor/decisions">
<input type="hidden" name="id" value="{form_id}">
<button type="submit" name="approved" value="true">Approve</button>
<button type="submit" name="approved" value="false">Disapprove</button>
</form>
</div>
"#,
        id = escape(&submission.id.to_string()),
        form_id = escape(&submission.id.to_form_value()),
        prompt = escape(&submission.prompt),
        src = escape(&submission.audio_url),
    )
}
