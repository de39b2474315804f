use songcraft_core::types::ApprovedItem;

use super::{escape, page, Listing};

pub const EMPTY_STATE: &str = "No approved music yet.";
pub const LOAD_FAILED: &str = "Could not load your music. Refresh to try again.";

pub fn render(listing: Listing<'_, ApprovedItem>) -> String {
    let mut body = String::from("<div class=\"portal\">\n<h1>Client Portal</h1>\n");

    match listing {
        Listing::Unavailable => body.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape(LOAD_FAILED)
        )),
        Listing::Loaded([]) => body.push_str(&format!("<p class=\"empty\">{EMPTY_STATE}</p>\n")),
        Listing::Loaded(items) => {
            for item in items {
                body.push_str(&format!(
                    "<div class=\"approved\" data-id=\"{}\">\n<p>Your approved music:</p>\n\
                     <audio controls src=\"{}\"></audio>\n</div>\n",
                    escape(&item.id.to_string()),
                    escape(&item.audio_url)
                ));
            }
        }
    }

    body.push_str("</div>\n");
    page("Client Portal", &body)
}
