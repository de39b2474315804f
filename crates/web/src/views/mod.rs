//! Server-rendered HTML for the three views.
//!
//! Pages are plain HTML with inline styles and a few lines of vanilla JS
//! for live feedback; every value interpolated from user input or from the
//! studio API goes through [`escape`].

pub mod editor;
pub mod portal;
pub mod questionnaire;

use axum::http::StatusCode;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Outcome of fetching a list from the studio API for one render.
#[derive(Debug, Clone, Copy)]
pub enum Listing<'a, T> {
    Loaded(&'a [T]),
    /// The fetch failed; rendered as an error line, never as an empty list.
    Unavailable,
}

/// Help bubble shown next to a field label.
pub(crate) fn tip(text: &str) -> String {
    format!(
        r#"<a class="tip" tabindex="0" title="{0}" aria-label="{0}">ℹ️</a>"#,
        escape(text)
    )
}

/// Wrap `body` in the shared document shell.
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
            margin: 0;
            padding: 20px;
        }}
        h1 {{ color: #4a9eff; font-size: 26px; }}
        label {{ display: block; margin-top: 14px; font-weight: 600; }}
        input, select {{ margin-top: 4px; padding: 6px; }}
        .tip {{ cursor: help; text-decoration: none; }}
        .progress-bar {{ height: 6px; background: #4a9eff; margin-bottom: 20px; transition: width 0.3s; }}
        .field-error, .error {{ color: #ff6b6b; }}
        .notice {{ padding: 8px 12px; border-radius: 4px; background: #2a2a2a; }}
        .notice.error {{ border-left: 4px solid #ff6b6b; }}
        .notice.ok {{ border-left: 4px solid #4caf50; }}
        .nav {{ display: flex; flex-direction: row-reverse; justify-content: flex-end; gap: 10px; margin-top: 20px; }}
        .submission, .approved {{ background: #2a2a2a; padding: 12px; margin-bottom: 12px; border-radius: 6px; }}
        button {{ padding: 8px 16px; cursor: pointer; }}
    </style>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}

/// Error page for unmatched routes and rejected requests.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<div class="error-page">
    <h1>{code} {reason}</h1>
    <p>{message}</p>
    <ul>
        <li><a href="/">Request a song</a></li>
        <li><a href="/editor">Editor dashboard</a></li>
        <li><a href="/portal">Client portal</a></li>
    </ul>
</div>"#,
        code = status.as_u16(),
        message = escape(message),
    );
    page(reason, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_neutralises_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Verse-Chorus-Verse in C Major"), "Verse-Chorus-Verse in C Major");
    }

    #[test]
    fn error_page_links_every_view() {
        let html = error_page(StatusCode::NOT_FOUND, "Nothing lives at /x");
        assert!(html.contains("404 Not Found"));
        for href in [r#"href="/""#, r#"href="/editor""#, r#"href="/portal""#] {
            assert!(html.contains(href), "missing {href}");
        }
    }
}
