// ABOUTME: Pure element synthesis for normalized field markup.
// ABOUTME: Builds trimmed-text paragraphs, headings, and paragraph-wrapped links as HTML strings.

//! Element synthesis.
//!
//! Source markup uses inconsistent wrapper tags for the same semantic role
//! (an eyebrow may arrive as a `<div>`, a `<span>`, or a styled `<p>`), so
//! certain fields are rewritten into a normalized element shape instead of
//! passed through verbatim. Trimming leading/trailing whitespace is the
//! only text transformation applied.
//!
//! All functions are pure `(raw text) -> markup` with no rendering
//! concerns; whitespace-only input yields no element.

use crate::dom::{escape_attr, escape_text};

/// Builds a normalized paragraph from raw text, or `None` when the
/// trimmed text is empty.
pub fn paragraph(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("<p>{}</p>", escape_text(text)))
}

/// Builds a normalized heading from raw text, or `None` when the trimmed
/// text is empty. Headings synthesized from non-heading source wrappers
/// land on a single normalized level.
pub fn heading(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    Some(format!("<h2>{}</h2>", escape_text(text)))
}

/// Builds a paragraph-wrapped link. An empty label still yields the link,
/// since the target is the content that matters.
pub fn link_paragraph(href: &str, raw: &str) -> String {
    format!(
        "<p><a href=\"{}\">{}</a></p>",
        escape_attr(href),
        escape_text(raw.trim())
    )
}
