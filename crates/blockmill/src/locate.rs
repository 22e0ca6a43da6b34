// ABOUTME: Ordered-fallback field location scoped to an item boundary element.
// ABOUTME: Singular fields take the first selector's first match; CTA lists aggregate with de-duplication.

//! Field location.
//!
//! Every variant extractor resolves its fields through this module. A
//! [`FieldLocator`](crate::rules::FieldLocator) carries an ordered list of
//! candidate selectors reflecting markup drift between page templates.
//!
//! Key behaviors:
//! - `locate`: selectors are tried in order; the first selector yielding a
//!   match wins and only its first match is returned. Singular fields
//!   (image, heading, eyebrow, description) never aggregate.
//! - `locate_all`: matches from every selector are aggregated in order
//!   (multiple calls-to-action per item are valid). Matches are
//!   de-duplicated by node identity, and additionally by link target when
//!   the locator's `dedup_links` flag is set; first seen wins. Anchors
//!   without a target all share one.

use std::collections::HashSet;

use scraper::ElementRef;

use crate::rules::FieldLocator;
use crate::selectors::get_or_compile;

/// Locates a singular field within an item's boundary element.
pub fn locate<'a>(scope: ElementRef<'a>, fl: &FieldLocator) -> Option<ElementRef<'a>> {
    for css in &fl.selectors {
        let Some(sel) = get_or_compile(css) else {
            continue;
        };
        if let Some(el) = scope.select(&sel).next() {
            return Some(el);
        }
    }
    None
}

/// Locates every match for a multi-valued field within an item's boundary
/// element.
pub fn locate_all<'a>(scope: ElementRef<'a>, fl: &FieldLocator) -> Vec<ElementRef<'a>> {
    let mut out = Vec::new();
    let mut seen_nodes = HashSet::new();
    let mut seen_targets: HashSet<String> = HashSet::new();

    for css in &fl.selectors {
        let Some(sel) = get_or_compile(css) else {
            continue;
        };
        for el in scope.select(&sel) {
            if !seen_nodes.insert(el.id()) {
                continue;
            }
            if fl.dedup_links {
                // Anchors without an href all share one (absent) target.
                let target = el.value().attr("href").unwrap_or("");
                if !seen_targets.insert(target.to_string()) {
                    continue;
                }
            }
            out.push(el);
        }
    }
    out
}

/// Convenience: locates a singular field and returns its serialized form.
pub fn locate_html(scope: ElementRef<'_>, fl: &FieldLocator) -> Option<String> {
    locate(scope, fl).map(|el| el.html())
}

/// Convenience: locates a singular field and returns its inner text.
pub fn locate_text(scope: ElementRef<'_>, fl: &FieldLocator) -> Option<String> {
    locate(scope, fl).map(|el| el.text().collect::<String>())
}
