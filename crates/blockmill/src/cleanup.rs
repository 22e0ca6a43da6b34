// ABOUTME: Page-level cleanup stage removing navigation chrome, tracking cruft, and residual elements.
// ABOUTME: Runs before and after extraction over the whole page as flat removal lists with no branching.

//! Cleanup stage.
//!
//! Invoked by the host at two lifecycle points over the whole page, not
//! per fragment. The before pass removes fixed non-content subtrees
//! (navigation, footer, overlays, search forms, login menus, skip links,
//! slider chrome). The after pass strips the tracking class from links
//! while keeping the element, removes residual non-content element kinds,
//! and drops tracking attributes everywhere. Each removal is "does this
//! marker exist" with no field-extraction responsibility.

use scraper::Html;
use tracing::debug;

use crate::dom::{collect_matching_ids, serialize_document, FilterOpts};

/// Non-content subtrees removed before extraction.
const CHROME_SELECTORS: &[&str] = &[
    ".global-navigation",
    ".modal-global-navigation",
    ".skip-to-content-link",
    ".footer-page-css-includes",
    ".swiper-button-prev",
    ".swiper-button-next",
    ".swiper-pagination",
    ".swiper-notification",
    "#cludo-search-form",
    "#cludo-mob-search",
    ".search-mobile-view",
    ".search-tablet-view",
    ".login-menu-dropdown",
];

/// Residual non-content element kinds removed after extraction.
const RESIDUAL_TAGS: &[&str] = &["iframe", "link", "noscript", "source"];

/// Tracking class stripped from elements (the element itself survives).
const TRACKING_CLASS: &str = "att-track";

/// Tracking attributes removed from every element.
const TRACKING_ATTRS: &[&str] = &["onclick", "data-analytics", "data-link-name"];

/// Removes non-content chrome subtrees from the page.
pub fn before_transform(html: &str) -> String {
    let doc = Html::parse_document(html);
    let skip = collect_matching_ids(&doc, CHROME_SELECTORS);
    debug!(removed = skip.len(), "cleanup before pass");
    let opts = FilterOpts {
        skip,
        ..Default::default()
    };
    serialize_document(&doc, &opts)
}

/// Strips tracking cruft and residual non-content elements from the page.
pub fn after_transform(html: &str) -> String {
    let doc = Html::parse_document(html);
    let skip = collect_matching_ids(&doc, RESIDUAL_TAGS);
    debug!(removed = skip.len(), "cleanup after pass");
    let opts = FilterOpts {
        skip,
        strip_attrs: TRACKING_ATTRS,
        strip_class: Some(TRACKING_CLASS),
    };
    serialize_document(&doc, &opts)
}
