// ABOUTME: Carousel extractor producing one item per slide with normalized heading and description.
// ABOUTME: Slide headings and descriptions are synthesized; slide-navigation controls never become CTAs.

//! Carousel extraction.
//!
//! Slides put their heading and description in styled `<div>` wrappers, so
//! both are forced into normalized elements (a single heading level and a
//! plain paragraph) built from trimmed text. The slide CTA is optional and
//! the locator chain excludes the slider's own navigation controls. A
//! slide with neither image nor text contributes nothing.

use scraper::ElementRef;

use crate::extract::Item;
use crate::locate::{locate, locate_html, locate_text};
use crate::rules::VariantRules;
use crate::selectors::get_or_compile;
use crate::synth;

pub(crate) fn extract_items(fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    let Some(item_css) = rules.item.as_deref() else {
        return Vec::new();
    };
    let Some(sel) = get_or_compile(item_css) else {
        return Vec::new();
    };

    fragment
        .select(&sel)
        .map(|slide| extract_slide(slide, rules))
        .filter(|item| !item.is_empty())
        .collect()
}

fn extract_slide(slide: ElementRef<'_>, rules: &VariantRules) -> Item {
    let image = rules.image.as_ref().and_then(|fl| locate_html(slide, fl));

    let heading = rules
        .heading
        .as_ref()
        .and_then(|fl| locate_text(slide, fl))
        .and_then(|text| synth::heading(&text));

    let description = rules
        .description
        .as_ref()
        .and_then(|fl| locate_text(slide, fl))
        .and_then(|text| synth::paragraph(&text));

    let ctas = rules
        .cta
        .as_ref()
        .and_then(|fl| locate(slide, fl))
        .map(|el| el.html())
        .into_iter()
        .collect();

    Item {
        image,
        eyebrow: None,
        heading,
        description,
        ctas,
    }
}
