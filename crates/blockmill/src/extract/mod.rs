// ABOUTME: Variant extractor dispatch and the Item record each extractor produces.
// ABOUTME: Four peer extractors share one extract_items capability selected by a match on Variant.

//! Variant extraction.
//!
//! Each structural family owns the knowledge of what constitutes one
//! repeatable item and which field locator queries apply to it. All four
//! extractors produce the same [`Item`] record; the assembler never
//! resolves fields itself.
//!
//! Submodules:
//! - `cards`: the three card-grid shapes (multi-tile, flex, value-prop).
//! - `carousel`: slider slides with forced heading/description synthesis.
//! - `columns`: the offer two-column layout and the link-farm.
//! - `hero`: the single-item banner with its two-row shape.
//! - `assemble`: mechanical row/table shaping per variant.

use scraper::ElementRef;

use crate::classify::Variant;
use crate::locate::{locate, locate_all, locate_html};
use crate::rules::VariantRules;
use crate::synth;

pub mod assemble;
pub mod cards;
pub mod carousel;
pub mod columns;
pub mod hero;

/// One repeatable unit within a fragment, with its resolved field set.
///
/// Fields hold serialized element markup; synthesized fields hold the
/// normalized markup. A link-farm column is an item whose `ctas` carry its
/// paragraph-wrapped links.
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub image: Option<String>,
    pub eyebrow: Option<String>,
    pub heading: Option<String>,
    pub description: Option<String>,
    pub ctas: Vec<String>,
}

impl Item {
    /// Returns true when any non-image field resolved.
    pub fn has_text(&self) -> bool {
        self.eyebrow.is_some()
            || self.heading.is_some()
            || self.description.is_some()
            || !self.ctas.is_empty()
    }

    /// Returns true when nothing at all resolved. Such items are dropped
    /// rather than reported.
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && !self.has_text()
    }

    /// The text-content cell: eyebrow, heading, description, then CTAs.
    pub(crate) fn text_cell(&self) -> Vec<String> {
        let mut cell = Vec::new();
        if let Some(ref eyebrow) = self.eyebrow {
            cell.push(eyebrow.clone());
        }
        if let Some(ref heading) = self.heading {
            cell.push(heading.clone());
        }
        if let Some(ref description) = self.description {
            cell.push(description.clone());
        }
        cell.extend(self.ctas.iter().cloned());
        cell
    }
}

/// Extracts the ordered item sequence for a classified fragment.
pub fn extract_items(variant: Variant, fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    match variant {
        Variant::MultiTileCards | Variant::FlexCards | Variant::ValueProp => {
            cards::extract_items(fragment, rules)
        }
        Variant::Carousel => carousel::extract_items(fragment, rules),
        Variant::Offer | Variant::LinkFarm => columns::extract_items(variant, fragment, rules),
        Variant::Hero => hero::extract_items(fragment, rules),
    }
}

/// Resolves the common field set for one item scope: verbatim image,
/// heading, and description; synthesized eyebrow; CTAs honoring the
/// locator's multiplicity and de-duplication flags.
pub(crate) fn resolve_common_fields(scope: ElementRef<'_>, rules: &VariantRules) -> Item {
    let image = rules
        .image
        .as_ref()
        .and_then(|fl| locate_html(scope, fl));

    let eyebrow = rules.eyebrow.as_ref().and_then(|fl| {
        locate(scope, fl).and_then(|el| synth::paragraph(&el.text().collect::<String>()))
    });

    let heading = rules
        .heading
        .as_ref()
        .and_then(|fl| locate_html(scope, fl));

    let description = rules
        .description
        .as_ref()
        .and_then(|fl| locate_html(scope, fl));

    let ctas = match rules.cta.as_ref() {
        Some(fl) if fl.allow_multiple => locate_all(scope, fl)
            .into_iter()
            .map(|el| el.html())
            .collect(),
        Some(fl) => locate(scope, fl).map(|el| el.html()).into_iter().collect(),
        None => Vec::new(),
    };

    Item {
        image,
        eyebrow,
        heading,
        description,
        ctas,
    }
}
