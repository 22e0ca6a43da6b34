// ABOUTME: Structural variant classification for marketing-page fragments.
// ABOUTME: Defines the closed Variant enum and marker-class dispatch with an explicit priority order.

//! Fragment classification.
//!
//! A fragment is governed by exactly one structural variant, decided once
//! per invocation and never re-evaluated mid-extraction. Dispatch is by
//! structural-class membership on the fragment root, resolved against an
//! explicit priority list so that an element plausibly matching two
//! markers always lands on the same variant.

use scraper::ElementRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::BlockName;
use crate::rules::RuleSet;

/// The closed set of structural families a fragment can belong to.
///
/// Three card-grid shapes, a slider, two column layouts, and the hero
/// banner. Each variant carries its own item-boundary and field knowledge
/// via the rule set; the enum itself is only the dispatch tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    MultiTileCards,
    FlexCards,
    ValueProp,
    Carousel,
    Offer,
    LinkFarm,
    Hero,
}

impl Variant {
    /// Marker-check order. This is deliberate configuration, not an
    /// artifact of definition order: when a fragment carries two known
    /// markers, the earlier entry wins.
    pub const PRIORITY: [Variant; 7] = [
        Variant::MultiTileCards,
        Variant::FlexCards,
        Variant::ValueProp,
        Variant::Carousel,
        Variant::Offer,
        Variant::LinkFarm,
        Variant::Hero,
    ];

    /// The block name tag this variant's table carries.
    pub fn family(&self) -> BlockName {
        match self {
            Variant::MultiTileCards | Variant::FlexCards | Variant::ValueProp => BlockName::Cards,
            Variant::Carousel => BlockName::Carousel,
            Variant::Offer | Variant::LinkFarm => BlockName::Columns,
            Variant::Hero => BlockName::Hero,
        }
    }
}

/// Classifies a fragment root into a variant, or `None` when no known
/// structural marker is present on it.
///
/// Matching is class-token membership on the root element only; nested
/// markers do not reclassify a fragment.
pub fn classify(root: ElementRef<'_>, rules: &RuleSet) -> Option<Variant> {
    for variant in Variant::PRIORITY {
        let Some(vr) = rules.get(variant) else {
            continue;
        };
        if root.value().classes().any(|c| c == vr.marker) {
            debug!(?variant, marker = %vr.marker, "classified fragment");
            return Some(variant);
        }
    }
    debug!("no structural marker matched");
    None
}
