// ABOUTME: Card-grid extractor covering the multi-tile, flex, and value-prop shapes.
// ABOUTME: Walks item boundary elements in source order and resolves the common field set per card.

//! Card-grid extraction.
//!
//! The three card shapes share one mechanism and differ only in their
//! rules data: which selector bounds a card, and which fallback chains
//! resolve each field. A flex card additionally carries an eyebrow; a
//! value-prop unit is an icon plus text. Cards with no resolvable fields
//! (decorative markup only) contribute nothing.

use scraper::ElementRef;

use crate::extract::{resolve_common_fields, Item};
use crate::rules::VariantRules;
use crate::selectors::get_or_compile;

pub(crate) fn extract_items(fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    let Some(item_css) = rules.item.as_deref() else {
        return Vec::new();
    };
    let Some(sel) = get_or_compile(item_css) else {
        return Vec::new();
    };

    fragment
        .select(&sel)
        .map(|card| resolve_common_fields(card, rules))
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Variant;
    use crate::rules::load_builtin_rules;
    use scraper::Html;

    const MULTI_TILE: &str = r#"
        <div class="multi-tile-cards">
            <div class="tile-card">
                <div class="card-img"><img src="/one.jpg" alt="One"></div>
                <h3 class="js-heading-section">First</h3>
                <div class="tileSubheading"><p>First description</p></div>
                <div class="cta-container"><a class="tile-anchor" href="/one">Go</a></div>
            </div>
            <div class="tile-card">
                <h3>Second</h3>
            </div>
            <div class="tile-card">
                <div class="decorative-swoosh"></div>
            </div>
        </div>
    "#;

    fn fragment(doc: &Html) -> ElementRef<'_> {
        crate::dom::first_element_child(doc.root_element()).unwrap()
    }

    #[test]
    fn test_multi_tile_skips_fieldless_card() {
        let rules = load_builtin_rules();
        let doc = Html::parse_fragment(MULTI_TILE);
        let items = extract_items(fragment(&doc), rules.get(Variant::MultiTileCards).unwrap());

        assert_eq!(items.len(), 2);

        assert!(items[0].image.as_deref().unwrap().contains("/one.jpg"));
        assert!(items[0].heading.as_deref().unwrap().contains("First"));
        assert!(items[0]
            .description
            .as_deref()
            .unwrap()
            .contains("First description"));
        assert_eq!(items[0].ctas.len(), 1);

        assert!(items[1].image.is_none());
        assert!(items[1].heading.as_deref().unwrap().contains("Second"));
        assert!(items[1].ctas.is_empty());
    }

    #[test]
    fn test_flex_card_synthesizes_eyebrow() {
        let rules = load_builtin_rules();
        let html = r#"
            <div class="flex-cards">
                <div class="card flex-card">
                    <img src="/flex.jpg" alt="Flex">
                    <p class="type-eyebrow-md">  New Offer  </p>
                    <h3>Flex heading</h3>
                </div>
            </div>
        "#;
        let doc = Html::parse_fragment(html);
        let items = extract_items(fragment(&doc), rules.get(Variant::FlexCards).unwrap());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].eyebrow.as_deref(), Some("<p>New Offer</p>"));
    }

    #[test]
    fn test_flex_card_empty_eyebrow_dropped() {
        let rules = load_builtin_rules();
        let html = r#"
            <div class="flex-cards">
                <div class="card flex-card">
                    <p class="type-eyebrow-md">   </p>
                    <h3>Heading only</h3>
                </div>
            </div>
        "#;
        let doc = Html::parse_fragment(html);
        let items = extract_items(fragment(&doc), rules.get(Variant::FlexCards).unwrap());
        assert_eq!(items.len(), 1);
        assert!(items[0].eyebrow.is_none());
    }

    #[test]
    fn test_value_prop_cta_fallback_excludes_placeholder_href() {
        let rules = load_builtin_rules();
        let html = r##"
            <div class="generic-list-value-prop">
                <div class="generic-list-icon-vp">
                    <img src="/icon.svg" alt="">
                    <h3>Prop</h3>
                    <a href="#">placeholder</a>
                    <a href="/real">Real link</a>
                </div>
            </div>
        "##;
        let doc = Html::parse_fragment(html);
        let items = extract_items(fragment(&doc), rules.get(Variant::ValueProp).unwrap());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ctas.len(), 1);
        assert!(items[0].ctas[0].contains("/real"));
    }

    #[test]
    fn test_zero_items_is_normal() {
        let rules = load_builtin_rules();
        let doc = Html::parse_fragment(r#"<div class="multi-tile-cards"></div>"#);
        let items = extract_items(fragment(&doc), rules.get(Variant::MultiTileCards).unwrap());
        assert!(items.is_empty());
    }
}
