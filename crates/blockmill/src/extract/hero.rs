// ABOUTME: Hero extractor producing the single content item of a banner fragment.
// ABOUTME: Only the desktop background image participates; CTAs are de-duplicated by link target.

//! Hero extraction.
//!
//! The whole fragment is one item. The banner carries a desktop background
//! image and a separate mobile-only variant; the mobile art is looked up
//! for parity with the source markup but never participates in the table.
//! Multiple CTAs are valid and overlapping locator queries commonly match
//! the same anchor, so the CTA chain runs with link-target de-duplication.

use scraper::ElementRef;

use crate::extract::{resolve_common_fields, Item};
use crate::locate::locate;
use crate::rules::VariantRules;

pub(crate) fn extract_items(fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    // The mobile-only art never participates in the table.
    let _mobile = rules.mobile_image.as_ref().and_then(|fl| locate(fragment, fl));

    let item = resolve_common_fields(fragment, rules);
    if item.is_empty() {
        Vec::new()
    } else {
        vec![item]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Variant;
    use crate::rules::load_builtin_rules;
    use scraper::Html;

    const HERO: &str = r#"
        <div class="hero">
            <div class="hero-wrapper">
                <div class="bg-hero-panel"><img src="/hero-bg.jpg" alt="Hero"></div>
                <div class="hero-panel-image"><img class="visible-mobile" src="/hero-mobile.jpg" alt=""></div>
                <div class="content-panel-text">
                    <div class="eyebrow-lg-desktop eyebrow-lg-mobile">  Business Fiber  </div>
                    <h2 class="heading-xxl-desktop">Fast internet</h2>
                    <div class="wysiwyg-editor"><p>Speeds for every site.</p></div>
                    <div class="cta-container">
                        <a class="btn-primary" href="/order">Order now</a>
                        <a class="btn-secondary" href="/coverage">Check coverage</a>
                    </div>
                </div>
            </div>
        </div>
    "#;

    fn fragment(doc: &Html) -> ElementRef<'_> {
        crate::dom::first_element_child(doc.root_element()).unwrap()
    }

    #[test]
    fn test_hero_resolves_background_image_only() {
        let rules = load_builtin_rules();
        let doc = Html::parse_fragment(HERO);
        let items = extract_items(fragment(&doc), rules.get(Variant::Hero).unwrap());

        assert_eq!(items.len(), 1);
        let image = items[0].image.as_deref().unwrap();
        assert!(image.contains("/hero-bg.jpg"));
        assert!(!image.contains("/hero-mobile.jpg"));
    }

    #[test]
    fn test_hero_ctas_dedup_by_target() {
        let rules = load_builtin_rules();
        // The container anchor also carries btn-primary, so two locator
        // queries match it; a second anchor repeats the same target.
        let html = r#"
            <div class="hero">
                <h2 class="heading-xxl-desktop">Head</h2>
                <div class="cta-container"><a class="btn-primary" href="/order">Order</a></div>
                <a class="btn-secondary" href="/order">Order again</a>
                <a class="btn-secondary" href="/coverage">Coverage</a>
            </div>
        "#;
        let doc = Html::parse_fragment(html);
        let items = extract_items(fragment(&doc), rules.get(Variant::Hero).unwrap());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].ctas.len(), 2);
        assert!(items[0].ctas[0].contains("/order"));
        assert!(items[0].ctas[1].contains("/coverage"));
    }

    #[test]
    fn test_hero_without_content_or_image_yields_nothing() {
        let rules = load_builtin_rules();
        let doc = Html::parse_fragment(r#"<div class="hero"><div class="hero-wrapper"></div></div>"#);
        let items = extract_items(fragment(&doc), rules.get(Variant::Hero).unwrap());
        assert!(items.is_empty());
    }

    #[test]
    fn test_hero_image_only_is_kept() {
        let rules = load_builtin_rules();
        let html = r#"
            <div class="hero">
                <div class="bg-hero-panel"><img src="/bg.jpg" alt=""></div>
            </div>
        "#;
        let doc = Html::parse_fragment(html);
        let items = extract_items(fragment(&doc), rules.get(Variant::Hero).unwrap());
        assert_eq!(items.len(), 1);
        assert!(!items[0].has_text());
    }
}
