// ABOUTME: Column extractor covering the offer two-column layout and the link-farm.
// ABOUTME: An offer is one whole-fragment item; each link-farm column becomes an item of link pairs.

//! Column extraction.
//!
//! Two shapes live under the column family. The offer layout is not
//! repeated: the whole fragment is a single item with an image column and
//! a text column, keeping every CTA in source order. The link-farm is a
//! row of column groups; each column yields a list of paragraph-wrapped
//! links and becomes one item, so the assembler can lay the columns out as
//! cells of a single row.

use scraper::ElementRef;

use crate::classify::Variant;
use crate::extract::{resolve_common_fields, Item};
use crate::locate::locate;
use crate::rules::{FieldLocator, VariantRules};
use crate::selectors::get_or_compile;
use crate::synth;

pub(crate) fn extract_items(
    variant: Variant,
    fragment: ElementRef<'_>,
    rules: &VariantRules,
) -> Vec<Item> {
    match variant {
        Variant::LinkFarm => extract_link_farm(fragment, rules),
        _ => extract_offer(fragment, rules),
    }
}

fn extract_offer(fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    let item = resolve_common_fields(fragment, rules);
    if item.is_empty() {
        Vec::new()
    } else {
        vec![item]
    }
}

fn extract_link_farm(fragment: ElementRef<'_>, rules: &VariantRules) -> Vec<Item> {
    let (Some(group_css), Some(column_css), Some(link_css)) = (
        rules.group.as_deref(),
        rules.column.as_deref(),
        rules.link.as_deref(),
    ) else {
        return Vec::new();
    };

    let group_fl = FieldLocator::new([group_css]);
    let Some(group) = locate(fragment, &group_fl) else {
        return Vec::new();
    };
    let Some(column_sel) = get_or_compile(column_css) else {
        return Vec::new();
    };
    let Some(link_sel) = get_or_compile(link_css) else {
        return Vec::new();
    };

    group
        .select(&column_sel)
        .map(|column| {
            let ctas = column
                .select(&link_sel)
                .filter_map(|link| {
                    let href = link.value().attr("href")?;
                    Some(synth::link_paragraph(href, &link.text().collect::<String>()))
                })
                .collect();
            Item {
                ctas,
                ..Default::default()
            }
        })
        .filter(|item| !item.is_empty())
        .collect()
}
