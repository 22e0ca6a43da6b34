// ABOUTME: Mechanical table assembly from extracted items per variant row-shape rule.
// ABOUTME: Preserves item order and relies on Table::push_row for the never-empty invariants.

//! Table assembly.
//!
//! Purely mechanical: field resolution is finished by the time items reach
//! this module. Per-variant row shapes:
//! - card grids, carousel, offer: one row per item, media cell then text
//!   cell, collapsing to a single cell when only one side resolved;
//! - link-farm: a single row whose cells are the columns themselves;
//! - hero: an optional background-image row, then a single content row.

use crate::block::{Row, Table};
use crate::classify::Variant;
use crate::extract::Item;

/// Assembles the output table for a classified fragment's items.
pub fn assemble(variant: Variant, items: Vec<Item>) -> Table {
    let mut table = Table::named(variant.family());
    match variant {
        Variant::LinkFarm => {
            let row: Row = items.into_iter().map(|item| item.ctas).collect();
            table.push_row(row);
        }
        Variant::Hero => {
            if let Some(item) = items.into_iter().next() {
                if let Some(image) = item.image.clone() {
                    table.push_row(vec![vec![image]]);
                }
                table.push_row(vec![item.text_cell()]);
            }
        }
        _ => {
            for item in items {
                table.push_row(item_row(item));
            }
        }
    }
    table
}

/// The media/text row for one card, slide, or offer item.
fn item_row(item: Item) -> Row {
    let text_cell = item.text_cell();
    match item.image {
        Some(image) => vec![vec![image], text_cell],
        None => vec![text_cell],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockName;

    fn text_item(heading: &str) -> Item {
        Item {
            heading: Some(format!("<h3>{}</h3>", heading)),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_rows_follow_media_text_shape() {
        let full = Item {
            image: Some("<img src=\"/a.jpg\" />".into()),
            heading: Some("<h3>A</h3>".into()),
            description: Some("<p>d</p>".into()),
            ctas: vec!["<a href=\"/x\">x</a>".into()],
            ..Default::default()
        };
        let table = assemble(Variant::MultiTileCards, vec![full, text_item("B")]);

        assert_eq!(table.name, Some(BlockName::Cards));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[0][0], vec!["<img src=\"/a.jpg\" />".to_string()]);
        assert_eq!(table.rows[0][1].len(), 3);
        assert_eq!(table.rows[1].len(), 1);
        assert_eq!(table.rows[1][0], vec!["<h3>B</h3>".to_string()]);
    }

    #[test]
    fn test_image_only_item_yields_single_media_cell() {
        let item = Item {
            image: Some("<img src=\"/solo.jpg\" />".into()),
            ..Default::default()
        };
        let table = assemble(Variant::Carousel, vec![item]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[0][0], vec!["<img src=\"/solo.jpg\" />".to_string()]);
    }

    #[test]
    fn test_link_farm_is_one_row_of_column_cells() {
        let columns = vec![
            Item {
                ctas: vec!["<p><a href=\"/a\">a</a></p>".into()],
                ..Default::default()
            },
            Item {
                ctas: vec![
                    "<p><a href=\"/b\">b</a></p>".into(),
                    "<p><a href=\"/c\">c</a></p>".into(),
                ],
                ..Default::default()
            },
        ];
        let table = assemble(Variant::LinkFarm, columns);

        assert_eq!(table.name, Some(BlockName::Columns));
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[0][1].len(), 2);
    }

    #[test]
    fn test_hero_two_row_shape() {
        let item = Item {
            image: Some("<img src=\"/bg.jpg\" />".into()),
            eyebrow: Some("<p>e</p>".into()),
            heading: Some("<h2>h</h2>".into()),
            ctas: vec!["<a href=\"/1\">1</a>".into(), "<a href=\"/2\">2</a>".into()],
            ..Default::default()
        };
        let table = assemble(Variant::Hero, vec![item]);

        assert_eq!(table.name, Some(BlockName::Hero));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec![vec!["<img src=\"/bg.jpg\" />".to_string()]]);
        assert_eq!(
            table.rows[1],
            vec![vec![
                "<p>e</p>".to_string(),
                "<h2>h</h2>".to_string(),
                "<a href=\"/1\">1</a>".to_string(),
                "<a href=\"/2\">2</a>".to_string(),
            ]]
        );
    }

    #[test]
    fn test_hero_image_only_emits_single_row() {
        let item = Item {
            image: Some("<img src=\"/bg.jpg\" />".into()),
            ..Default::default()
        };
        let table = assemble(Variant::Hero, vec![item]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_zero_items_yield_zero_rows() {
        let table = assemble(Variant::Offer, Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.name, Some(BlockName::Columns));
    }
}
