// ABOUTME: Canonical block table model: BlockName tag plus ordered rows of cells of elements.
// ABOUTME: Enforces the never-empty row/cell invariants and renders the host's block-table markup.

//! The canonical output shape.
//!
//! A table is an ordered sequence of rows; a row is an ordered sequence of
//! cells; a cell is an ordered sequence of serialized elements. Two
//! invariants hold for every emitted table: no row has zero cells and no
//! cell has zero elements. [`Table::push_row`] enforces both, so assembler
//! code never re-checks them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dom::escape_text;

/// One ordered group of serialized elements.
pub type Cell = Vec<String>;

/// One ordered group of cells.
pub type Row = Vec<Cell>;

/// The block name tag carried by a recognized fragment's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockName {
    Cards,
    Carousel,
    Columns,
    Hero,
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlockName::Cards => "Cards",
            BlockName::Carousel => "Carousel",
            BlockName::Columns => "Columns",
            BlockName::Hero => "Hero",
        };
        write!(f, "{}", s)
    }
}

/// The assembled block table. An unrecognized fragment yields the empty
/// table: no name, zero rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub name: Option<BlockName>,
    pub rows: Vec<Row>,
}

impl Table {
    /// The empty table produced for unrecognized fragments.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a zero-row table tagged with a block name.
    pub fn named(name: BlockName) -> Self {
        Self {
            name: Some(name),
            rows: Vec::new(),
        }
    }

    /// Appends a row, dropping empty cells; a row left with no cells is
    /// not appended.
    pub fn push_row(&mut self, row: Row) {
        let cells: Row = row.into_iter().filter(|c| !c.is_empty()).collect();
        if !cells.is_empty() {
            self.rows.push(cells);
        }
    }

    /// Returns true when the table carries no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the table as the host's canonical block markup, or `None`
    /// when the table is empty (the fragment replacement is then a no-op).
    ///
    /// The shape mirrors the host block library: a header row carrying the
    /// block name spanning the widest row, then one `<tr>` per row with
    /// one `<td>` per cell.
    pub fn render(&self) -> Option<String> {
        let name = self.name?;
        if self.rows.is_empty() {
            return None;
        }

        let width = self.rows.iter().map(Vec::len).max().unwrap_or(1);
        let mut out = String::from("<table>");
        out.push_str(&format!(
            "<tr><th colspan=\"{}\">{}</th></tr>",
            width,
            escape_text(&name.to_string())
        ));
        for row in &self.rows {
            out.push_str("<tr>");
            for cell in row {
                out.push_str("<td>");
                for element in cell {
                    out.push_str(element);
                }
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        Some(out)
    }
}
