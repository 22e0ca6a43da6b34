// ABOUTME: The engine tying classify, extract, and assemble into one pass over a fragment.
// ABOUTME: Produces the canonical block table and the in-place replacement markup for the host.

//! The extraction engine.
//!
//! One invocation runs classify → extract → assemble for a single fragment
//! and completes before the next fragment begins. All state is local to
//! the invocation, so a host may run many fragments in parallel with
//! independent engines or a shared one; the engine holds only the
//! immutable rule set.

use scraper::Html;
use tracing::debug;

use crate::block::Table;
use crate::classify::classify;
use crate::dom::first_element_child;
use crate::extract::{self, assemble::assemble};
use crate::rules::{load_builtin_rules, RuleSet};

/// The block extraction engine.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the builtin rule set.
    pub fn new() -> Self {
        Self {
            rules: load_builtin_rules(),
        }
    }

    /// Creates an engine with a caller-provided rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Converts one fragment into its canonical block table.
    ///
    /// Unrecognized input is not an error: a fragment with no known
    /// structural marker (or no element at all) yields the empty table.
    pub fn convert(&self, fragment_html: &str) -> Table {
        let doc = Html::parse_fragment(fragment_html);
        let Some(root) = first_element_child(doc.root_element()) else {
            return Table::empty();
        };
        let Some(variant) = classify(root, &self.rules) else {
            return Table::empty();
        };
        // classify only returns variants present in the rule set
        let Some(rules) = self.rules.get(variant) else {
            return Table::empty();
        };

        let items = extract::extract_items(variant, root, rules);
        debug!(?variant, items = items.len(), "extracted fragment");
        assemble(variant, items)
    }

    /// Produces the fragment's in-place replacement: the rendered block
    /// table, or the original markup unchanged when nothing was
    /// recognized (a content no-op).
    pub fn rewrite(&self, fragment_html: &str) -> String {
        match self.convert(fragment_html).render() {
            Some(table) => table,
            None => fragment_html.to_string(),
        }
    }
}
