// ABOUTME: Data-driven extraction rule models and registry, deserialized from embedded JSON.
// ABOUTME: Defines FieldLocator selector chains and per-variant VariantRules keyed in a RuleSet.

//! Extraction rules.
//!
//! The field locator is data, not code: every field a variant can resolve
//! carries an ordered list of CSS selectors reflecting observed markup
//! drift between page templates. Adding a new fallback is a rules-file
//! change, not a logic change.
//!
//! The builtin rule set is embedded JSON (see `data/block_rules.json`);
//! callers can substitute their own via [`RuleSet::from_json`], which
//! validates that every selector compiles before the set is accepted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::Variant;
use crate::error::EngineError;
use crate::selectors::compiles;

/// An ordered fallback chain of CSS selectors for one semantic field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FieldLocator {
    /// Selectors to try in order; the first selector yielding a match wins
    /// for singular fields, and all selectors contribute for multi-valued
    /// fields.
    pub selectors: Vec<String>,
    /// Whether the field keeps every match (CTA lists) instead of the
    /// first one.
    #[serde(default)]
    pub allow_multiple: bool,
    /// Whether matches are additionally de-duplicated by link target.
    #[serde(default)]
    pub dedup_links: bool,
}

impl FieldLocator {
    /// Convenience constructor used by tests and programmatic rule sets.
    pub fn new<S: Into<String>>(selectors: impl IntoIterator<Item = S>) -> Self {
        Self {
            selectors: selectors.into_iter().map(Into::into).collect(),
            allow_multiple: false,
            dedup_links: false,
        }
    }
}

/// The complete extraction knowledge for one structural variant.
///
/// `item` bounds one repeatable unit; variants without it treat the whole
/// fragment as the single item. The link-farm shape uses `group`/`column`/
/// `link` instead of per-item field locators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRules {
    pub variant: Variant,
    /// Class token on the fragment root that selects this variant.
    pub marker: String,
    /// Item boundary selector; `None` means the fragment itself is the item.
    #[serde(default)]
    pub item: Option<String>,
    #[serde(default)]
    pub image: Option<FieldLocator>,
    /// Mobile image art. Looked up for parity with the source markup but
    /// never participates in the output table.
    #[serde(default)]
    pub mobile_image: Option<FieldLocator>,
    #[serde(default)]
    pub eyebrow: Option<FieldLocator>,
    #[serde(default)]
    pub heading: Option<FieldLocator>,
    #[serde(default)]
    pub description: Option<FieldLocator>,
    #[serde(default)]
    pub cta: Option<FieldLocator>,
    /// Link-farm: container that holds the column layout.
    #[serde(default)]
    pub group: Option<String>,
    /// Link-farm: one column within the group.
    #[serde(default)]
    pub column: Option<String>,
    /// Link-farm: one link within a column.
    #[serde(default)]
    pub link: Option<String>,
}

impl VariantRules {
    fn selector_strings(&self) -> impl Iterator<Item = &str> {
        let locator_chains = [
            &self.image,
            &self.mobile_image,
            &self.eyebrow,
            &self.heading,
            &self.description,
            &self.cta,
        ];
        let from_locators = locator_chains
            .into_iter()
            .filter_map(|fl| fl.as_ref())
            .flat_map(|fl| fl.selectors.iter().map(String::as_str));
        let from_bounds = [&self.item, &self.group, &self.column, &self.link]
            .into_iter()
            .filter_map(|s| s.as_deref());
        from_locators.chain(from_bounds).collect::<Vec<_>>().into_iter()
    }
}

/// Registry of variant rules, keyed by variant tag.
#[derive(Debug, Default, Clone)]
pub struct RuleSet {
    map: HashMap<Variant, VariantRules>,
}

impl RuleSet {
    /// Creates a new empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers rules for their variant, replacing any previous entry.
    pub fn register(&mut self, rules: VariantRules) {
        self.map.insert(rules.variant, rules);
    }

    /// Looks up the rules governing a variant.
    pub fn get(&self, variant: Variant) -> Option<&VariantRules> {
        self.map.get(&variant)
    }

    /// Returns the number of registered variants.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Parses a rule set from JSON, validating every selector.
    ///
    /// A selector that does not compile is a configuration mistake that
    /// would otherwise surface as a silently-absent field during
    /// extraction, so it is rejected here instead.
    pub fn from_json(json: &str) -> Result<RuleSet, EngineError> {
        let entries: Vec<VariantRules> = serde_json::from_str(json)
            .map_err(|e| EngineError::config("parse rules", Some(e.into())))?;

        let mut set = RuleSet::new();
        for rules in entries {
            for css in rules.selector_strings() {
                if !compiles(css) {
                    return Err(EngineError::selector("validate rules", css));
                }
            }
            set.register(rules);
        }
        Ok(set)
    }
}

/// Embedded JSON containing the builtin variant rules.
const BUILTIN_RULES_JSON: &str = include_str!("../data/block_rules.json");

/// Loads the builtin rule set from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or carries an invalid
/// selector; both are build-time defects, not runtime conditions.
pub fn load_builtin_rules() -> RuleSet {
    RuleSet::from_json(BUILTIN_RULES_JSON).expect("failed to parse builtin block rules")
}
