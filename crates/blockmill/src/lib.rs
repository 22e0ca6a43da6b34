// ABOUTME: Main library entry point for the blockmill marketing-page block extractor.
// ABOUTME: Re-exports the public API: Engine, Table, BlockName, Variant, RuleSet, EngineError, cleanup passes.

//! Blockmill converts heterogeneous marketing-page HTML fragments into a
//! normalized row/column block table.
//!
//! A fragment is classified into one structural variant (card grids,
//! carousel, column layouts, hero), its repeatable items are extracted
//! through ordered-fallback field locators, and the resolved fields are
//! assembled into the canonical table that replaces the fragment.
//!
//! # Example
//!
//! ```
//! use blockmill::Engine;
//!
//! let engine = Engine::new();
//! let table = engine.convert(r#"<div class="hero"><h2 class="heading-xxl-desktop">Hi</h2></div>"#);
//! assert_eq!(table.rows.len(), 1);
//! ```

pub mod block;
pub mod classify;
pub mod cleanup;
mod dom;
pub mod engine;
pub mod error;
pub mod extract;
pub mod locate;
pub mod rules;
pub mod selectors;
pub mod synth;

pub use crate::block::{BlockName, Cell, Row, Table};
pub use crate::classify::{classify, Variant};
pub use crate::cleanup::{after_transform, before_transform};
pub use crate::engine::Engine;
pub use crate::error::{EngineError, ErrorCode};
pub use crate::extract::Item;
pub use crate::rules::{load_builtin_rules, FieldLocator, RuleSet, VariantRules};
