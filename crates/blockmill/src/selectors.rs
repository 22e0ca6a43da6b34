// ABOUTME: Pre-compiled CSS selector cache for O(1) selector lookup.
// ABOUTME: Eliminates repeated parsing of CSS selectors in hot extraction paths.

//! Selector caching for efficient repeated DOM queries.
//!
//! CSS selector parsing is expensive relative to the actual DOM matching.
//! This module provides a thread-safe cache that compiles selectors once
//! and reuses them for all subsequent queries.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

/// Thread-safe cache of compiled CSS selectors.
///
/// Uses a RwLock for read-heavy workloads: most accesses are cache hits
/// (reads), with occasional cache misses requiring writes.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
/// Subsequent calls with the same selector string return the cached result.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    // Fast path: check read lock for cached value
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    // Slow path: compile and cache
    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Double-check after acquiring write lock (another thread may have inserted)
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Returns true when a selector string compiles.
///
/// Used by rule-set validation so a typo in a rules file surfaces at load
/// time instead of silently matching nothing during extraction.
pub fn compiles(css: &str) -> bool {
    get_or_compile(css).is_some()
}
