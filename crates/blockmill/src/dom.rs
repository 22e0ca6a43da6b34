// ABOUTME: DOM serialization helpers shared by the cleanup stage and block rendering.
// ABOUTME: Filtered re-serialization with skip-sets, attribute drop lists, and class-token stripping.

//! DOM utilities.
//!
//! scraper's tree is read-only, so every mutation this crate performs is
//! expressed as a filtered re-serialization: mark the node ids to drop,
//! then walk the tree writing everything else back out. The filter also
//! drops named attributes and strips a single class token in the same
//! pass.

use std::collections::HashSet;

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node};

/// Options controlling one filtered serialization pass.
#[derive(Debug, Default)]
pub(crate) struct FilterOpts<'a> {
    /// Subtree roots to drop entirely.
    pub skip: HashSet<NodeId>,
    /// Attribute names removed from every element.
    pub strip_attrs: &'a [&'a str],
    /// Class token removed from class attributes; the element survives.
    pub strip_class: Option<&'a str>,
}

/// Returns the first element child of a node, skipping text and comments.
pub(crate) fn first_element_child(root: ElementRef<'_>) -> Option<ElementRef<'_>> {
    root.children().find_map(ElementRef::wrap)
}

/// Collects the node ids of every element matching any of the selectors.
pub(crate) fn collect_matching_ids(doc: &Html, selectors: &[&str]) -> HashSet<NodeId> {
    let mut ids = HashSet::new();
    for css in selectors {
        let Some(sel) = crate::selectors::get_or_compile(css) else {
            continue;
        };
        for el in doc.select(&sel) {
            ids.insert(el.id());
        }
    }
    ids
}

/// Serializes the whole document applying the filter options. Starts at
/// the tree root so the doctype survives the round trip.
pub(crate) fn serialize_document(doc: &Html, opts: &FilterOpts<'_>) -> String {
    let mut out = String::new();
    serialize_filtered(doc.tree.root(), opts, &mut out);
    out
}

/// Raw-text elements whose contents must not be entity-escaped.
fn in_raw_text(node: NodeRef<'_, Node>) -> bool {
    match node.parent().map(|p| p.value()) {
        Some(Node::Element(el)) => matches!(el.name(), "script" | "style"),
        _ => false,
    }
}

fn serialize_filtered(node: NodeRef<'_, Node>, opts: &FilterOpts<'_>, out: &mut String) {
    if opts.skip.contains(&node.id()) {
        return;
    }
    match node.value() {
        // Entities are decoded at parse time; escape on the way back out
        // so text never turns into live markup on a re-parse.
        Node::Text(t) => {
            if in_raw_text(node) {
                out.push_str(&**t);
            } else {
                out.push_str(&escape_text(&**t));
            }
        }
        Node::Document | Node::Fragment => {
            for child in node.children() {
                serialize_filtered(child, opts, out);
            }
        }
        Node::Doctype(dt) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(dt.name());
            out.push('>');
        }
        Node::Element(el) => {
            let name = el.name();
            out.push('<');
            out.push_str(name);

            for (k, v) in el.attrs() {
                if opts.strip_attrs.iter().any(|a| a.eq_ignore_ascii_case(k)) {
                    continue;
                }
                if k.eq_ignore_ascii_case("class") {
                    if let Some(token) = opts.strip_class {
                        let kept = v
                            .split_whitespace()
                            .filter(|c| *c != token)
                            .collect::<Vec<_>>()
                            .join(" ");
                        if !kept.is_empty() {
                            out.push_str(" class=\"");
                            out.push_str(&escape_attr(&kept));
                            out.push('"');
                        }
                        continue;
                    }
                }
                out.push(' ');
                out.push_str(k);
                out.push_str("=\"");
                out.push_str(&escape_attr(v));
                out.push('"');
            }

            if is_void_element(name) {
                out.push_str(" />");
                return;
            }

            out.push('>');
            for child in node.children() {
                serialize_filtered(child, opts, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::Comment(c) => {
            out.push_str("<!--");
            out.push_str(&**c);
            out.push_str("-->");
        }
        _ => {}
    }
}

/// Escape an attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text content.
pub(crate) fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Check if tag is a void element.
pub(crate) fn is_void_element(tag: &str) -> bool {
    matches!(
        tag.to_lowercase().as_str(),
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
