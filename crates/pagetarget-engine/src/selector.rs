//! CSS selector synthesis.
//!
//! Produces one selector per resolved node in priority order: a stable
//! `id`, then a dedicated `data-testid`, then a positional `:nth-child()`
//! path. The priority reflects stability under markup churn; only the
//! positional fallback is flagged `best_effort`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use pagetarget_protocols::{DomDocument, DomNode};

use crate::dom::ResolvedNode;
use crate::index::DomTreeIndex;

/// Which rule produced a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorStrategy {
    /// Stable `id` attribute.
    #[serde(rename = "id")]
    Id,
    /// Dedicated `data-testid` attribute.
    #[serde(rename = "data-testid")]
    DataTestId,
    /// Positional path; breaks when siblings are inserted or removed.
    #[serde(rename = "nth-child")]
    NthChild,
}

/// A synthesized CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltSelector {
    /// CSS selector string.
    pub selector: String,
    /// True only when no stable attribute existed and a positional path was
    /// used; the executor should verify element identity before acting.
    pub best_effort: bool,
    /// Rule that produced the selector.
    pub strategy: SelectorStrategy,
}

/// Synthesize the most stable selector for a resolved node.
///
/// Never fails: when the node has no stable attribute and cannot even be
/// located in the supplied document, the result degrades to a bare tag
/// name with `best_effort` set rather than an error.
pub fn build_selector(node: &ResolvedNode, document: &DomDocument) -> BuiltSelector {
    if let Some(id) = non_empty(node.attributes.get("id")) {
        let selector = if is_safe_css_identifier(id) {
            format!("#{id}")
        } else {
            format!("[id=\"{}\"]", escape_attribute_value(id))
        };
        debug!(selector = %selector, "selector from id attribute");
        return BuiltSelector {
            selector,
            best_effort: false,
            strategy: SelectorStrategy::Id,
        };
    }

    if let Some(testid) = non_empty(node.attributes.get("data-testid")) {
        let selector = format!("[data-testid=\"{}\"]", escape_attribute_value(testid));
        debug!(selector = %selector, "selector from data-testid attribute");
        return BuiltSelector {
            selector,
            best_effort: false,
            strategy: SelectorStrategy::DataTestId,
        };
    }

    nth_child_selector(node, document)
}

/// Build the positional `:nth-child()` path for a node with no stable
/// attribute.
///
/// Walks from the node up to the document root, emitting
/// `tag:nth-child(position)` per level. A node with no parent contributes
/// its bare tag and ends the walk; so does a level whose position cannot be
/// determined. Segments are joined root-first with `" > "`.
fn nth_child_selector(node: &ResolvedNode, document: &DomDocument) -> BuiltSelector {
    let index = DomTreeIndex::build(document);

    let Some(entry) = index.get(node.node_id) else {
        trace!(node_id = node.node_id, "node missing from document snapshot");
        return BuiltSelector {
            selector: fallback_tag(&node.local_name).to_string(),
            best_effort: true,
            strategy: SelectorStrategy::NthChild,
        };
    };

    let mut segments = Vec::new();
    let mut current = entry;

    loop {
        let tag = dom_tag(current.node);
        let Some(parent) = current.parent_id.and_then(|parent_id| index.get(parent_id)) else {
            segments.push(tag);
            break;
        };
        match DomTreeIndex::nth_child_index(parent.node, current.node.node_id) {
            Some(position) => segments.push(format!("{tag}:nth-child({position})")),
            None => {
                // Inconsistent tree: stop climbing at this level.
                segments.push(tag);
                break;
            }
        }
        current = parent;
    }

    segments.reverse();
    let selector = segments.join(" > ");
    debug!(selector = %selector, "positional fallback selector");
    BuiltSelector {
        selector,
        best_effort: true,
        strategy: SelectorStrategy::NthChild,
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Safe for bare `#id` syntax: `[A-Za-z_]` followed by `[A-Za-z0-9_-]*`.
fn is_safe_css_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Escape a value for a double-quoted attribute selector: backslashes are
/// doubled, embedded double quotes escaped.
fn escape_attribute_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn dom_tag(node: &DomNode) -> String {
    let tag = node
        .local_name
        .as_deref()
        .or(node.node_name.as_deref())
        .unwrap_or("")
        .to_ascii_lowercase();
    fallback_tag(&tag).to_string()
}

fn fallback_tag(tag: &str) -> &str {
    if tag.trim().is_empty() { "div" } else { tag }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
