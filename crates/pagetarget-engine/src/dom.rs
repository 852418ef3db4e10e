//! Backend DOM node resolution.
//!
//! Joins an AX candidate's backend node id against a batch of described
//! nodes and decodes the flat protocol attribute list at this boundary; the
//! flat `[k, v, k, v, ...]` shape does not leak past this module.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use pagetarget_protocols::{DescribedNode, NodeDescription};

/// Concrete tag/attribute data for one resolved DOM node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedNode {
    pub node_id: i64,
    pub backend_node_id: i64,
    /// Lowercase tag name; empty when the description carried no name.
    pub local_name: String,
    /// Decoded attribute map.
    pub attributes: BTreeMap<String, String>,
}

/// Resolve a backend DOM node id against a described-node batch.
///
/// Linear scan, first match wins; the batch is one "describe" call per
/// targeting decision, not a hot loop. Entries with a missing node or
/// missing ids are skipped. `None` means the element is no longer
/// resolvable and the caller should re-observe the page.
pub fn resolve_backend_node(
    backend_dom_node_id: i64,
    described: &[NodeDescription],
) -> Option<ResolvedNode> {
    for description in described {
        let Some(node) = &description.node else {
            continue;
        };
        let (Some(node_id), Some(backend_node_id)) = (node.node_id, node.backend_node_id) else {
            trace!("skipping described node without numeric ids");
            continue;
        };
        if backend_node_id != backend_dom_node_id {
            continue;
        }
        return Some(ResolvedNode {
            node_id,
            backend_node_id,
            local_name: tag_name(node),
            attributes: decode_attributes(node.attributes.as_deref().unwrap_or_default()),
        });
    }

    trace!(backend_dom_node_id, "no described node matched");
    None
}

fn tag_name(node: &DescribedNode) -> String {
    node.local_name
        .as_deref()
        .or(node.node_name.as_deref())
        .unwrap_or("")
        .to_ascii_lowercase()
}

/// Decode the flat `[k0, v0, k1, v1, ...]` attribute list.
///
/// Pairs with a non-string slot are skipped and a dangling odd-length tail
/// key is dropped, so a truncated capture still yields the intact pairs.
fn decode_attributes(raw: &[Value]) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    for pair in raw.chunks_exact(2) {
        let (Value::String(key), Value::String(value)) = (&pair[0], &pair[1]) else {
            continue;
        };
        attributes.insert(key.clone(), value.clone());
    }
    attributes
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
