//! Captured page snapshot types.
//!
//! Three snapshot families arrive from the session layer: the accessibility
//! tree (`AxSnapshot`), batched "describe node" responses
//! (`NodeDescription`), and the full DOM document tree (`DomDocument`).
//! All of them are externally captured and not fully trusted; the decode
//! entry points here are lenient where the protocol allows partial data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SnapshotError;

/// Node from a captured accessibility tree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxNode {
    /// Semantic role ("button", "textbox", ...). Free-form; may be empty
    /// or whitespace.
    pub role: Option<String>,
    /// Accessible name. Free-form; may be empty or whitespace.
    pub name: Option<String>,
    /// Link to the underlying DOM node; absent when the AX node has no DOM
    /// counterpart.
    #[serde(rename = "backendDOMNodeId")]
    pub backend_dom_node_id: Option<i64>,
    /// Originating frame/document.
    pub frame_id: Option<String>,
    /// Excluded from accessibility consideration (presentational nodes).
    pub ignored: bool,
}

/// A captured accessibility tree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxSnapshot {
    #[serde(default)]
    pub nodes: Vec<AxNode>,
}

impl AxSnapshot {
    /// Decode a snapshot from a captured JSON payload.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        serde_json::from_value(value).map_err(SnapshotError::from)
    }
}

/// One entry from a batched "describe node" response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeDescription {
    #[serde(default)]
    pub node: Option<DescribedNode>,
}

/// Tag/attribute data for one described DOM node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescribedNode {
    /// Node id, stable within one DOM snapshot.
    pub node_id: Option<i64>,
    /// Join key against [`AxNode::backend_dom_node_id`].
    pub backend_node_id: Option<i64>,
    pub local_name: Option<String>,
    pub node_name: Option<String>,
    /// Flat alternating `[k0, v0, k1, v1, ...]` attribute list. Kept as raw
    /// JSON values: captured batches may be truncated or carry non-string
    /// slots, and the resolver decodes them pair by pair.
    pub attributes: Option<Vec<Value>>,
}

/// Decode a batched "describe node" response.
///
/// Per-entry lenient: an entry that does not decode degrades to an empty
/// description (which the resolver skips) rather than failing the batch.
pub fn decode_descriptions(values: &[Value]) -> Vec<NodeDescription> {
    values
        .iter()
        .map(|value| serde_json::from_value(value.clone()).unwrap_or_default())
        .collect()
}

/// Node of a full DOM document tree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomNode {
    pub node_id: i64,
    pub parent_id: Option<i64>,
    /// 1 = element. Unset is treated as an element downstream.
    pub node_type: Option<i64>,
    pub node_name: Option<String>,
    pub local_name: Option<String>,
    pub children: Option<Vec<DomNode>>,
}

/// Full DOM document tree snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomDocument {
    pub root: DomNode,
}

impl DomDocument {
    /// Decode from a captured payload.
    ///
    /// Accepts both the bare `{"root": ...}` shape and the
    /// `{"document": {"root": ...}}` envelope the transport layer hands
    /// over.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(mut map) => {
                if let Some(document) = map.remove("document") {
                    return serde_json::from_value(document).map_err(SnapshotError::from);
                }
                serde_json::from_value(Value::Object(map)).map_err(SnapshotError::from)
            }
            _ => Err(SnapshotError::UnexpectedShape {
                expected: "an object with a root or document field",
            }),
        }
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
