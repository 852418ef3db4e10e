//! One-call targeting facade.
//!
//! Chains resolution and selector synthesis for a candidate the caller has
//! already picked from an extraction. The individual steps stay public for
//! callers that need the intermediate data.

use serde::{Deserialize, Serialize};
use tracing::debug;

use pagetarget_protocols::{DomDocument, NodeDescription};

use crate::ax::InteractiveCandidate;
use crate::dom::{ResolvedNode, resolve_backend_node};
use crate::selector::{BuiltSelector, build_selector};

/// A fully targeted element: concrete node data plus the selector to act
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSelector {
    /// Resolved tag/attribute data.
    pub resolved: ResolvedNode,
    /// Selector, strategy and confidence flag.
    pub selector: BuiltSelector,
    /// Originating frame, passed through from the candidate.
    pub frame_id: Option<String>,
}

/// Resolve `candidate` against a described batch and synthesize its
/// selector.
///
/// `None` when the candidate has no DOM link or the batch no longer
/// contains it; the caller should re-observe the page rather than retry.
pub fn selector_for_candidate(
    candidate: &InteractiveCandidate,
    described: &[NodeDescription],
    document: &DomDocument,
) -> Option<TargetSelector> {
    let backend_id = candidate.backend_dom_node_id?;
    let resolved = resolve_backend_node(backend_id, described)?;
    let selector = build_selector(&resolved, document);
    debug!(
        role = %candidate.role,
        selector = %selector.selector,
        best_effort = selector.best_effort,
        "targeted candidate"
    );
    Some(TargetSelector {
        resolved,
        selector,
        frame_id: candidate.frame_id.clone(),
    })
}

#[cfg(test)]
#[path = "targeting_tests.rs"]
mod tests;
