//! Interactive candidate extraction from accessibility tree snapshots.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use pagetarget_protocols::AxSnapshot;

/// Roles admitted as interactive by default.
static DEFAULT_INTERACTIVE_ROLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "button",
        "textbox",
        "link",
        "checkbox",
        "radio",
        "combobox",
        "listbox",
        "option",
        "menuitem",
        "switch",
        "slider",
        "spinbutton",
        "tab",
        "searchbox",
    ]
    .into_iter()
    .collect()
});

/// Extraction configuration.
///
/// The interactive-role set is injectable so embedders can admit
/// app-specific ARIA roles without forking the extractor. The default set
/// is the fixed baseline whitelist.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Roles admitted as interactive candidates.
    pub interactive_roles: HashSet<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            interactive_roles: DEFAULT_INTERACTIVE_ROLES
                .iter()
                .map(|role| role.to_string())
                .collect(),
        }
    }
}

impl ExtractorConfig {
    /// Replace the role set wholesale.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            interactive_roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Admit one more role on top of the current set.
    pub fn allow_role(mut self, role: impl Into<String>) -> Self {
        self.interactive_roles.insert(role.into());
        self
    }

    fn is_interactive(&self, role: &str) -> bool {
        self.interactive_roles.contains(role)
    }
}

/// One actionable element surfaced from an AX snapshot.
///
/// Created fresh per extraction call and never mutated; discard once a
/// target has been picked or the page is re-observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractiveCandidate {
    /// Trimmed semantic role.
    pub role: String,
    /// Trimmed accessible name; may be empty.
    pub name: String,
    /// Link to the underlying DOM node, when one exists.
    pub backend_dom_node_id: Option<i64>,
    /// Originating frame, passed through untouched.
    pub frame_id: Option<String>,
    /// True iff the candidate has a DOM link and can be resolved to a
    /// selector.
    pub targetable: bool,
}

/// Filter an AX snapshot down to interactive candidates, preserving input
/// order.
///
/// Ignored nodes and nodes whose trimmed role is empty or outside the
/// configured role set are skipped. An empty accessible name is preserved,
/// not filtered; the caller may still target such a node. Malformed fields
/// degrade to empty strings or `None` rather than failing the extraction.
pub fn extract_candidates(
    snapshot: &AxSnapshot,
    config: &ExtractorConfig,
) -> Vec<InteractiveCandidate> {
    let mut candidates = Vec::new();

    for node in &snapshot.nodes {
        if node.ignored {
            trace!(role = ?node.role, "skipping ignored AX node");
            continue;
        }
        let role = node.role.as_deref().unwrap_or("").trim();
        if role.is_empty() || !config.is_interactive(role) {
            continue;
        }
        let name = node.name.as_deref().unwrap_or("").trim();
        candidates.push(InteractiveCandidate {
            role: role.to_string(),
            name: name.to_string(),
            backend_dom_node_id: node.backend_dom_node_id,
            frame_id: node.frame_id.clone(),
            targetable: node.backend_dom_node_id.is_some(),
        });
    }

    debug!(
        total = snapshot.nodes.len(),
        interactive = candidates.len(),
        "extracted interactive candidates"
    );
    candidates
}

#[cfg(test)]
#[path = "ax_tests.rs"]
mod tests;
