//! Agent-facing candidate listing.
//!
//! Renders extracted candidates as the numbered affordance listing the
//! driving agent picks targets from. Pure string construction.

use crate::ax::InteractiveCandidate;

impl InteractiveCandidate {
    /// One listing line: `[index] <role> "name"`, with an untargetable
    /// marker when the candidate has no DOM link.
    pub fn to_listing_line(&self, index: usize) -> String {
        let mut parts = vec![format!("[{index}]"), format!("<{}>", self.role)];
        if !self.name.is_empty() {
            parts.push(format!("\"{}\"", self.name));
        }
        if !self.targetable {
            parts.push("(untargetable)".to_string());
        }
        parts.join(" ")
    }
}

/// Render candidates one per line, preserving extraction order.
pub fn render_candidates(candidates: &[InteractiveCandidate]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| candidate.to_listing_line(index))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
