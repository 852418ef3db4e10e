//! Element targeting core for agent-driven browser automation.
//!
//! Given page snapshots captured over a remote-debugging protocol, this
//! crate decides *what* to act on and *how* to address it: it filters the
//! accessibility tree to interactive candidates, resolves a chosen
//! candidate's backend DOM node to concrete attributes, and synthesizes the
//! most stable CSS selector for it.
//!
//! ## Architecture
//!
//! ```text
//! AX snapshot ──────► extract_candidates ──► Vec<InteractiveCandidate>
//!                                                   │ caller picks one
//! describe batch ───► resolve_backend_node ──► Option<ResolvedNode>
//!                                                   │
//! DOM document ─────► build_selector ─────────► BuiltSelector
//! ```
//!
//! Every operation is pure and synchronous: same snapshots in, same
//! decision out. Transport, session lifecycle and action execution live in
//! the surrounding driver, not here.
//!
//! ## Selector stability
//!
//! Selectors are synthesized in priority order: `id`, then `data-testid`,
//! then a positional `:nth-child()` path. Only the positional fallback sets
//! `best_effort`; an executor seeing that flag should verify element
//! identity before acting instead of retargeting blindly.

mod ax;
mod dom;
mod index;
mod listing;
mod selector;
mod targeting;

pub use ax::{ExtractorConfig, InteractiveCandidate, extract_candidates};
pub use dom::{ResolvedNode, resolve_backend_node};
pub use index::{DomTreeIndex, IndexedNode};
pub use listing::render_candidates;
pub use selector::{BuiltSelector, SelectorStrategy, build_selector};
pub use targeting::{TargetSelector, selector_for_candidate};
