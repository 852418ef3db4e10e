//! # Pagetarget
//!
//! Element targeting for agent-driven browser automation: snapshot types
//! plus the pure decision core that turns captured accessibility and DOM
//! trees into stable, prioritized CSS selectors.
//!
//! ## Flow
//!
//! ```text
//! ┌────────────────┐  AX snapshot   ┌───────────────────────────────┐
//! │ session/driver │ ─────────────► │ extract_candidates            │
//! │ (out of scope) │  describe batch│ resolve_backend_node          │
//! │                │ ─────────────► │ build_selector                │
//! │                │  DOM document  │                               │
//! │                │ ─────────────► │ ──► BuiltSelector + strategy  │
//! └────────────────┘                └───────────────────────────────┘
//! ```
//!
//! The driver captures snapshots over its remote-debugging transport and
//! executes actions with the returned selector; this crate only decides.
//! A selector flagged `best_effort` was synthesized from sibling positions
//! and should be identity-checked before acting.
//!
//! This facade re-exports [`pagetarget_protocols`] (wire-shaped snapshot
//! types) and [`pagetarget_engine`] (extraction, resolution, synthesis).

pub use pagetarget_engine::{
    BuiltSelector, DomTreeIndex, ExtractorConfig, IndexedNode, InteractiveCandidate, ResolvedNode,
    SelectorStrategy, TargetSelector, build_selector, extract_candidates, render_candidates,
    resolve_backend_node, selector_for_candidate,
};
pub use pagetarget_protocols::{
    AxNode, AxSnapshot, DescribedNode, DomDocument, DomNode, NodeDescription, SnapshotError,
    decode_descriptions,
};
