//! # Pagetarget Protocols
//!
//! Wire-shaped snapshot types consumed by the targeting engine. Field names
//! mirror the remote-debugging-protocol payloads the transport layer
//! captures (accessibility tree, "describe node" batches, full DOM document
//! trees), so snapshots deserialize directly from the raw JSON.
//!
//! The types here carry no behavior beyond decoding. Anything derived from
//! them (candidates, resolved nodes, selectors) lives in
//! `pagetarget-engine`.

pub mod error;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::{
    AxNode, AxSnapshot, DescribedNode, DomDocument, DomNode, NodeDescription,
    decode_descriptions,
};
