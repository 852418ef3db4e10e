//! Snapshot decoding errors.

use thiserror::Error;

/// Errors produced when decoding a captured snapshot payload.
///
/// These only occur at the JSON decode boundary. Once a snapshot is in
/// typed form, the targeting engine's operations are infallible; damaged
/// entries inside a well-formed envelope degrade instead of erroring.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Payload did not match the expected snapshot shape.
    #[error("Snapshot deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Payload envelope was not the expected JSON shape.
    #[error("Unexpected snapshot payload: expected {expected}")]
    UnexpectedShape { expected: &'static str },
}
