//! Typed errors for [`MerkleTree`](crate::tree::MerkleTree) operations.

/// Usage errors. All are local and non-retryable; pure computation has
/// no transient failure mode.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("tree depth {0} out of range (must be 1..=32)")]
    InvalidDepth(usize),

    #[error("leaf index {index} out of range: tree has {len} leaves")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("tree is full: capacity of {capacity} leaves reached")]
    CapacityExceeded { capacity: u64 },
}
