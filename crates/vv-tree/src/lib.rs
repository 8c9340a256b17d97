//! # vv-tree
//!
//! Fixed-depth, append-only Merkle tree over the BLS12-381 scalar
//! field, hashed with Poseidon. Leaf position is insertion order; the
//! root is recomputed on every insertion and sibling paths are
//! extracted on demand as witness inputs for an external prover.
//!
//! ```rust
//! use vv_tree::{verify_path, MerkleTree};
//!
//! # fn example() -> Result<(), vv_tree::TreeError> {
//! let mut tree = MerkleTree::with_depth(4)?;
//! let commitment = tree.hasher().hash2(67890u64.into(), 12345u64.into());
//! let index = tree.insert(commitment)?;
//! let proof = tree.proof(index)?;
//! assert!(verify_path(tree.hasher(), commitment, &proof.path, &proof.root));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{verify_path, MerkleTree, MAX_DEPTH};
