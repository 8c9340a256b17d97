//! Shared types for the VeilVote membership engine: Merkle path and
//! root wrappers, witness structs for the external prover, and string
//! coercion into the BLS12-381 scalar field.

pub mod encode;
pub mod merkle;
pub mod witness;

pub use encode::{dec_to_fr, fr_to_dec, fr_to_hex, hex_to_fr, CoercionError};
pub use merkle::{MerklePath, MerkleProof, MerkleRoot, MERKLE_DEPTH};
pub use witness::{MembershipWitness, ProverInput};
