//! Witness structs handed to the external proving system.
//!
//! Key names must match the circuit's input signals exactly, so both
//! structs serialize with camelCase keys (`pathElements`, `pathIndices`,
//! `merkleRoot`, …). Field elements travel as decimal strings.

use serde::{Deserialize, Serialize};

use crate::encode::fr_to_dec;
use crate::merkle::MerkleProof;

/// Membership witness: sibling path, left/right bits, and the root the
/// path recombines to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipWitness {
    pub path_elements: Vec<String>,
    pub path_indices: Vec<u8>,
    pub merkle_root: String,
}

/// Full prover input: the caller's secrets plus the membership witness,
/// the complete object the external prover consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProverInput {
    pub secret: String,
    pub personal_id: String,
    #[serde(flatten)]
    pub witness: MembershipWitness,
    pub election_id: String,
}

impl MerkleProof {
    /// Decimal-string encoding for the external proving system.
    pub fn to_witness(&self) -> MembershipWitness {
        MembershipWitness {
            path_elements: self.path.siblings.iter().map(fr_to_dec).collect(),
            path_indices: self.path.indices.iter().map(|&b| b as u8).collect(),
            merkle_root: fr_to_dec(&self.root.0),
        }
    }
}
