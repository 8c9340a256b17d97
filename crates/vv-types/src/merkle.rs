use ark_bls12_381::Fr;

/// Default tree depth; capacity 2^20 leaves.
pub const MERKLE_DEPTH: usize = 20;

/// Sibling path from a leaf to the root, leaf-to-root order.
/// `indices[k] == true` means the node at level `k` is the right child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerklePath {
    pub siblings: Vec<Fr>,
    pub indices: Vec<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MerkleRoot(pub Fr);

/// A path together with the root it was extracted against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub path: MerklePath,
    pub root: MerkleRoot,
}
