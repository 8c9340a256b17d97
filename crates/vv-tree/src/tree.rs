use ark_bls12_381::Fr;
use ark_ff::AdditiveGroup;
use vv_poseidon::PoseidonHasher;
use vv_types::{MerklePath, MerkleProof, MerkleRoot, MERKLE_DEPTH};

use crate::error::TreeError;

/// Deepest supported tree (capacity 2^32 leaves).
pub const MAX_DEPTH: usize = 32;

/// Fixed-depth, append-only Merkle tree.
///
/// Each level pads its odd node out with that level's zero constant —
/// `zeros[0] = 0`, `zeros[k] = hash2(zeros[k-1], zeros[k-1])` — so an
/// empty subtree at level `k` hashes the same whether its children are
/// stored or implied.
pub struct MerkleTree {
    hasher: PoseidonHasher,
    depth: usize,
    zeros: Vec<Fr>,
    leaves: Vec<Fr>,
    root: Fr,
}

impl MerkleTree {
    /// Tree of the default depth [`MERKLE_DEPTH`].
    pub fn new() -> Result<Self, TreeError> {
        Self::with_depth(MERKLE_DEPTH)
    }

    /// One-time setup: derives the Poseidon parameters and the
    /// per-level zero table. Everything after construction is pure
    /// synchronous computation.
    pub fn with_depth(depth: usize) -> Result<Self, TreeError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(TreeError::InvalidDepth(depth));
        }
        let hasher = PoseidonHasher::new();
        let mut zeros = vec![Fr::ZERO; depth];
        for i in 1..depth {
            zeros[i] = hasher.hash2(zeros[i - 1], zeros[i - 1]);
        }
        let root = zeros[depth - 1];
        Ok(Self {
            hasher,
            depth,
            zeros,
            leaves: Vec::new(),
            root,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Maximum number of leaves: `2^depth`.
    pub fn capacity(&self) -> u64 {
        1u64 << self.depth
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Index the next inserted leaf will occupy.
    pub fn next_index(&self) -> usize {
        self.leaves.len()
    }

    pub fn leaves(&self) -> &[Fr] {
        &self.leaves
    }

    /// Zero constant for `level`; `zero(0)` is the field's additive
    /// identity.
    pub fn zero(&self, level: usize) -> Fr {
        self.zeros[level]
    }

    /// The hasher, exposed so callers can build leaf commitments with
    /// the same permutation the tree hashes with.
    pub fn hasher(&self) -> &PoseidonHasher {
        &self.hasher
    }

    /// Append a leaf and recompute the root bottom-up. Returns the
    /// leaf's index.
    pub fn insert(&mut self, leaf: Fr) -> Result<usize, TreeError> {
        if self.leaves.len() as u64 >= self.capacity() {
            return Err(TreeError::CapacityExceeded {
                capacity: self.capacity(),
            });
        }
        let idx = self.leaves.len();
        self.leaves.push(leaf);
        self.root = self.rebuild();
        Ok(idx)
    }

    /// Root as of the last insertion; the empty-tree root before any.
    pub fn root(&self) -> MerkleRoot {
        MerkleRoot(self.root)
    }

    fn rebuild(&self) -> Fr {
        let mut layer = self.leaves.clone();
        for level in 0..self.depth {
            layer = self.hash_layer(&layer, level);
        }
        layer.first().copied().unwrap_or(self.zeros[self.depth - 1])
    }

    fn hash_layer(&self, layer: &[Fr], level: usize) -> Vec<Fr> {
        let zero = self.zeros[level];
        let mut next = Vec::with_capacity((layer.len() + 1) / 2);
        let mut i = 0;
        while i < layer.len() {
            let left = layer[i];
            let right = if i + 1 < layer.len() { layer[i + 1] } else { zero };
            next.push(self.hasher.hash2(left, right));
            i += 2;
        }
        next
    }

    /// Sibling path from `index` up to the root.
    ///
    /// The level-`k` sibling comes from the level-`k` node layer, or
    /// that level's zero constant when the position is past the layer's
    /// end — never from the leaf sequence once `k > 0`.
    pub fn proof(&self, index: usize) -> Result<MerkleProof, TreeError> {
        if index >= self.leaves.len() {
            return Err(TreeError::IndexOutOfRange {
                index,
                len: self.leaves.len(),
            });
        }
        let mut siblings = Vec::with_capacity(self.depth);
        let mut indices = Vec::with_capacity(self.depth);
        let mut layer = self.leaves.clone();
        let mut idx = index;

        for level in 0..self.depth {
            let is_right = idx & 1 == 1;
            indices.push(is_right);

            let sibling_idx = if is_right { idx - 1 } else { idx + 1 };
            let sibling = if sibling_idx < layer.len() {
                layer[sibling_idx]
            } else {
                self.zeros[level]
            };
            siblings.push(sibling);

            layer = self.hash_layer(&layer, level);
            idx /= 2;
        }

        Ok(MerkleProof {
            path: MerklePath { siblings, indices },
            root: self.root(),
        })
    }
}

/// Recombine `leaf` along `path` and compare against `root`. Used by
/// tests and witness consumers sanity-checking a path before proving.
pub fn verify_path(
    hasher: &PoseidonHasher,
    leaf: Fr,
    path: &MerklePath,
    root: &MerkleRoot,
) -> bool {
    let mut current = leaf;
    for (sibling, is_right) in path.siblings.iter().zip(&path.indices) {
        current = if *is_right {
            hasher.hash2(*sibling, current)
        } else {
            hasher.hash2(current, *sibling)
        };
    }
    current == root.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::UniformRand;

    #[test]
    fn invalid_depths_rejected() {
        assert!(matches!(
            MerkleTree::with_depth(0),
            Err(TreeError::InvalidDepth(0))
        ));
        assert!(matches!(
            MerkleTree::with_depth(MAX_DEPTH + 1),
            Err(TreeError::InvalidDepth(_))
        ));
    }

    #[test]
    fn zero_table_chains() {
        let tree = MerkleTree::with_depth(6).unwrap();
        assert_eq!(tree.zero(0), Fr::ZERO);
        for i in 1..tree.depth() {
            assert_eq!(
                tree.zero(i),
                tree.hasher().hash2(tree.zero(i - 1), tree.zero(i - 1))
            );
        }
    }

    #[test]
    fn empty_root_is_top_zero() {
        let tree = MerkleTree::with_depth(5).unwrap();
        assert_eq!(tree.root().0, tree.zero(4));
    }

    #[test]
    fn empty_root_deterministic() {
        let t1 = MerkleTree::with_depth(5).unwrap();
        let t2 = MerkleTree::with_depth(5).unwrap();
        assert_eq!(t1.root(), t2.root());
    }

    #[test]
    fn single_insert_changes_root() {
        let mut tree = MerkleTree::with_depth(5).unwrap();
        let empty_root = tree.root();
        let mut rng = ark_std::test_rng();
        tree.insert(Fr::rand(&mut rng)).unwrap();
        assert_ne!(tree.root(), empty_root);
    }

    #[test]
    fn single_leaf_root_is_left_spine() {
        let mut tree = MerkleTree::with_depth(4).unwrap();
        let mut rng = ark_std::test_rng();
        let leaf = Fr::rand(&mut rng);
        tree.insert(leaf).unwrap();

        let mut expected = leaf;
        for level in 0..tree.depth() {
            expected = tree.hasher().hash2(expected, tree.zero(level));
        }
        assert_eq!(tree.root().0, expected);

        let proof = tree.proof(0).unwrap();
        let zeros: Vec<Fr> = (0..tree.depth()).map(|l| tree.zero(l)).collect();
        assert_eq!(proof.path.siblings, zeros);
        assert!(proof.path.indices.iter().all(|&b| !b));
    }

    #[test]
    fn depth_two_single_leaf() {
        let mut tree = MerkleTree::with_depth(2).unwrap();
        let a = Fr::from(11u64);
        tree.insert(a).unwrap();

        let h = tree.hasher();
        let expected = h.hash2(h.hash2(a, tree.zero(0)), tree.zero(1));
        assert_eq!(tree.root().0, expected);

        let proof = tree.proof(0).unwrap();
        assert_eq!(proof.path.siblings, vec![tree.zero(0), tree.zero(1)]);
        assert_eq!(proof.path.indices, vec![false, false]);
    }

    #[test]
    fn depth_two_two_leaves() {
        let mut tree = MerkleTree::with_depth(2).unwrap();
        let a = Fr::from(11u64);
        let b = Fr::from(22u64);
        tree.insert(a).unwrap();
        tree.insert(b).unwrap();

        let h = tree.hasher();
        let expected = h.hash2(h.hash2(a, b), tree.zero(1));
        assert_eq!(tree.root().0, expected);

        // the level-1 sibling is the zero constant, not a leaf
        let proof = tree.proof(0).unwrap();
        assert_eq!(proof.path.siblings, vec![b, tree.zero(1)]);
        assert_eq!(proof.path.indices, vec![false, false]);
        assert!(verify_path(h, a, &proof.path, &proof.root));

        let proof_b = tree.proof(1).unwrap();
        assert_eq!(proof_b.path.siblings, vec![a, tree.zero(1)]);
        assert_eq!(proof_b.path.indices, vec![true, false]);
        assert!(verify_path(h, b, &proof_b.path, &proof_b.root));
    }

    #[test]
    fn sibling_above_leaf_level_is_intermediate_node() {
        // three leaves at depth 3: the proof for leaf 2 must carry the
        // hash of (leaf0, leaf1) at level 1, not any raw leaf
        let mut tree = MerkleTree::with_depth(3).unwrap();
        let leaves: Vec<Fr> = (1u64..=3).map(Fr::from).collect();
        for l in &leaves {
            tree.insert(*l).unwrap();
        }

        let h = tree.hasher();
        let proof = tree.proof(2).unwrap();
        assert_eq!(proof.path.siblings[0], tree.zero(0));
        assert_eq!(proof.path.siblings[1], h.hash2(leaves[0], leaves[1]));
        assert_eq!(proof.path.siblings[2], tree.zero(2));
        assert_eq!(proof.path.indices, vec![false, true, false]);
        assert!(verify_path(h, leaves[2], &proof.path, &proof.root));
    }

    #[test]
    fn proof_idempotent_between_inserts() {
        let mut tree = MerkleTree::with_depth(4).unwrap();
        let mut rng = ark_std::test_rng();
        for _ in 0..3 {
            tree.insert(Fr::rand(&mut rng)).unwrap();
        }
        let p1 = tree.proof(1).unwrap();
        let p2 = tree.proof(1).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn all_proofs_verify() {
        let mut tree = MerkleTree::with_depth(5).unwrap();
        let mut rng = ark_std::test_rng();
        let leaves: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        for l in &leaves {
            tree.insert(*l).unwrap();
        }
        let root = tree.root();
        for (i, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof(i).unwrap();
            assert_eq!(proof.root, root);
            assert!(
                verify_path(tree.hasher(), *leaf, &proof.path, &root),
                "proof failed for index {i}"
            );
        }
    }

    #[test]
    fn rebuild_consistency() {
        let mut rng = ark_std::test_rng();
        let leaves: Vec<Fr> = (0..5).map(|_| Fr::rand(&mut rng)).collect();

        let mut t1 = MerkleTree::with_depth(4).unwrap();
        let mut t2 = MerkleTree::with_depth(4).unwrap();
        for l in &leaves {
            t1.insert(*l).unwrap();
            t2.insert(*l).unwrap();
        }
        assert_eq!(t1.root(), t2.root());
    }

    #[test]
    fn leaf_order_matters() {
        let mut rng = ark_std::test_rng();
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);

        let mut t1 = MerkleTree::with_depth(3).unwrap();
        t1.insert(a).unwrap();
        t1.insert(b).unwrap();

        let mut t2 = MerkleTree::with_depth(3).unwrap();
        t2.insert(b).unwrap();
        t2.insert(a).unwrap();

        assert_ne!(t1.root(), t2.root());
    }

    #[test]
    fn insert_returns_insertion_order() {
        let mut tree = MerkleTree::with_depth(3).unwrap();
        let mut rng = ark_std::test_rng();
        for expected in 0..4 {
            assert_eq!(tree.next_index(), expected);
            let idx = tree.insert(Fr::rand(&mut rng)).unwrap();
            assert_eq!(idx, expected);
        }
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn out_of_range_proof_rejected() {
        let mut tree = MerkleTree::with_depth(3).unwrap();
        assert!(matches!(
            tree.proof(0),
            Err(TreeError::IndexOutOfRange { index: 0, len: 0 })
        ));
        tree.insert(Fr::from(1u64)).unwrap();
        assert!(matches!(
            tree.proof(1),
            Err(TreeError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(tree.proof(0).is_ok());
    }

    #[test]
    fn capacity_exceeded_rejected() {
        let mut tree = MerkleTree::with_depth(1).unwrap();
        assert_eq!(tree.capacity(), 2);
        tree.insert(Fr::from(1u64)).unwrap();
        tree.insert(Fr::from(2u64)).unwrap();
        let before = tree.root();
        assert!(matches!(
            tree.insert(Fr::from(3u64)),
            Err(TreeError::CapacityExceeded { capacity: 2 })
        ));
        // rejected insert must not disturb the tree
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.root(), before);
    }

    #[test]
    fn full_tree_has_no_zero_siblings() {
        let mut tree = MerkleTree::with_depth(2).unwrap();
        let leaves: Vec<Fr> = (1u64..=4).map(Fr::from).collect();
        for l in &leaves {
            tree.insert(*l).unwrap();
        }
        let h = tree.hasher();
        let proof = tree.proof(0).unwrap();
        assert_eq!(proof.path.siblings[0], leaves[1]);
        assert_eq!(proof.path.siblings[1], h.hash2(leaves[2], leaves[3]));
        assert!(verify_path(h, leaves[0], &proof.path, &proof.root));
    }
}
