//! Poseidon hashing over the BLS12-381 scalar field.
//!
//! Deriving the ark/MDS parameters is the expensive part of setup, so
//! it runs once in [`PoseidonHasher::new`] and the resulting hasher is
//! immutable. Every hash after construction is pure synchronous
//! computation.

use ark_bls12_381::Fr;
use ark_crypto_primitives::sponge::{
    poseidon::{PoseidonConfig, PoseidonSponge},
    CryptographicSponge, FieldBasedCryptographicSponge,
};
use ark_ff::PrimeField;

const RATE: usize = 2;
const FULL_ROUNDS: usize = 8;
const PARTIAL_ROUNDS: usize = 31;
const ALPHA: u64 = 17;

/// Poseidon permutation with parameters fixed at construction.
#[derive(Clone)]
pub struct PoseidonHasher {
    config: PoseidonConfig<Fr>,
}

impl PoseidonHasher {
    pub fn new() -> Self {
        let (ark, mds) =
            ark_crypto_primitives::sponge::poseidon::find_poseidon_ark_and_mds::<Fr>(
                Fr::MODULUS_BIT_SIZE as u64,
                RATE,
                FULL_ROUNDS as u64,
                PARTIAL_ROUNDS as u64,
                0,
            );
        Self {
            config: PoseidonConfig::new(FULL_ROUNDS, PARTIAL_ROUNDS, ALPHA, mds, ark, RATE, 1),
        }
    }

    /// Hash an input sequence of any arity.
    pub fn hash(&self, inputs: &[Fr]) -> Fr {
        let mut sponge = PoseidonSponge::new(&self.config);
        sponge.absorb(&inputs);
        sponge.squeeze_native_field_elements(1)[0]
    }

    /// Two-to-one hash, the tree's node combiner.
    pub fn hash2(&self, a: Fr, b: Fr) -> Fr {
        self.hash(&[a, b])
    }

    /// Voter commitment: `hash(personal_id, secret)`.
    pub fn commitment(&self, personal_id: Fr, secret: Fr) -> Fr {
        self.hash(&[personal_id, secret])
    }
}

impl Default for PoseidonHasher {
    fn default() -> Self {
        Self::new()
    }
}
