//! Field-element ↔ string conversion.
//!
//! Circuit input signals are exchanged as decimal strings of the
//! canonical representative ([`fr_to_dec`] / [`dec_to_fr`]). Hex is
//! used for display and leaf-file interchange: [`fr_to_hex`] produces
//! `0x`-prefixed big-endian hex (66 chars), [`hex_to_fr`] accepts both
//! `0x`-prefixed and raw hex and zero-extends short inputs.

use core::str::FromStr;

use ark_bls12_381::Fr;
use ark_ff::{BigInteger, PrimeField};

/// Input string that cannot be mapped into the scalar field.
#[derive(Debug, thiserror::Error)]
#[error("cannot coerce {0:?} into a field element")]
pub struct CoercionError(pub String);

/// Canonical decimal encoding, the form circuit signals expect.
pub fn fr_to_dec(fr: &Fr) -> String {
    fr.to_string()
}

pub fn dec_to_fr(s: &str) -> Result<Fr, CoercionError> {
    Fr::from_str(s).map_err(|_| CoercionError(s.into()))
}

pub fn fr_to_hex(fr: &Fr) -> String {
    format!("0x{}", hex::encode(fr.into_bigint().to_bytes_be()))
}

pub fn hex_to_fr(s: &str) -> Result<Fr, CoercionError> {
    let raw = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(raw).map_err(|_| CoercionError(s.into()))?;
    if bytes.len() > 32 {
        return Err(CoercionError(s.into()));
    }
    Ok(Fr::from_be_bytes_mod_order(&bytes))
}
