//! Leaf-file loading: a JSON array of decimal field elements, the same
//! shape the registry exports.

use std::path::Path;

use anyhow::{Context, Result};
use ark_bls12_381::Fr;
use vv_types::dec_to_fr;

pub fn load_leaves(path: &Path) -> Result<Vec<Fr>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read leaves file {}", path.display()))?;
    parse_leaves(&data)
}

pub fn parse_leaves(data: &str) -> Result<Vec<Fr>> {
    let decs: Vec<String> = serde_json::from_str(data).context("invalid leaves JSON")?;
    decs.iter()
        .map(|s| dec_to_fr(s).map_err(Into::into))
        .collect()
}
