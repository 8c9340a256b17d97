use std::path::Path;

use anyhow::{Context, Result};
use vv_tree::MerkleTree;
use vv_types::{dec_to_fr, fr_to_hex, ProverInput};

use crate::leaves::load_leaves;

pub fn run(
    secret: &str,
    personal_id: &str,
    election_id: &str,
    leaves: Option<&Path>,
    depth: usize,
) -> Result<()> {
    eprintln!("[1/4] initializing merkle tree (depth {depth})...");
    let mut tree = MerkleTree::with_depth(depth)?;

    match leaves {
        Some(path) => {
            let prior = load_leaves(path)?;
            eprintln!("[2/4] inserting {} registered leaves...", prior.len());
            for leaf in prior {
                tree.insert(leaf)?;
            }
        }
        None => eprintln!("[2/4] no leaf file, starting from an empty tree"),
    }

    let secret_fe = dec_to_fr(secret).context("--secret")?;
    let personal_fe = dec_to_fr(personal_id).context("--personal-id")?;
    let commitment = tree.hasher().commitment(personal_fe, secret_fe);
    let index = tree.insert(commitment)?;
    eprintln!(
        "[3/4] commitment {} inserted at index {index}",
        fr_to_hex(&commitment)
    );

    let proof = tree.proof(index)?;
    eprintln!("[4/4] merkle root {}", fr_to_hex(&proof.root.0));

    let input = ProverInput {
        secret: secret.to_string(),
        personal_id: personal_id.to_string(),
        witness: proof.to_witness(),
        election_id: election_id.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(())
}
