use std::path::Path;

use anyhow::Result;
use vv_tree::MerkleTree;
use vv_types::{fr_to_dec, fr_to_hex};

use crate::leaves::load_leaves;

pub fn run(leaves: Option<&Path>, depth: usize) -> Result<()> {
    let mut tree = MerkleTree::with_depth(depth)?;
    if let Some(path) = leaves {
        for leaf in load_leaves(path)? {
            tree.insert(leaf)?;
        }
    }
    let root = tree.root().0;
    println!("root (dec): {}", fr_to_dec(&root));
    println!("root (hex): {}", fr_to_hex(&root));
    println!("leaves:     {}", tree.len());
    Ok(())
}
