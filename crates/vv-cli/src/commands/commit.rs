use anyhow::{Context, Result};
use vv_poseidon::PoseidonHasher;
use vv_types::{dec_to_fr, fr_to_dec, fr_to_hex};

pub fn run(secret: &str, personal_id: &str) -> Result<()> {
    let secret_fe = dec_to_fr(secret).context("--secret")?;
    let personal_fe = dec_to_fr(personal_id).context("--personal-id")?;

    let hasher = PoseidonHasher::new();
    let commitment = hasher.commitment(personal_fe, secret_fe);
    println!("commitment (dec): {}", fr_to_dec(&commitment));
    println!("commitment (hex): {}", fr_to_hex(&commitment));
    Ok(())
}
