mod commands;
mod leaves;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vv", about = "Merkle witness CLI for VeilVote membership proofs")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Insert a voter commitment and emit the prover input JSON
    Witness {
        /// Voter secret (decimal field element)
        #[arg(long)]
        secret: String,
        /// Personal id (decimal field element)
        #[arg(long)]
        personal_id: String,
        /// Election id, passed through to the prover input
        #[arg(long)]
        election_id: String,
        /// JSON file with previously registered leaves (decimal strings)
        #[arg(long)]
        leaves: Option<PathBuf>,
        /// Tree depth
        #[arg(long, default_value_t = vv_types::MERKLE_DEPTH)]
        depth: usize,
    },
    /// Print the root of a tree built from a leaf file
    Root {
        /// JSON file with registered leaves (decimal strings)
        #[arg(long)]
        leaves: Option<PathBuf>,
        /// Tree depth
        #[arg(long, default_value_t = vv_types::MERKLE_DEPTH)]
        depth: usize,
    },
    /// Print the commitment for a secret / personal-id pair
    Commit {
        /// Voter secret (decimal field element)
        #[arg(long)]
        secret: String,
        /// Personal id (decimal field element)
        #[arg(long)]
        personal_id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Witness {
            secret,
            personal_id,
            election_id,
            leaves,
            depth,
        } => commands::witness::run(&secret, &personal_id, &election_id, leaves.as_deref(), depth),
        Cmd::Root { leaves, depth } => commands::root::run(leaves.as_deref(), depth),
        Cmd::Commit { secret, personal_id } => commands::commit::run(&secret, &personal_id),
    }
}
