use std::path::Path;

use anyhow::Context;
use clap::Parser;
use log::info;
use proposal_encoder::{
    utils::display_proposal::{display_proposal, encode_propose_data},
    ProposalFile, ProposalType,
};

#[derive(Debug, Parser)]
struct Args {
    // Proposal file (.yaml, .toml or .json) with meta, type and commands
    #[clap(short, long)]
    proposal: String,

    // Overrides the type set in the proposal file
    #[clap(long)]
    proposal_type: Option<ProposalType>,

    #[clap(long)]
    display_propose_data: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::init();

    let file = ProposalFile::load(Path::new(&args.proposal))?;
    let mut proposal = file.into_proposal();
    if let Some(proposal_type) = args.proposal_type {
        proposal.proposal_type = proposal_type;
    }

    info!(
        "Encoding {:?} ({} commands, {})",
        proposal.meta.title,
        proposal.len(),
        proposal.proposal_type
    );

    let rendered = display_proposal(&proposal).context("encoding commands")?;
    println!("{}", rendered);

    if args.display_propose_data.unwrap_or_default() {
        println!(
            "Encoded propose data = {}",
            encode_propose_data(&proposal).context("encoding propose call")?
        );
    }

    Ok(())
}
