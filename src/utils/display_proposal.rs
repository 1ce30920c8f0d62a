use alloy::hex;
use colored::Colorize;

use super::compute_selector;
use crate::{elements::proposal::Proposal, error::Result};

pub fn encode_propose_data(proposal: &Proposal) -> Result<String> {
    Ok(hex::encode_prefixed(proposal.propose_calldata()?))
}

/// Renders every command of the proposal with its selector and encoded calldata.
pub fn display_proposal(proposal: &Proposal) -> Result<String> {
    let calldatas = proposal.calldatas()?;
    let signatures = proposal.canonical_signatures()?;

    let mut out = format!(
        "{} [{}] {} commands\n",
        proposal.meta.title.bold(),
        proposal.proposal_type,
        proposal.len()
    );

    for (index, (calldata, canonical)) in calldatas.iter().zip(&signatures).enumerate() {
        out.push_str(&format!(
            "#{index} {}\n",
            proposal.targets[index].to_string().cyan()
        ));
        if canonical.is_empty() {
            out.push_str("  signature: <none>\n");
        } else {
            out.push_str(&format!(
                "  signature: {} (0x{})\n",
                canonical.green(),
                compute_selector(canonical)
            ));
        }
        out.push_str(&format!("  value: {}\n", proposal.values[index]));
        out.push_str(&format!("  calldata: {}\n", hex::encode_prefixed(calldata)));
    }

    Ok(out)
}
