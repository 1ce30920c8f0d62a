//! Builds calldata and submission payloads for multi-step governance proposals.

pub mod elements;
pub mod error;
pub mod utils;

pub use elements::{
    command::Command,
    proposal::{make_proposal, Proposal, ProposalMeta},
    proposal_type::ProposalType,
    ProposalFile,
};
pub use error::EncodeError;
pub use utils::{calldata::get_calldatas, signature::parse_signature_types};
