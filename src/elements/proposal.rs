use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
    sol_types::SolCall,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{command::Command, proposal_type::ProposalType};
use crate::{
    error::{EncodeError, Result},
    utils::{
        calldata::{get_calldatas, resolve_types},
        signature::canonical_signature,
    },
};

sol! {
    function propose(
        address[] targets,
        uint256[] values,
        string[] signatures,
        bytes[] calldatas,
        string description,
        uint8 proposalType
    ) external returns (uint256);
}

/// Human readable part of a proposal. Serialized as JSON into the
/// `description` argument of `propose`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalMeta {
    pub version: String,
    pub title: String,
    pub description: String,
    pub for_description: String,
    pub against_description: String,
    pub abstain_description: String,
}

/// A batch of commands flattened into parallel lists. Index `i` of every list
/// describes the same command, and the order is the execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub signatures: Vec<String>,
    pub targets: Vec<Address>,
    pub params: Vec<Vec<Value>>,
    pub values: Vec<U256>,
    pub meta: ProposalMeta,
    #[serde(rename = "type")]
    pub proposal_type: ProposalType,
}

/// Projects `commands` into a [`Proposal`]. An unset command value becomes zero.
///
/// Nothing is validated or encoded here; see [`Proposal::calldatas`].
pub fn make_proposal(commands: &[Command], meta: ProposalMeta, proposal_type: ProposalType) -> Proposal {
    Proposal {
        signatures: commands.iter().map(|cmd| cmd.signature.clone()).collect(),
        targets: commands.iter().map(|cmd| cmd.target).collect(),
        params: commands.iter().map(|cmd| cmd.params.clone()).collect(),
        values: commands.iter().map(|cmd| cmd.value.unwrap_or_default()).collect(),
        meta,
        proposal_type,
    }
}

impl Proposal {
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    pub fn calldatas(&self) -> Result<Vec<Bytes>> {
        get_calldatas(&self.signatures, &self.params)
    }

    /// Signatures as the governor will hash them: comments and whitespace
    /// removed, type aliases such as `uint` expanded.
    pub fn canonical_signatures(&self) -> Result<Vec<String>> {
        self.signatures
            .iter()
            .enumerate()
            .map(|(index, signature)| {
                canonical_signature(signature, &resolve_types(index, signature)?)
            })
            .collect()
    }

    pub fn description(&self) -> Result<String> {
        serde_json::to_string(&self.meta).map_err(|e| EncodeError::Description(e.to_string()))
    }

    /// Calldata of the governor `propose` call submitting this proposal.
    pub fn propose_calldata(&self) -> Result<Bytes> {
        let call = proposeCall {
            targets: self.targets.clone(),
            values: self.values.clone(),
            signatures: self.canonical_signatures()?,
            calldatas: self.calldatas()?,
            description: self.description()?,
            proposalType: self.proposal_type.into(),
        };

        Ok(call.abi_encode().into())
    }
}
