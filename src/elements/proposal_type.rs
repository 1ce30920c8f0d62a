use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Category of a governance proposal. The discriminant is the `uint8` tag the
/// governor contract expects.
#[derive(Debug, Default, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawProposalType", into = "u8")]
pub enum ProposalType {
    #[default]
    Normal = 0,
    FastTrack = 1,
    Critical = 2,
}

#[derive(Debug, Clone, Copy)]
pub struct InvalidProposalTypeError;

impl fmt::Display for InvalidProposalTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid proposal type, expected one of normal, fast-track, critical or 0-2"
        )
    }
}

impl std::error::Error for InvalidProposalTypeError {}

impl FromStr for ProposalType {
    type Err = InvalidProposalTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "normal" | "0" => Ok(Self::Normal),
            "fast-track" | "fasttrack" | "1" => Ok(Self::FastTrack),
            "critical" | "2" => Ok(Self::Critical),
            _ => Err(InvalidProposalTypeError),
        }
    }
}

impl TryFrom<u8> for ProposalType {
    type Error = InvalidProposalTypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::FastTrack),
            2 => Ok(Self::Critical),
            _ => Err(InvalidProposalTypeError),
        }
    }
}

impl From<ProposalType> for u8 {
    fn from(value: ProposalType) -> Self {
        value as u8
    }
}

impl fmt::Display for ProposalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::FastTrack => write!(f, "fast-track"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Proposal files may spell the type either as its tag or by name.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawProposalType {
    Tag(u8),
    Name(String),
}

impl TryFrom<RawProposalType> for ProposalType {
    type Error = InvalidProposalTypeError;

    fn try_from(value: RawProposalType) -> Result<Self, Self::Error> {
        match value {
            RawProposalType::Tag(tag) => Self::try_from(tag),
            RawProposalType::Name(name) => name.parse(),
        }
    }
}
