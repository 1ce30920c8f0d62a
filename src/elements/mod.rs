use std::{fs, path::Path};

use anyhow::{bail, Context};
use command::Command;
use log::debug;
use proposal::{make_proposal, Proposal, ProposalMeta};
use proposal_type::ProposalType;
use serde::Deserialize;

pub mod command;
pub mod proposal;
pub mod proposal_type;

/// A proposal as written by hand: metadata, type and the ordered commands.
#[derive(Debug, Deserialize)]
pub struct ProposalFile {
    #[serde(default)]
    pub meta: ProposalMeta,
    #[serde(rename = "type", default)]
    pub proposal_type: ProposalType,
    pub commands: Vec<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            other => bail!("unsupported proposal file extension {other:?}"),
        }
    }
}

impl ProposalFile {
    pub fn parse(content: &str, format: FileFormat) -> anyhow::Result<Self> {
        let file = match format {
            FileFormat::Yaml => serde_yaml::from_str(content).context("parsing yaml proposal")?,
            FileFormat::Toml => toml::from_str(content).context("parsing toml proposal")?,
            FileFormat::Json => serde_json::from_str(content).context("parsing json proposal")?,
        };
        Ok(file)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading proposal file {}", path.display()))?;

        let file = Self::parse(&content, format)?;
        debug!(
            "Loaded {} commands from {} ({format:?})",
            file.commands.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn into_proposal(self) -> Proposal {
        make_proposal(&self.commands, self.meta, self.proposal_type)
    }
}
