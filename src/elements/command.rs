use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::parse_checked_address;

/// A single governance action: call `signature` on `target` with `params`,
/// attaching `value` wei when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(deserialize_with = "deserialize_target")]
    pub target: Address,
    pub signature: String,
    #[serde(default)]
    pub params: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

impl Command {
    pub fn new(target: Address, signature: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            target,
            signature: signature.into(),
            params,
            value: None,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }
}

fn deserialize_target<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_checked_address(&raw).map_err(serde::de::Error::custom)
}
