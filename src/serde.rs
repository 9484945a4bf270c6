/*!
Serialization support for provider configuration.

This module provides serialization and deserialization support for the
provider configuration using Serde. It's only built when the
`serde-support` feature is enabled. Mechanism names travel as their wire
strings and are checked against the catalog on conversion.
*/

use serde::{Deserialize, Serialize};

use crate::core::config::ProviderConfig;
use crate::core::error::{Error, Result};
use crate::core::mechanism::Mechanism;

/// Serializable version of ProviderConfig
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerdeProviderConfig {
    pub name: String,
    pub mechanisms: Vec<String>,
    pub anonymous_client: bool,
    pub plain_client: bool,
    pub credential_codecs: bool,
}

impl Default for SerdeProviderConfig {
    fn default() -> Self {
        ProviderConfig::default().into()
    }
}

impl From<ProviderConfig> for SerdeProviderConfig {
    fn from(config: ProviderConfig) -> Self {
        Self {
            name: config.name,
            mechanisms: config
                .mechanisms
                .iter()
                .map(|m| m.as_str().to_string())
                .collect(),
            anonymous_client: config.anonymous_client,
            plain_client: config.plain_client,
            credential_codecs: config.credential_codecs,
        }
    }
}

impl TryFrom<SerdeProviderConfig> for ProviderConfig {
    type Error = Error;

    fn try_from(config: SerdeProviderConfig) -> Result<Self> {
        let mechanisms = config
            .mechanisms
            .iter()
            .map(|name| name.parse::<Mechanism>())
            .collect::<Result<Vec<_>>>()?;
        let config = ProviderConfig {
            name: config.name,
            mechanisms,
            anonymous_client: config.anonymous_client,
            plain_client: config.plain_client,
            credential_codecs: config.credential_codecs,
        };
        config.validate()?;
        Ok(config)
    }
}
