/*!
Provider configuration.

Selects which mechanisms, and which capabilities of each mechanism, a
deployment registers. The default reproduces the stock provider layout.
*/

use crate::core::constants::PROVIDER_NAME;
use crate::core::error::Result;
use crate::core::mechanism::{Capability, Family, Mechanism};

/// Mechanism selection for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Provider name
    pub name: String,
    /// Mechanisms to register, in any order
    pub mechanisms: Vec<Mechanism>,
    /// Register a client factory for ANONYMOUS
    pub anonymous_client: bool,
    /// Register a client factory for PLAIN
    pub plain_client: bool,
    /// Register credential codecs for the SCRAM hash strengths
    pub credential_codecs: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: PROVIDER_NAME.to_string(),
            mechanisms: Mechanism::ALL.to_vec(),
            anonymous_client: true,
            plain_client: false,
            credential_codecs: true,
        }
    }
}

impl ProviderConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a specific mechanism list
    pub fn with_mechanisms(mechanisms: impl IntoIterator<Item = Mechanism>) -> Self {
        Self {
            mechanisms: mechanisms.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Only the SCRAM family
    pub fn scram_only() -> Self {
        Self::with_mechanisms(
            Mechanism::ALL
                .into_iter()
                .filter(|m| m.properties().family == Family::Scram),
        )
    }

    /// Full catalog with a PLAIN client as well
    pub fn symmetric() -> Self {
        Self {
            plain_client: true,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return crate::config_err!("provider name must not be empty");
        }
        if self.mechanisms.is_empty() {
            return crate::config_err!("no mechanisms enabled");
        }
        for (i, mechanism) in self.mechanisms.iter().enumerate() {
            if self.mechanisms[..i].contains(mechanism) {
                return crate::config_err!("mechanism {} listed more than once", mechanism);
            }
        }
        Ok(())
    }

    pub fn is_enabled(&self, mechanism: Mechanism) -> bool {
        self.mechanisms.contains(&mechanism)
    }

    /// `(capability, mechanism)` pairs this configuration registers.
    ///
    /// Order: ANONYMOUS client and server, PLAIN server (and client when
    /// enabled), JBOSS-LOCAL-USER server and client, SCRAM clients, SCRAM
    /// servers, SCRAM credential codecs.
    pub fn layout(&self) -> Vec<(Capability, Mechanism)> {
        let mut layout = Vec::new();
        let mut add = |capability: Capability, mechanism: Mechanism| {
            if self.is_enabled(mechanism) {
                layout.push((capability, mechanism));
            }
        };

        if self.anonymous_client {
            add(Capability::ClientFactory, Mechanism::Anonymous);
        }
        add(Capability::ServerFactory, Mechanism::Anonymous);
        add(Capability::ServerFactory, Mechanism::Plain);
        if self.plain_client {
            add(Capability::ClientFactory, Mechanism::Plain);
        }
        add(Capability::ServerFactory, Mechanism::JbossLocalUser);
        add(Capability::ClientFactory, Mechanism::JbossLocalUser);

        let scram: Vec<Mechanism> = Mechanism::ALL
            .into_iter()
            .filter(|m| m.properties().family == Family::Scram)
            .collect();
        for mechanism in &scram {
            add(Capability::ClientFactory, *mechanism);
        }
        for mechanism in &scram {
            add(Capability::ServerFactory, *mechanism);
        }
        if self.credential_codecs {
            for mechanism in scram
                .iter()
                .filter(|m| m.properties().supports(Capability::CredentialCodec))
            {
                add(Capability::CredentialCodec, *mechanism);
            }
        }

        layout
    }
}
