/*!
Provider builder.

This module provides a builder pattern for creating providers with a
specific mechanism selection.
*/

use crate::core::config::ProviderConfig;
use crate::core::error::Result;
use crate::core::mechanism::Mechanism;
use crate::provider::source::FactorySource;
use crate::provider::SaslProvider;

/// Builder for SASL providers
#[derive(Debug, Clone, Default)]
pub struct ProviderBuilder {
    config: ProviderConfig,
}

impl ProviderBuilder {
    /// Create a new builder with the default layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the provider name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Restrict the provider to these mechanisms
    pub fn with_mechanisms(mut self, mechanisms: impl IntoIterator<Item = Mechanism>) -> Self {
        self.config.mechanisms = mechanisms.into_iter().collect();
        self
    }

    /// Register a PLAIN client factory
    pub fn plain_client(mut self, enabled: bool) -> Self {
        self.config.plain_client = enabled;
        self
    }

    /// Register an ANONYMOUS client factory
    pub fn anonymous_client(mut self, enabled: bool) -> Self {
        self.config.anonymous_client = enabled;
        self
    }

    /// Register SCRAM credential codecs
    pub fn credential_codecs(mut self, enabled: bool) -> Self {
        self.config.credential_codecs = enabled;
        self
    }

    /// Use only the SCRAM family
    pub fn scram_only(mut self) -> Self {
        let name = std::mem::take(&mut self.config.name);
        self.config = ProviderConfig {
            name,
            ..ProviderConfig::scram_only()
        };
        self
    }

    /// Get the configuration built so far
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build the provider, resolving factories from `source`
    pub fn build(self, source: &dyn FactorySource) -> Result<SaslProvider> {
        SaslProvider::new(self.config, source)
    }
}

/// Create a provider with default settings
pub fn provider(source: &dyn FactorySource) -> Result<SaslProvider> {
    ProviderBuilder::new().build(source)
}
