/*!
Factory sources and registry bootstrap.

A [`FactorySource`] says which implementations are linked into this
deployment; a [`ProviderConfig`] says which of them to register.
*/

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::config::ProviderConfig;
use crate::core::error::Result;
use crate::core::mechanism::{Capability, Family, Mechanism};
use crate::core::registry::{Binding, Registry, RegistryBuilder};
use crate::core::traits::{CredentialCodec, SaslClientFactory, SaslServerFactory};

/// Where mechanism implementations come from.
///
/// Returning `None` means the deployment does not support that pair.
pub trait FactorySource {
    fn client_factory(&self, mechanism: Mechanism) -> Option<Arc<dyn SaslClientFactory>>;

    fn server_factory(&self, mechanism: Mechanism) -> Option<Arc<dyn SaslServerFactory>>;

    fn credential_codec(&self, mechanism: Mechanism) -> Option<Arc<dyn CredentialCodec>>;
}

/// Map-backed factory source
#[derive(Default, Clone)]
pub struct FactoryTable {
    clients: HashMap<Mechanism, Arc<dyn SaslClientFactory>>,
    servers: HashMap<Mechanism, Arc<dyn SaslServerFactory>>,
    codecs: HashMap<Mechanism, Arc<dyn CredentialCodec>>,
}

impl FactoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, mechanism: Mechanism, factory: Arc<dyn SaslClientFactory>) -> Self {
        self.clients.insert(mechanism, factory);
        self
    }

    pub fn with_server(mut self, mechanism: Mechanism, factory: Arc<dyn SaslServerFactory>) -> Self {
        self.servers.insert(mechanism, factory);
        self
    }

    pub fn with_codec(mut self, mechanism: Mechanism, codec: Arc<dyn CredentialCodec>) -> Self {
        self.codecs.insert(mechanism, codec);
        self
    }

    /// Use one client factory for every SCRAM mechanism
    pub fn with_scram_client(mut self, factory: Arc<dyn SaslClientFactory>) -> Self {
        for mechanism in scram_mechanisms() {
            self.clients.insert(mechanism, factory.clone());
        }
        self
    }

    /// Use one server factory for every SCRAM mechanism
    pub fn with_scram_server(mut self, factory: Arc<dyn SaslServerFactory>) -> Self {
        for mechanism in scram_mechanisms() {
            self.servers.insert(mechanism, factory.clone());
        }
        self
    }

    /// Use one codec for every SCRAM hash strength
    pub fn with_scram_codec(mut self, codec: Arc<dyn CredentialCodec>) -> Self {
        for mechanism in scram_mechanisms().filter(|m| !m.is_plus()) {
            self.codecs.insert(mechanism, codec.clone());
        }
        self
    }
}

impl FactorySource for FactoryTable {
    fn client_factory(&self, mechanism: Mechanism) -> Option<Arc<dyn SaslClientFactory>> {
        self.clients.get(&mechanism).cloned()
    }

    fn server_factory(&self, mechanism: Mechanism) -> Option<Arc<dyn SaslServerFactory>> {
        self.servers.get(&mechanism).cloned()
    }

    fn credential_codec(&self, mechanism: Mechanism) -> Option<Arc<dyn CredentialCodec>> {
        self.codecs.get(&mechanism).cloned()
    }
}

fn scram_mechanisms() -> impl Iterator<Item = Mechanism> {
    Mechanism::ALL
        .into_iter()
        .filter(|m| m.properties().family == Family::Scram)
}

/// Build a registry holding every pair of `config`'s layout that `source` supports
pub fn bootstrap(config: &ProviderConfig, source: &dyn FactorySource) -> Result<Registry> {
    config.validate()?;

    let mut builder = RegistryBuilder::new();
    for (capability, mechanism) in config.layout() {
        let binding = match capability {
            Capability::ClientFactory => source
                .client_factory(mechanism)
                .map(|f| Binding::client(mechanism, f)),
            Capability::ServerFactory => source
                .server_factory(mechanism)
                .map(|f| Binding::server(mechanism, f)),
            Capability::CredentialCodec => source
                .credential_codec(mechanism)
                .map(|c| Binding::codec(mechanism, c)),
        };
        match binding {
            Some(binding) => builder.push(binding),
            None => log::debug!("No {} available for {}, skipping", capability, mechanism),
        }
    }

    log::debug!("Provider {} bootstrapping {} bindings", config.name, builder.len());
    builder.build()
}
