/*!
Registry of mechanism factories.

A `Registry` only exists in its ready state: it is produced complete by
[`Registry::build`] and never mutated afterwards, so any number of threads
may query it without locking.
*/

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::core::error::{Error, Result};
use crate::core::mechanism::{catalog, Capability, Mechanism};
use crate::core::registry::binding::{Binding, FactoryRef};
use crate::core::traits::{
    ClientParams, CredentialCodec, SaslClient, SaslClientFactory, SaslServer, SaslServerFactory,
    ServerParams,
};

/// Immutable mapping from `(capability, mechanism)` to a factory
#[derive(Debug)]
pub struct Registry {
    entries: HashMap<(Capability, Mechanism), FactoryRef>,
    supported: HashMap<Capability, BTreeSet<Mechanism>>,
}

impl Registry {
    /// Build a registry from a list of bindings.
    ///
    /// Fails without producing a registry if any binding names a mechanism
    /// outside the catalog, declares a capability its factory does not
    /// provide, binds a credential codec to anything but an unsuffixed SCRAM
    /// name, or repeats a `(capability, mechanism)` pair.
    pub fn build<I>(bindings: I) -> Result<Registry>
    where
        I: IntoIterator<Item = Binding>,
    {
        let mut entries: HashMap<(Capability, Mechanism), FactoryRef> = HashMap::new();
        let mut supported: HashMap<Capability, BTreeSet<Mechanism>> = HashMap::new();

        for binding in bindings {
            let (capability, name, factory) = binding.into_parts();
            let mechanism = catalog::lookup_name(&name)?;

            let actual = factory.capability();
            if actual != capability {
                return Err(Error::CapabilityMismatch {
                    expected: capability,
                    actual,
                    implementation: factory.implementation().to_string(),
                });
            }

            if !mechanism.properties().supports(capability) {
                return Err(Error::NotApplicable {
                    capability,
                    mechanism,
                });
            }

            match entries.entry((capability, mechanism)) {
                Entry::Occupied(existing) => {
                    return Err(Error::DuplicateBinding {
                        capability,
                        mechanism,
                        first: existing.get().implementation().to_string(),
                        second: factory.implementation().to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    log::debug!(
                        "Registering {} {} -> {}",
                        capability,
                        mechanism,
                        factory.implementation()
                    );
                    slot.insert(factory);
                    supported.entry(capability).or_default().insert(mechanism);
                }
            }
        }

        log::info!("Mechanism registry ready with {} bindings", entries.len());
        Ok(Registry { entries, supported })
    }

    /// Registry with no bindings
    pub fn empty() -> Registry {
        Registry {
            entries: HashMap::new(),
            supported: HashMap::new(),
        }
    }

    /// Factory bound to `(capability, mechanism)`
    pub fn lookup(&self, capability: Capability, mechanism: Mechanism) -> Result<&FactoryRef> {
        self.entries
            .get(&(capability, mechanism))
            .ok_or_else(|| Error::NoSuchMechanism {
                capability,
                mechanism: mechanism.to_string(),
            })
    }

    /// Factory bound to `(capability, name)`, for names received from a peer.
    ///
    /// A name outside the catalog is by definition not registered and
    /// reports `NoSuchMechanism` like any other unsupported name.
    pub fn lookup_name(&self, capability: Capability, name: &str) -> Result<&FactoryRef> {
        match catalog::lookup_name(name) {
            Ok(mechanism) => self.lookup(capability, mechanism),
            Err(_) => Err(Error::NoSuchMechanism {
                capability,
                mechanism: name.to_string(),
            }),
        }
    }

    /// Every mechanism registered for `capability`, in catalog order
    pub fn supported_mechanisms(&self, capability: Capability) -> BTreeSet<Mechanism> {
        self.supported.get(&capability).cloned().unwrap_or_default()
    }

    /// Wire names registered for `capability`, in catalog order
    pub fn supported_names(&self, capability: Capability) -> Vec<&'static str> {
        self.supported
            .get(&capability)
            .map(|set| set.iter().map(Mechanism::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether a factory is bound to `(capability, mechanism)`
    pub fn is_registered(&self, capability: Capability, mechanism: Mechanism) -> bool {
        self.entries.contains_key(&(capability, mechanism))
    }

    /// Whether a factory is bound to `(capability, name)`; false for names outside the catalog
    pub fn is_registered_name(&self, capability: Capability, name: &str) -> bool {
        catalog::lookup_name(name)
            .map(|mechanism| self.is_registered(capability, mechanism))
            .unwrap_or(false)
    }

    /// Mechanisms that may be offered for `capability` on the current transport.
    ///
    /// `-PLUS` mechanisms are left out unless channel binding is available.
    pub fn available(&self, capability: Capability, channel_binding: bool) -> Vec<Mechanism> {
        self.supported
            .get(&capability)
            .map(|set| {
                set.iter()
                    .copied()
                    .filter(|mechanism| channel_binding || !mechanism.is_plus())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the client factory for a mechanism
    pub fn client_factory(&self, mechanism: Mechanism) -> Result<Arc<dyn SaslClientFactory>> {
        let factory = self.lookup(Capability::ClientFactory, mechanism)?;
        factory
            .as_client()
            .cloned()
            .ok_or_else(|| Error::Internal(format!("client entry for {mechanism} holds {factory:?}")))
    }

    /// Get the server factory for a mechanism
    pub fn server_factory(&self, mechanism: Mechanism) -> Result<Arc<dyn SaslServerFactory>> {
        let factory = self.lookup(Capability::ServerFactory, mechanism)?;
        factory
            .as_server()
            .cloned()
            .ok_or_else(|| Error::Internal(format!("server entry for {mechanism} holds {factory:?}")))
    }

    /// Get the credential codec for a mechanism
    pub fn credential_codec(&self, mechanism: Mechanism) -> Result<Arc<dyn CredentialCodec>> {
        let factory = self.lookup(Capability::CredentialCodec, mechanism)?;
        factory
            .as_codec()
            .cloned()
            .ok_or_else(|| Error::Internal(format!("codec entry for {mechanism} holds {factory:?}")))
    }

    /// Create a client exchange, refusing `-PLUS` mechanisms without channel binding
    pub fn create_client(
        &self,
        mechanism: Mechanism,
        params: &ClientParams,
    ) -> Result<Box<dyn SaslClient>> {
        let factory = self.client_factory(mechanism)?;
        if mechanism.is_plus() && params.channel_binding.is_none() {
            return Err(Error::ChannelBindingRequired(mechanism));
        }
        factory.create_client(mechanism, params)
    }

    /// Create a server exchange, refusing `-PLUS` mechanisms without channel binding
    pub fn create_server(
        &self,
        mechanism: Mechanism,
        params: &ServerParams,
    ) -> Result<Box<dyn SaslServer>> {
        let factory = self.server_factory(mechanism)?;
        if mechanism.is_plus() && params.channel_binding.is_none() {
            return Err(Error::ChannelBindingRequired(mechanism));
        }
        factory.create_server(mechanism, params)
    }

    /// All bindings, ordered by capability then catalog order
    pub fn bindings(&self) -> impl Iterator<Item = (Capability, Mechanism, &FactoryRef)> + '_ {
        Capability::ALL.into_iter().flat_map(move |capability| {
            Mechanism::ALL.into_iter().filter_map(move |mechanism| {
                self.entries
                    .get(&(capability, mechanism))
                    .map(|factory| (capability, mechanism, factory))
            })
        })
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
