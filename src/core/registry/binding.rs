/*!
Factory references and the bindings that feed a registry build.
*/

use std::fmt;
use std::sync::Arc;

use crate::core::mechanism::{Capability, Mechanism};
use crate::core::traits::{CredentialCodec, SaslClientFactory, SaslServerFactory};

/// Shared handle to a factory of one capability
#[derive(Clone)]
pub enum FactoryRef {
    Client(Arc<dyn SaslClientFactory>),
    Server(Arc<dyn SaslServerFactory>),
    Codec(Arc<dyn CredentialCodec>),
}

impl FactoryRef {
    /// Capability this factory fulfils
    pub fn capability(&self) -> Capability {
        match self {
            FactoryRef::Client(_) => Capability::ClientFactory,
            FactoryRef::Server(_) => Capability::ServerFactory,
            FactoryRef::Codec(_) => Capability::CredentialCodec,
        }
    }

    /// Implementation name reported by the factory
    pub fn implementation(&self) -> &str {
        match self {
            FactoryRef::Client(factory) => factory.implementation(),
            FactoryRef::Server(factory) => factory.implementation(),
            FactoryRef::Codec(codec) => codec.implementation(),
        }
    }

    /// Get the client factory, if this is one
    pub fn as_client(&self) -> Option<&Arc<dyn SaslClientFactory>> {
        match self {
            FactoryRef::Client(factory) => Some(factory),
            _ => None,
        }
    }

    /// Get the server factory, if this is one
    pub fn as_server(&self) -> Option<&Arc<dyn SaslServerFactory>> {
        match self {
            FactoryRef::Server(factory) => Some(factory),
            _ => None,
        }
    }

    /// Get the credential codec, if this is one
    pub fn as_codec(&self) -> Option<&Arc<dyn CredentialCodec>> {
        match self {
            FactoryRef::Codec(codec) => Some(codec),
            _ => None,
        }
    }

    /// Whether both handles point at the same factory instance
    pub fn same_factory(&self, other: &FactoryRef) -> bool {
        match (self, other) {
            (FactoryRef::Client(a), FactoryRef::Client(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (FactoryRef::Server(a), FactoryRef::Server(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (FactoryRef::Codec(a), FactoryRef::Codec(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Debug for FactoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(self.capability().name())
            .field(&self.implementation())
            .finish()
    }
}

impl From<Arc<dyn SaslClientFactory>> for FactoryRef {
    fn from(factory: Arc<dyn SaslClientFactory>) -> Self {
        FactoryRef::Client(factory)
    }
}

impl From<Arc<dyn SaslServerFactory>> for FactoryRef {
    fn from(factory: Arc<dyn SaslServerFactory>) -> Self {
        FactoryRef::Server(factory)
    }
}

impl From<Arc<dyn CredentialCodec>> for FactoryRef {
    fn from(codec: Arc<dyn CredentialCodec>) -> Self {
        FactoryRef::Codec(codec)
    }
}

/// One `(capability, mechanism name) -> factory` registration request.
///
/// The name stays a raw string until the registry is built, which is where
/// it is checked against the catalog.
#[derive(Debug, Clone)]
pub struct Binding {
    capability: Capability,
    mechanism: String,
    factory: FactoryRef,
}

impl Binding {
    /// Bind `factory` under a raw mechanism name
    pub fn new(capability: Capability, mechanism: impl Into<String>, factory: FactoryRef) -> Self {
        Self {
            capability,
            mechanism: mechanism.into(),
            factory,
        }
    }

    /// Bind a client factory
    pub fn client(mechanism: Mechanism, factory: Arc<dyn SaslClientFactory>) -> Self {
        Self::new(Capability::ClientFactory, mechanism.as_str(), FactoryRef::Client(factory))
    }

    /// Bind a server factory
    pub fn server(mechanism: Mechanism, factory: Arc<dyn SaslServerFactory>) -> Self {
        Self::new(Capability::ServerFactory, mechanism.as_str(), FactoryRef::Server(factory))
    }

    /// Bind a credential codec
    pub fn codec(mechanism: Mechanism, codec: Arc<dyn CredentialCodec>) -> Self {
        Self::new(Capability::CredentialCodec, mechanism.as_str(), FactoryRef::Codec(codec))
    }

    /// Get the declared capability
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Get the mechanism name as supplied
    pub fn mechanism(&self) -> &str {
        &self.mechanism
    }

    /// Get the bound factory
    pub fn factory(&self) -> &FactoryRef {
        &self.factory
    }

    pub(crate) fn into_parts(self) -> (Capability, String, FactoryRef) {
        (self.capability, self.mechanism, self.factory)
    }
}
