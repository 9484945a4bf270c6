/*!
Registry builder.

The builder is the registry's `Building` state: it only accumulates
bindings and cannot be queried. [`RegistryBuilder::build`] consumes it and
either yields a ready [`Registry`] or an error, never both.
*/

use std::sync::Arc;

use crate::core::error::Result;
use crate::core::mechanism::Mechanism;
use crate::core::registry::binding::Binding;
use crate::core::registry::manager::Registry;
use crate::core::traits::{CredentialCodec, SaslClientFactory, SaslServerFactory};

/// Accumulates bindings for a registry
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    bindings: Vec<Binding>,
}

impl RegistryBuilder {
    /// Create a new builder with no bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding
    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Bind a client factory
    pub fn with_client(self, mechanism: Mechanism, factory: Arc<dyn SaslClientFactory>) -> Self {
        self.bind(Binding::client(mechanism, factory))
    }

    /// Bind a server factory
    pub fn with_server(self, mechanism: Mechanism, factory: Arc<dyn SaslServerFactory>) -> Self {
        self.bind(Binding::server(mechanism, factory))
    }

    /// Bind a credential codec
    pub fn with_codec(self, mechanism: Mechanism, codec: Arc<dyn CredentialCodec>) -> Self {
        self.bind(Binding::codec(mechanism, codec))
    }

    /// Add a binding in place
    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Number of bindings collected so far
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no bindings have been collected
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Validate the bindings and produce the ready registry
    pub fn build(self) -> Result<Registry> {
        Registry::build(self.bindings)
    }
}

impl Extend<Binding> for RegistryBuilder {
    fn extend<T: IntoIterator<Item = Binding>>(&mut self, iter: T) {
        self.bindings.extend(iter);
    }
}

impl FromIterator<Binding> for RegistryBuilder {
    fn from_iter<T: IntoIterator<Item = Binding>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}
