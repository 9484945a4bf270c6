/*!
# SASL Registry

A catalog of SASL mechanism names and a registry that resolves a
`(capability, mechanism)` pair to the factory implementing it.

## Overview

- A closed catalog of mechanisms: `ANONYMOUS`, `PLAIN`, `JBOSS-LOCAL-USER`
  and SCRAM at SHA-1, SHA-256, SHA-384 and SHA-512, each SCRAM variant with a
  channel-binding `-PLUS` form
- Three capabilities: client factory, server factory, credential codec
- An immutable registry, validated once at build time and safe to share
  across threads
- Atomic replacement of the published registry for runtime reloads
- A provider layer that bootstraps the stock mechanism layout from any
  factory source

The exchanges themselves are implemented elsewhere, behind the traits in
[`core::traits`].
*/

// Core registry components
pub mod core;

// Provider and bootstrap
pub mod provider;

// Serialization support (optional)
#[cfg(feature = "serde-support")]
pub mod serde;

pub use crate::core::error;
pub use crate::core::mechanism;
pub use crate::core::registry;

// Re-export commonly used types for convenience
pub use crate::core::config::ProviderConfig;
pub use crate::core::constants::{names, VERSION};
pub use crate::core::error::{AuthError, Error, Result};
pub use crate::core::mechanism::{
    all_names, properties_of, Capability, Family, HashStrength, Mechanism, MechanismProperties,
};
pub use crate::core::registry::{Binding, FactoryRef, Registry, RegistryBuilder};
pub use crate::core::traits::{
    ChannelBinding, ClientParams, CredentialCodec, SaslClient, SaslClientFactory, SaslServer,
    SaslServerFactory, ScramCredential, ServerParams,
};

// Re-export provider API
pub use provider::{
    bootstrap, provider, version_string, FactorySource, FactoryTable, ProviderBuilder,
    ProviderInfo, ProviderState, SaslProvider,
};
