//! Core components for the SASL mechanism registry.
//!
//! This module contains the mechanism catalog, the capability traits,
//! the registry itself, configuration, and error handling.

// Mechanism names and properties
pub mod mechanism;

// Capability traits implemented by mechanism providers
pub mod traits;

// Factory registry
pub mod registry;

// Provider configuration
pub mod config;

// Constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::config::ProviderConfig;
pub use self::constants::VERSION;
pub use self::error::{AuthError, Error, Result};
pub use self::mechanism::{Capability, Family, HashStrength, Mechanism, MechanismProperties};
pub use self::registry::{Binding, FactoryRef, Registry, RegistryBuilder};
