/*!
SASL provider.

Ties a configuration and a factory source to a published registry, and
supports rebuilding that registry at runtime. Readers load the current
[`ProviderState`] without locking; a reload swaps the whole snapshot, so a
reader sees either the previous state or the new one, never a mix.
*/

pub mod builder;
pub mod source;

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::core::config::ProviderConfig;
use crate::core::constants::{PROVIDER_INFO_PREFIX, VERSION};
use crate::core::error::Result;
use crate::core::registry::Registry;

pub use builder::{provider, ProviderBuilder};
pub use source::{bootstrap, FactorySource, FactoryTable};

/// Get the version string of the provider
pub fn version_string() -> &'static str {
    VERSION
}

/// Identity of a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInfo {
    pub name: String,
    pub version: String,
    pub info: String,
}

impl ProviderInfo {
    /// Create the identity for a provider called `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version_string().to_string(),
            info: format!("{} {}", PROVIDER_INFO_PREFIX, version_string()),
        }
    }
}

/// Published snapshot: the registry together with the config it was built from
#[derive(Debug)]
pub struct ProviderState {
    pub info: ProviderInfo,
    pub config: ProviderConfig,
    pub registry: Arc<Registry>,
}

impl ProviderState {
    fn new(config: ProviderConfig, registry: Registry) -> Self {
        Self {
            info: ProviderInfo::new(config.name.clone()),
            config,
            registry: Arc::new(registry),
        }
    }
}

/// Provider owning the currently published registry
#[derive(Debug)]
pub struct SaslProvider {
    state: ArcSwap<ProviderState>,
}

impl SaslProvider {
    /// Bootstrap a provider from `config` and `source`
    pub fn new(config: ProviderConfig, source: &dyn FactorySource) -> Result<Self> {
        let registry = bootstrap(&config, source)?;
        Ok(Self {
            state: ArcSwap::from_pointee(ProviderState::new(config, registry)),
        })
    }

    /// Snapshot of the published state
    pub fn state(&self) -> Arc<ProviderState> {
        self.state.load_full()
    }

    /// Identity of the published state
    pub fn info(&self) -> ProviderInfo {
        self.state.load().info.clone()
    }

    /// Configuration the published registry was built from
    pub fn config(&self) -> ProviderConfig {
        self.state.load().config.clone()
    }

    /// Snapshot of the current registry
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.state.load().registry)
    }

    /// Rebuild and publish the registry, returning the state it replaced.
    ///
    /// On failure the previously published state stays in place. Readers are
    /// never blocked while the new registry is built.
    pub fn reload(
        &self,
        config: ProviderConfig,
        source: &dyn FactorySource,
    ) -> Result<Arc<ProviderState>> {
        match bootstrap(&config, source) {
            Ok(registry) => {
                let next = Arc::new(ProviderState::new(config, registry));
                let bindings = next.registry.len();
                let previous = self.state.swap(next);
                log::info!(
                    "Published mechanism registry ({} bindings, replaced {})",
                    bindings,
                    previous.registry.len()
                );
                Ok(previous)
            }
            Err(err) => {
                log::warn!(
                    "Registry reload for {} failed, keeping previous: {}",
                    config.name,
                    err
                );
                Err(err)
            }
        }
    }
}
