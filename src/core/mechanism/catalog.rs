/*!
Mechanism catalog.

The authoritative, immutable list of mechanism names. Lookups are
case-sensitive and go through a static index built on first use.
*/

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::core::error::{Error, Result};
use crate::core::mechanism::types::{Mechanism, MechanismProperties};

static NAME_INDEX: Lazy<HashMap<&'static str, Mechanism>> = Lazy::new(|| {
    Mechanism::ALL
        .iter()
        .map(|mechanism| (mechanism.as_str(), *mechanism))
        .collect()
});

/// Resolve a wire name to a catalog entry
pub fn lookup_name(name: &str) -> Result<Mechanism> {
    NAME_INDEX
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownMechanism(name.to_string()))
}

/// Get the static properties of a mechanism by name
pub fn properties_of(name: &str) -> Result<MechanismProperties> {
    lookup_name(name).map(|mechanism| mechanism.properties())
}

/// Every mechanism name in declaration order.
///
/// The iterator is `Clone`, so it can be restarted.
pub fn all_names() -> impl Iterator<Item = &'static str> + Clone {
    Mechanism::ALL.into_iter().map(|mechanism| mechanism.as_str())
}

/// Whether `name` belongs to the catalog
pub fn contains(name: &str) -> bool {
    NAME_INDEX.contains_key(name)
}
