/*!
Mechanism catalog and capability taxonomy.
*/

pub mod catalog;
pub mod types;

pub use catalog::{all_names, properties_of};
pub use types::{Capability, Family, HashStrength, Mechanism, MechanismProperties};
