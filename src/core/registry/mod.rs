/*!
Registry of mechanism factories.

Bindings are collected by a [`RegistryBuilder`], validated against the
mechanism catalog, and frozen into a [`Registry`].
*/

pub mod binding;
pub mod builder;
pub mod manager;

#[cfg(test)]
pub(crate) mod testing;

pub use binding::{Binding, FactoryRef};
pub use builder::RegistryBuilder;
pub use manager::Registry;
