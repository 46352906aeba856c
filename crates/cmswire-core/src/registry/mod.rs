//! Polymorphic registry: the closed discriminator ↔ type table for one
//! component union.
//!
//! Registries are built once and never change afterwards. Derived unions
//! build theirs lazily from the variant list; there is no late
//! registration path.


use crate::{
    error::ErrorClass,
    model::{ContentModel, UnionModel},
    traits::Content,
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;
use tracing::debug;

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("{contract}: discriminator '{discriminator}' registered more than once")]
    Duplicate {
        contract: &'static str,
        discriminator: &'static str,
    },

    #[error("{contract}: type '{path}' registered more than once")]
    ConflictingType {
        contract: &'static str,
        path: &'static str,
    },

    #[error("{contract}: type '{path}' is not a component")]
    NotComponent {
        contract: &'static str,
        path: &'static str,
    },

    #[error("{contract}: type '{path}' registered with an empty discriminator")]
    EmptyDiscriminator {
        contract: &'static str,
        path: &'static str,
    },

    #[error("{contract}: discriminator '{discriminator}' is not recognized")]
    NotRecognized {
        contract: &'static str,
        discriminator: String,
    },

    #[error("{contract}: type '{path}' is not registered")]
    Unregistered {
        contract: &'static str,
        path: &'static str,
    },
}

impl RegistryError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::NotRecognized { .. } => ErrorClass::UnknownDiscriminator,
            _ => ErrorClass::Configuration,
        }
    }
}

///
/// Registry
///
/// Bidirectional map between discriminators and component models for one
/// contract (usually a union type).
///

#[derive(Debug)]
pub struct Registry {
    contract: &'static str,
    by_discriminator: BTreeMap<&'static str, &'static ContentModel>,
    by_path: BTreeMap<&'static str, &'static str>,
}

impl Registry {
    #[must_use]
    pub const fn builder(contract: &'static str) -> RegistryBuilder {
        RegistryBuilder {
            contract,
            entries: Vec::new(),
        }
    }

    /// Build the registry of a derived union, keyed by each variant's own
    /// discriminator.
    pub fn from_union(union: &'static UnionModel) -> Result<Self, RegistryError> {
        union
            .models()
            .try_fold(Self::builder(union.path), RegistryBuilder::register_model)?
            .build()
    }

    #[must_use]
    pub const fn contract(&self) -> &'static str {
        self.contract
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_discriminator.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_discriminator.is_empty()
    }

    /// Registered `(discriminator, model)` pairs, ordered by discriminator.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static ContentModel)> + '_ {
        self.by_discriminator.iter().map(|(d, m)| (*d, *m))
    }

    /// Model registered under `discriminator`.
    pub fn resolve(&self, discriminator: &str) -> Result<&'static ContentModel, RegistryError> {
        self.by_discriminator
            .get(discriminator)
            .copied()
            .ok_or_else(|| RegistryError::NotRecognized {
                contract: self.contract,
                discriminator: discriminator.to_string(),
            })
    }

    /// Discriminator registered for `model`.
    pub fn discriminator_for(&self, model: &ContentModel) -> Result<&'static str, RegistryError> {
        self.by_path
            .get(model.path)
            .copied()
            .ok_or(RegistryError::Unregistered {
                contract: self.contract,
                path: model.path,
            })
    }

    #[must_use]
    pub fn contains(&self, discriminator: &str) -> bool {
        self.by_discriminator.contains_key(discriminator)
    }
}

///
/// RegistryBuilder
///

#[derive(Debug)]
pub struct RegistryBuilder {
    contract: &'static str,
    entries: Vec<(&'static str, &'static ContentModel)>,
}

impl RegistryBuilder {
    /// Register `model` under an explicit discriminator.
    #[must_use]
    pub fn register(mut self, discriminator: &'static str, model: &'static ContentModel) -> Self {
        self.entries.push((discriminator, model));
        self
    }

    /// Register a component type under its declared discriminator.
    pub fn register_component<T: Content>(self) -> Result<Self, RegistryError> {
        self.register_model(T::model())
    }

    fn register_model(self, model: &'static ContentModel) -> Result<Self, RegistryError> {
        let discriminator = model.discriminator().ok_or(RegistryError::NotComponent {
            contract: self.contract,
            path: model.path,
        })?;

        Ok(self.register(discriminator, model))
    }

    /// Validate the entries and freeze them.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let contract = self.contract;
        let mut by_discriminator = BTreeMap::new();
        let mut by_path = BTreeMap::new();

        for (discriminator, model) in self.entries {
            if discriminator.trim().is_empty() {
                return Err(RegistryError::EmptyDiscriminator {
                    contract,
                    path: model.path,
                });
            }
            if by_discriminator.insert(discriminator, model).is_some() {
                return Err(RegistryError::Duplicate {
                    contract,
                    discriminator,
                });
            }
            if by_path.insert(model.path, discriminator).is_some() {
                return Err(RegistryError::ConflictingType {
                    contract,
                    path: model.path,
                });
            }
        }

        debug!(contract, components = by_discriminator.len(), "component registry built");

        Ok(Registry {
            contract,
            by_discriminator,
            by_path,
        })
    }
}
