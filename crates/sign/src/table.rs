//! Algorithm id to capability table
//!
//! Built once at startup and passed by reference to every parse site. Each
//! table is independent, so tests can build their own.

use std::collections::BTreeMap;

use gpgext_api::{Error, PublicKeyAlgorithm, Result};

use crate::traditional::eddsa::EDDSA;

/// Maps OpenPGP public-key algorithm ids to their implementation
#[derive(Debug, Default)]
pub struct AlgorithmTable {
    algorithms: BTreeMap<u8, &'static dyn PublicKeyAlgorithm>,
}

impl AlgorithmTable {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding every algorithm this crate provides
    pub fn with_gnupg_extensions() -> Self {
        let mut table = Self::new();
        table.algorithms.insert(EDDSA.id(), &EDDSA);
        table
    }

    /// Add an algorithm under its own id. An id may only be claimed once.
    pub fn register(&mut self, algorithm: &'static dyn PublicKeyAlgorithm) -> Result<()> {
        let id = algorithm.id();
        if self.algorithms.contains_key(&id) {
            return Err(Error::unsupported(
                "algorithm table",
                format!("public key algorithm {} is already registered", id),
            ));
        }
        tracing::debug!(id, name = algorithm.name(), "registered public key algorithm");
        self.algorithms.insert(id, algorithm);
        Ok(())
    }

    pub fn get(&self, id: u8) -> Option<&'static dyn PublicKeyAlgorithm> {
        self.algorithms.get(&id).copied()
    }

    /// Like [`AlgorithmTable::get`] but unknown ids are an error
    pub fn require(&self, id: u8) -> Result<&'static dyn PublicKeyAlgorithm> {
        self.get(id).ok_or_else(|| {
            Error::unsupported("public key algorithm", format!("unknown algorithm {}", id))
        })
    }

    /// Registered ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.algorithms.keys().copied()
    }
}
