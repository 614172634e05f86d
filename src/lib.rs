//! # gpgext
//!
//! The GnuPG extensions to the OpenPGP packet format, packaged as plug-ins
//! for a host packet library:
//!
//! - the EdDSA public-key algorithm (id 22) over Ed25519;
//! - the GNU S2K extension (type `0x65`) with its `gnu-dummy` and
//!   `gnu-divert-to-card` specifiers;
//! - the registry of smart-card agents divert-to-card keys are unlocked with.
//!
//! ## Features
//!
//! - `sign` (default): the EdDSA algorithm
//! - `s2k` (default): the GNU S2K extensions and card-agent registry
//! - `serde`: serde derives on public, non-secret types
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gpgext-api`]: error type, wire fields, key types and capability traits
//! - [`gpgext-params`]: algorithm ids, OIDs and wire constants
//! - [`gpgext-sign`]: EdDSA
//! - [`gpgext-s2k`]: GNU S2K extensions
//!
//! ## Example
//!
//! ```
//! use gpgext::prelude::*;
//!
//! let registries = Registries::with_gnupg_extensions();
//! assert_eq!(registries.algorithms.require(22).unwrap().name(), "EdDSA");
//!
//! // A secret-key packet whose secret part was stripped with
//! // `gpg --export-secret-subkeys`
//! let mut specifier: &[u8] = &[0x02, b'G', b'N', b'U', 0x01];
//! let s2k = registries.parse_s2k(0x65, &mut specifier).unwrap();
//! assert!(s2k.is_dummy());
//! ```

// Core re-exports (always available)
pub use gpgext_api as api;
pub use gpgext_internal as internal;
pub use gpgext_params as params;

pub use rand;
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use gpgext_sign as sign;

#[cfg(feature = "s2k")]
pub use gpgext_s2k as s2k;

#[cfg(feature = "s2k")]
use std::io::Read;

/// Every table the host dispatches through, built once at startup and
/// passed by reference to each parse site
#[derive(Debug, Default)]
pub struct Registries {
    #[cfg(feature = "sign")]
    pub algorithms: sign::AlgorithmTable,
    #[cfg(feature = "s2k")]
    pub s2k_parsers: s2k::S2kParserTable,
    #[cfg(feature = "s2k")]
    pub extensions: s2k::ExtensionTable,
    #[cfg(feature = "s2k")]
    pub agents: s2k::CardAgentRegistry,
}

impl Registries {
    /// Empty tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables holding every enabled extension, with no card agents yet
    pub fn with_gnupg_extensions() -> Self {
        Self {
            #[cfg(feature = "sign")]
            algorithms: sign::AlgorithmTable::with_gnupg_extensions(),
            #[cfg(feature = "s2k")]
            s2k_parsers: s2k::S2kParserTable::with_gnupg_extensions(),
            #[cfg(feature = "s2k")]
            extensions: s2k::ExtensionTable::with_gnupg_extensions(),
            #[cfg(feature = "s2k")]
            agents: s2k::CardAgentRegistry::new(),
        }
    }

    #[cfg(feature = "s2k")]
    pub fn parse_context(&self) -> s2k::ParseContext<'_> {
        s2k::ParseContext {
            extensions: &self.extensions,
            agents: &self.agents,
        }
    }

    /// Parse the specifier of S2K type `id` from `reader`
    #[cfg(feature = "s2k")]
    pub fn parse_s2k(&self, id: u8, reader: &mut dyn Read) -> api::Result<Box<dyn api::S2k>> {
        self.s2k_parsers.parse(id, reader, &self.parse_context())
    }
}

/// Common imports for gpgext users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{
        CardAgent,
        PublicKeyAlgorithm,
        S2k,
        Signature,
        SignatureDerive,
    };

    // Re-export wire and key types
    pub use crate::api::{
        BitString,
        Ed25519PublicKey,
        Ed25519SecretKey,
        Field,
        HashAlgorithm,
        Mpi,
        PrivateKey,
        PublicKey,
    };

    pub use crate::Registries;

    #[cfg(feature = "sign")]
    pub use crate::sign::{AlgorithmTable, Ed25519, GnuPgAlgorithm, EDDSA};

    #[cfg(feature = "s2k")]
    pub use crate::s2k::{
        CardAgentRegistry,
        ExtensionSpecifier,
        ExtensionTable,
        GnuExtension,
        S2kParserTable,
    };
}
