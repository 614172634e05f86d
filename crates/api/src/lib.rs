//! Public API traits and types for the gpgext library
//!
//! This crate is the boundary between the GnuPG extensions and the OpenPGP
//! packet library that hosts them: the error taxonomy, the variable-length
//! wire fields, key containers and the capability traits the host dispatches
//! through by algorithm id or S2K id.

pub mod encoding;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result};
pub use types::*;

pub use encoding::{BitString, Field, Mpi};

pub use traits::{
    CardAgent,
    PublicKeyAlgorithm,
    RandomSource,
    S2k,
    Signature,
    SignatureDerive,
};

pub use gpgext_params::HashAlgorithm;
