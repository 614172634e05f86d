//! Constant values for gpgext
//!
//! Wire constants for the GnuPG extensions and the OpenPGP hash-algorithm
//! id table that the S2K dispatcher resolves against.

pub mod traditional;
pub mod utils;

pub use utils::hash::HashAlgorithm;
