//! Public-key algorithms contributed by the GnuPG extensions

pub mod eddsa;

// Re-export EdDSA types
pub use eddsa::{Ed25519, Ed25519Signature, GnuPgAlgorithm, EDDSA};
