//! GnuPG public-key algorithm extensions
//!
//! This crate implements the EdDSA (Ed25519) public-key algorithm as GnuPG
//! writes it into OpenPGP packets, plus the id-to-algorithm table the host
//! packet library dispatches through.

pub mod table;
pub mod traditional;

pub use table::AlgorithmTable;
pub use traditional::eddsa::{
    Ed25519, Ed25519Signature, GnuPgAlgorithm, PointFormat, EDDSA,
};
