//! Capability traits the host library dispatches through

pub mod card;
pub mod public_key;
pub mod s2k;
pub mod signature;

pub use card::CardAgent;
pub use public_key::{PublicKeyAlgorithm, RandomSource};
pub use s2k::S2k;
pub use signature::{Signature, SignatureDerive};
