//! EdDSA (Edwards-curve Digital Signature Algorithm) for OpenPGP
//!
//! GnuPG's EdDSA public-key algorithm, id 22, following
//! draft-koch-eddsa-for-openpgp-04. Only the Ed25519 curve is defined.
//!
//! # Example
//!
//! ```
//! use gpgext_api::{HashAlgorithm, PrivateKey, PublicKey, PublicKeyAlgorithm, SignatureDerive};
//! use gpgext_sign::traditional::eddsa::{Ed25519, EDDSA};
//! use rand::rngs::OsRng;
//!
//! # fn main() -> gpgext_api::Result<()> {
//! let (public_key, secret_key) = Ed25519::derive_keypair(&[7u8; 32])?;
//! let public_key = PublicKey::from(public_key);
//! let secret_key = PrivateKey::from(secret_key);
//!
//! let message = b"Hello, EdDSA!";
//! let fields = EDDSA.sign(&mut OsRng, &secret_key, HashAlgorithm::Sha256, message)?;
//!
//! assert!(EDDSA.verify(&public_key, HashAlgorithm::Sha256, message, &fields).is_ok());
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod ed25519;
mod point;


pub use algorithm::{GnuPgAlgorithm, EDDSA};
pub use ed25519::{Ed25519, Ed25519Signature};
pub use point::{check_curve_oid, decode_point, ed25519_oid, encode_point, PointFormat};
