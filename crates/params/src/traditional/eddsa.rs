//! Constants for EdDSA over Ed25519 as used by GnuPG
//!
//! See draft-koch-eddsa-for-openpgp-04. The algorithm id has never been
//! formally assigned but is what GnuPG 2.1 writes.

/// OpenPGP public-key algorithm id for EdDSA
pub const EDDSA_ALGORITHM_ID: u8 = 22;

/// Curve OID for Ed25519 (1.3.6.1.4.1.11591.15.1), DER body without tag/length
pub const OID_ED25519: [u8; 9] = [0x2b, 0x06, 0x01, 0x04, 0x01, 0xda, 0x47, 0x0f, 0x01];

/// Size of an Ed25519 public key (compressed point) in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;

/// Size of an Ed25519 secret seed in bytes
pub const ED25519_SEED_SIZE: usize = 32;

/// Size of the expanded secret key: seed followed by the public point
pub const ED25519_EXPANDED_KEY_SIZE: usize = ED25519_SEED_SIZE + ED25519_PUBLIC_KEY_SIZE;

/// Size of an Ed25519 signature (R || S) in bytes
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Size of each signature component (R and S) in bytes
pub const ED25519_SIGNATURE_COMPONENT_SIZE: usize = 32;

/// Number of MPIs making up an EdDSA signature
pub const EDDSA_SIGNATURE_FIELDS: usize = 2;

/// Point-format prefix for the native (compressed) EdDSA point encoding
pub const POINT_FORMAT_NATIVE: u8 = 0x40;

/// Point-format prefix for an uncompressed point
pub const POINT_FORMAT_UNCOMPRESSED: u8 = 0x04;

/// Encoded point length: format prefix plus 32 point bytes
pub const ED25519_ENCODED_POINT_SIZE: usize = 1 + ED25519_PUBLIC_KEY_SIZE;
