//! Key containers exchanged with the host packet library
//!
//! The host treats key material as opaque values tagged by algorithm. The
//! variants here are the shapes the extensions understand; anything else
//! arrives as `Other` and is rejected with an invalid-argument error.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::encoding::Field;
use crate::error::{validate, Result};
use gpgext_internal::constant_time::ct_eq;
use gpgext_params::traditional::eddsa::{
    ED25519_EXPANDED_KEY_SIZE, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
};

/// Ed25519 public key (32-byte compressed point)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ed25519PublicKey([u8; ED25519_PUBLIC_KEY_SIZE]);

impl Ed25519PublicKey {
    pub fn new(point: [u8; ED25519_PUBLIC_KEY_SIZE]) -> Self {
        Self(point)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Ed25519PublicKey::from_slice", slice.len(), ED25519_PUBLIC_KEY_SIZE)?;
        let mut point = [0u8; ED25519_PUBLIC_KEY_SIZE];
        point.copy_from_slice(slice);
        Ok(Self(point))
    }

    pub fn as_bytes(&self) -> &[u8; ED25519_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Ed25519PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey({})", hex::encode(self.0))
    }
}

/// Ed25519 secret key in the expanded form `seed || public point`
///
/// Wiped on drop. Deliberately has no `AsRef<[u8]>`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519SecretKey {
    seed: [u8; ED25519_SEED_SIZE],
    public: [u8; ED25519_PUBLIC_KEY_SIZE],
}

impl Ed25519SecretKey {
    /// Pair a seed with its public point.
    ///
    /// The point is taken as given; no check is made that it derives from
    /// the seed.
    pub fn from_parts(seed: &[u8; ED25519_SEED_SIZE], public: &Ed25519PublicKey) -> Self {
        Self {
            seed: *seed,
            public: *public.as_bytes(),
        }
    }

    /// Split a 64-byte expanded key
    pub fn from_expanded(expanded: &[u8]) -> Result<Self> {
        validate::length(
            "Ed25519SecretKey::from_expanded",
            expanded.len(),
            ED25519_EXPANDED_KEY_SIZE,
        )?;
        let mut seed = [0u8; ED25519_SEED_SIZE];
        let mut public = [0u8; ED25519_PUBLIC_KEY_SIZE];
        seed.copy_from_slice(&expanded[..ED25519_SEED_SIZE]);
        public.copy_from_slice(&expanded[ED25519_SEED_SIZE..]);
        let key = Self { seed, public };
        seed.zeroize();
        Ok(key)
    }

    pub fn seed(&self) -> &[u8; ED25519_SEED_SIZE] {
        &self.seed
    }

    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey(self.public)
    }

    pub fn to_expanded(&self) -> Zeroizing<[u8; ED25519_EXPANDED_KEY_SIZE]> {
        let mut expanded = Zeroizing::new([0u8; ED25519_EXPANDED_KEY_SIZE]);
        expanded[..ED25519_SEED_SIZE].copy_from_slice(&self.seed);
        expanded[ED25519_SEED_SIZE..].copy_from_slice(&self.public);
        expanded
    }
}

impl PartialEq for Ed25519SecretKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.to_expanded().as_ref(), other.to_expanded().as_ref())
    }
}

impl Eq for Ed25519SecretKey {}

impl fmt::Debug for Ed25519SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519SecretKey([REDACTED])")
    }
}

/// A public key as handed over by the host library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKey {
    Ed25519(Ed25519PublicKey),
    /// Key belonging to an algorithm outside this library
    Other { algorithm: u8, fields: Vec<Field> },
}

impl PublicKey {
    pub fn as_ed25519(&self) -> Option<&Ed25519PublicKey> {
        match self {
            PublicKey::Ed25519(key) => Some(key),
            PublicKey::Other { .. } => None,
        }
    }
}

impl From<Ed25519PublicKey> for PublicKey {
    fn from(key: Ed25519PublicKey) -> Self {
        PublicKey::Ed25519(key)
    }
}

/// A private key as handed over by the host library
#[derive(Clone, PartialEq, Eq)]
pub enum PrivateKey {
    Ed25519(Ed25519SecretKey),
    /// Key belonging to an algorithm outside this library
    Other {
        algorithm: u8,
        material: Zeroizing<Vec<u8>>,
    },
}

impl PrivateKey {
    pub fn as_ed25519(&self) -> Option<&Ed25519SecretKey> {
        match self {
            PrivateKey::Ed25519(key) => Some(key),
            PrivateKey::Other { .. } => None,
        }
    }
}

impl From<Ed25519SecretKey> for PrivateKey {
    fn from(key: Ed25519SecretKey) -> Self {
        PrivateKey::Ed25519(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKey::Ed25519(key) => f.debug_tuple("Ed25519").field(key).finish(),
            PrivateKey::Other { algorithm, .. } => f
                .debug_struct("Other")
                .field("algorithm", algorithm)
                .finish_non_exhaustive(),
        }
    }
}
