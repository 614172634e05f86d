//! Public-key algorithm capability
//!
//! The host packet library keeps a table from OpenPGP algorithm id to an
//! implementation of [`PublicKeyAlgorithm`] and hands every algorithm-specific
//! part of a key, signature or session-key packet to it.

use core::fmt;
use std::io::{Read, Write};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::encoding::Field;
use crate::types::{PrivateKey, PublicKey};
use crate::Result;
use gpgext_params::HashAlgorithm;

/// A cryptographically secure random source usable behind `dyn`
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> RandomSource for T {}

/// Everything the host needs from one public-key algorithm.
///
/// Implementations are stateless descriptors; a single instance serves every
/// key of its algorithm for the life of the process.
pub trait PublicKeyAlgorithm: fmt::Debug + Send + Sync {
    /// OpenPGP algorithm id
    fn id(&self) -> u8;

    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    fn can_encrypt(&self) -> bool;

    fn can_sign(&self) -> bool;

    /// Key size as reported to the host
    fn bit_length(&self, public_key: &PublicKey) -> Result<u16>;

    /// Encrypt a session key to `public_key`
    fn encrypt(
        &self,
        rng: &mut dyn RandomSource,
        public_key: &PublicKey,
        message: &[u8],
        fingerprint: &[u8; 20],
    ) -> Result<Vec<Field>>;

    /// Recover a session key encrypted to `private_key`
    fn decrypt(
        &self,
        rng: &mut dyn RandomSource,
        private_key: &PrivateKey,
        fields: &[Field],
        fingerprint: &[u8; 20],
    ) -> Result<Zeroizing<Vec<u8>>>;

    /// Sign `message`, returning the signature fields in wire order
    fn sign(
        &self,
        rng: &mut dyn RandomSource,
        private_key: &PrivateKey,
        hash: HashAlgorithm,
        message: &[u8],
    ) -> Result<Vec<Field>>;

    /// Verify `signature` over `hashed`
    fn verify(
        &self,
        public_key: &PublicKey,
        hash: HashAlgorithm,
        hashed: &[u8],
        signature: &[Field],
    ) -> Result<()>;

    /// Read the algorithm-specific part of a public-key packet, returning
    /// the key and the wire fields it was read from
    fn parse_public_key(&self, reader: &mut dyn Read) -> Result<(PublicKey, Vec<Field>)>;

    /// Write the algorithm-specific part of a public-key packet
    fn serialize_public_key(&self, writer: &mut dyn Write, public_key: &PublicKey) -> Result<usize>;

    /// Parse the decrypted secret part of a secret-key packet
    fn parse_private_key(&self, data: &[u8], public_key: &PublicKey) -> Result<PrivateKey>;

    /// Write the secret part of a secret-key packet
    fn serialize_private_key(&self, writer: &mut dyn Write, private_key: &PrivateKey) -> Result<usize>;

    /// Read the algorithm-specific part of a public-key encrypted session key
    fn parse_encrypted_key(&self, reader: &mut dyn Read) -> Result<Vec<Field>>;

    /// Read the algorithm-specific part of a signature packet
    fn parse_signature(&self, reader: &mut dyn Read) -> Result<Vec<Field>>;
}
