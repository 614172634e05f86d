//! Ed25519 signature scheme
//!
//! RFC 8032 Ed25519 over the `seed || public point` key layout GnuPG stores.
//! Curve arithmetic comes from `ed25519-dalek`.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use gpgext_api::error::validate;
use gpgext_api::{
    Ed25519PublicKey, Ed25519SecretKey, Error, Result, Signature as SignatureTrait,
    SignatureDerive,
};
use gpgext_internal::constant_time::ct_eq;
use gpgext_params::traditional::eddsa::{
    ED25519_SEED_SIZE, ED25519_SIGNATURE_COMPONENT_SIZE, ED25519_SIGNATURE_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Ed25519 signature scheme
pub struct Ed25519;

/// Ed25519 signature (64 bytes: R || S)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature(pub [u8; ED25519_SIGNATURE_SIZE]);

impl Ed25519Signature {
    /// The R component (first 32 bytes)
    pub fn r(&self) -> &[u8] {
        &self.0[..ED25519_SIGNATURE_COMPONENT_SIZE]
    }

    /// The S component (last 32 bytes)
    pub fn s(&self) -> &[u8] {
        &self.0[ED25519_SIGNATURE_COMPONENT_SIZE..]
    }
}

impl AsRef<[u8]> for Ed25519Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ed25519Signature({})", hex::encode(self.0))
    }
}

fn checked_signing_key(secret_key: &Ed25519SecretKey) -> Result<SigningKey> {
    let signing_key = SigningKey::from_bytes(secret_key.seed());

    // The stored point is used verbatim by other implementations; a key whose
    // halves disagree would sign for a different public key.
    let derived = signing_key.verifying_key();
    validate::check_argument(
        ct_eq(derived.as_bytes(), secret_key.public_key().as_bytes()),
        "Ed25519 signing",
        "public point does not match seed",
    )?;
    Ok(signing_key)
}

impl SignatureTrait for Ed25519 {
    type PublicKey = Ed25519PublicKey;
    type SecretKey = Ed25519SecretKey;
    type SignatureData = Ed25519Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Ed25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut seed = [0u8; ED25519_SEED_SIZE];
        rng.fill_bytes(&mut seed);
        let keypair = Self::derive_keypair(&seed);
        seed.zeroize();
        keypair
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let signing_key = checked_signing_key(secret_key)?;
        Ok(Ed25519Signature(signing_key.sign(message).to_bytes()))
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()> {
        // An undecodable point can never verify anything
        let verifying_key = VerifyingKey::from_bytes(public_key.as_bytes())
            .map_err(|_| Error::invalid_signature("Ed25519", "public key is not a curve point"))?;

        let signature = ed25519_dalek::Signature::from_bytes(&signature.0);
        validate::signature(verifying_key.verify(message, &signature).is_ok(), "EdDSA")
    }
}

impl SignatureDerive for Ed25519 {
    const MIN_SEED_SIZE: usize = ED25519_SEED_SIZE;

    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair> {
        validate::length("Ed25519 seed", seed.len(), ED25519_SEED_SIZE)?;

        let mut seed_bytes = [0u8; ED25519_SEED_SIZE];
        seed_bytes.copy_from_slice(seed);
        let signing_key = SigningKey::from_bytes(&seed_bytes);
        let public_key = Ed25519PublicKey::new(signing_key.verifying_key().to_bytes());
        let secret_key = Ed25519SecretKey::from_parts(&seed_bytes, &public_key);
        seed_bytes.zeroize();

        Ok((public_key, secret_key))
    }

    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey> {
        let signing_key = SigningKey::from_bytes(secret_key.seed());
        Ok(Ed25519PublicKey::new(signing_key.verifying_key().to_bytes()))
    }
}
