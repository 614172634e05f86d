//! The EdDSA public-key algorithm (id 22) as a host-pluggable capability

use std::io::{Read, Write};

use gpgext_api::error::validate;
use gpgext_api::{
    Ed25519SecretKey, Error, Field, HashAlgorithm, Mpi, PrivateKey, PublicKey,
    PublicKeyAlgorithm, RandomSource, Result, Signature,
};
use gpgext_params::traditional::eddsa::{
    EDDSA_ALGORITHM_ID, EDDSA_SIGNATURE_FIELDS, ED25519_PUBLIC_KEY_SIZE, ED25519_SEED_SIZE,
    ED25519_SIGNATURE_COMPONENT_SIZE, ED25519_SIGNATURE_SIZE,
};
use zeroize::{Zeroize, Zeroizing};

use super::ed25519::{Ed25519, Ed25519Signature};
use super::point::{check_curve_oid, decode_point, ed25519_oid, encode_point};

/// Public-key algorithms contributed by the GnuPG extensions.
///
/// The OpenPGP algorithm id space is closed; a new variant needs a protocol
/// change, so this is an enum rather than an open registry of types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GnuPgAlgorithm {
    /// EdDSA over Ed25519 (draft-koch-eddsa-for-openpgp-04). The id has not
    /// been formally assigned but is what GnuPG uses.
    EdDsa,
}

/// The single EdDSA descriptor shared by every caller
pub static EDDSA: GnuPgAlgorithm = GnuPgAlgorithm::EdDsa;

impl TryFrom<u8> for GnuPgAlgorithm {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            EDDSA_ALGORITHM_ID => Ok(GnuPgAlgorithm::EdDsa),
            other => Err(Error::unsupported(
                "public key algorithm",
                format!("no GnuPG extension for algorithm {}", other),
            )),
        }
    }
}

fn ed25519_public<'a>(
    public_key: &'a PublicKey,
    operation: &'static str,
) -> Result<&'a gpgext_api::Ed25519PublicKey> {
    public_key
        .as_ed25519()
        .ok_or_else(|| Error::invalid_argument(operation, "wrong type of public key"))
}

fn ed25519_secret<'a>(
    private_key: &'a PrivateKey,
    operation: &'static str,
) -> Result<&'a Ed25519SecretKey> {
    private_key
        .as_ed25519()
        .ok_or_else(|| Error::invalid_argument(operation, "wrong type of private key"))
}

/// Copy a big-endian magnitude into a fixed slot, restoring the leading
/// zeros the MPI encoding dropped.
fn right_aligned(slot: &mut [u8], magnitude: &[u8], context: &'static str) -> Result<()> {
    validate::max_length(context, magnitude.len(), slot.len())?;
    let offset = slot.len() - magnitude.len();
    slot[..offset].fill(0);
    slot[offset..].copy_from_slice(magnitude);
    Ok(())
}

impl PublicKeyAlgorithm for GnuPgAlgorithm {
    fn id(&self) -> u8 {
        match self {
            GnuPgAlgorithm::EdDsa => EDDSA_ALGORITHM_ID,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            GnuPgAlgorithm::EdDsa => "EdDSA",
        }
    }

    fn can_encrypt(&self) -> bool {
        false
    }

    fn can_sign(&self) -> bool {
        true
    }

    /// Length of the public point in bytes.
    ///
    /// GnuPG-compatible hosts have always been handed the byte count here
    /// rather than a bit count, and key-size reporting depends on it.
    fn bit_length(&self, public_key: &PublicKey) -> Result<u16> {
        ed25519_public(public_key, "EdDSA bit length")?;
        Ok(ED25519_PUBLIC_KEY_SIZE as u16)
    }

    fn encrypt(
        &self,
        _rng: &mut dyn RandomSource,
        _public_key: &PublicKey,
        _message: &[u8],
        _fingerprint: &[u8; 20],
    ) -> Result<Vec<Field>> {
        Err(Error::invalid_argument(
            "encrypt",
            format!("cannot encrypt to public key of type {}", self.id()),
        ))
    }

    fn decrypt(
        &self,
        _rng: &mut dyn RandomSource,
        _private_key: &PrivateKey,
        _fields: &[Field],
        _fingerprint: &[u8; 20],
    ) -> Result<Zeroizing<Vec<u8>>> {
        Err(Error::unsupported("decrypt", "EdDSA does not support decryption"))
    }

    fn sign(
        &self,
        _rng: &mut dyn RandomSource,
        private_key: &PrivateKey,
        _hash: HashAlgorithm,
        message: &[u8],
    ) -> Result<Vec<Field>> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let secret_key = ed25519_secret(private_key, "EdDSA sign")?;
                let signature = Ed25519::sign(message, secret_key)?;

                Ok(vec![
                    Field::Mpi(Mpi::new(signature.r())?),
                    Field::Mpi(Mpi::new(signature.s())?),
                ])
            }
        }
    }

    fn verify(
        &self,
        public_key: &PublicKey,
        _hash: HashAlgorithm,
        hashed: &[u8],
        signature: &[Field],
    ) -> Result<()> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let public_key = ed25519_public(public_key, "EdDSA verify")?;
                validate::check_argument(
                    signature.len() == EDDSA_SIGNATURE_FIELDS,
                    "EdDSA verify",
                    "cannot verify malformed signature",
                )?;

                let mut raw = [0u8; ED25519_SIGNATURE_SIZE];
                let (r, s) = raw.split_at_mut(ED25519_SIGNATURE_COMPONENT_SIZE);
                right_aligned(r, signature[0].bytes(), "EdDSA signature R")?;
                right_aligned(s, signature[1].bytes(), "EdDSA signature S")?;

                Ed25519::verify(hashed, &Ed25519Signature(raw), public_key)
            }
        }
    }

    fn parse_public_key(&self, reader: &mut dyn Read) -> Result<(PublicKey, Vec<Field>)> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let oid = gpgext_api::BitString::read_from(reader)?;
                check_curve_oid(&oid)?;

                let point = Mpi::read_from(reader)?;
                let public_key = decode_point(&point)?;

                Ok((
                    PublicKey::Ed25519(public_key),
                    vec![Field::BitString(oid), Field::Mpi(point)],
                ))
            }
        }
    }

    fn serialize_public_key(&self, writer: &mut dyn Write, public_key: &PublicKey) -> Result<usize> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let public_key = ed25519_public(public_key, "EdDSA serialize public key")?;
                let written = ed25519_oid()?.write_to(writer)?;
                Ok(written + encode_point(public_key)?.write_to(writer)?)
            }
        }
    }

    fn parse_private_key(&self, data: &[u8], public_key: &PublicKey) -> Result<PrivateKey> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let public_key = ed25519_public(public_key, "EdDSA parse private key")?;

                let mut reader = data;
                let d = Mpi::read_from(&mut reader)?;

                let mut seed = [0u8; ED25519_SEED_SIZE];
                right_aligned(&mut seed, d.bytes(), "EdDSA secret seed")?;
                let secret_key = Ed25519SecretKey::from_parts(&seed, public_key);
                seed.zeroize();

                Ok(PrivateKey::Ed25519(secret_key))
            }
        }
    }

    /// Writes the seed only; the public half is already in the packet.
    fn serialize_private_key(&self, writer: &mut dyn Write, private_key: &PrivateKey) -> Result<usize> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let secret_key = ed25519_secret(private_key, "EdDSA serialize private key")?;
                Mpi::new(secret_key.seed())?.write_to(writer)
            }
        }
    }

    fn parse_encrypted_key(&self, _reader: &mut dyn Read) -> Result<Vec<Field>> {
        Err(Error::unsupported(
            "parse encrypted key",
            "EdDSA does not support session keys",
        ))
    }

    fn parse_signature(&self, reader: &mut dyn Read) -> Result<Vec<Field>> {
        match self {
            GnuPgAlgorithm::EdDsa => {
                let r = Mpi::read_from(reader)?;
                let s = Mpi::read_from(reader)?;
                Ok(vec![Field::Mpi(r), Field::Mpi(s)])
            }
        }
    }
}
