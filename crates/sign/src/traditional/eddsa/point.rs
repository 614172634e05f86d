//! Curve OID and point encoding for EdDSA public keys
//!
//! A GnuPG EdDSA key body is the Ed25519 curve OID followed by one MPI
//! holding a format prefix octet and the 32 point bytes.

use gpgext_api::error::validate;
use gpgext_api::{BitString, Ed25519PublicKey, Error, Mpi, Result};
use gpgext_internal::constant_time::ct_eq;
use gpgext_params::traditional::eddsa::{
    ED25519_ENCODED_POINT_SIZE, ED25519_PUBLIC_KEY_SIZE, OID_ED25519, POINT_FORMAT_NATIVE,
    POINT_FORMAT_UNCOMPRESSED,
};

/// Point encodings distinguished by the MPI's first octet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointFormat {
    /// `0x40`: the 32-byte RFC 8032 encoding follows as-is
    Native,
    /// `0x04`: SEC1 uncompressed, x and y
    Uncompressed,
}

impl PointFormat {
    pub fn from_prefix(prefix: u8) -> Result<Self> {
        match prefix {
            POINT_FORMAT_NATIVE => Ok(Self::Native),
            POINT_FORMAT_UNCOMPRESSED => Ok(Self::Uncompressed),
            other => Err(Error::invalid_argument(
                "EdDSA point",
                format!("unknown point format prefix 0x{:02x}", other),
            )),
        }
    }

    pub fn prefix(self) -> u8 {
        match self {
            Self::Native => POINT_FORMAT_NATIVE,
            Self::Uncompressed => POINT_FORMAT_UNCOMPRESSED,
        }
    }
}

/// The Ed25519 curve OID as a wire field
pub fn ed25519_oid() -> Result<BitString> {
    BitString::new(&OID_ED25519)
}

/// Accept only the Ed25519 curve OID
pub fn check_curve_oid(oid: &BitString) -> Result<()> {
    if !ct_eq(oid.bytes(), OID_ED25519) {
        tracing::debug!(oid_len = oid.bytes().len(), "rejecting EdDSA key on unknown curve");
        return Err(Error::invalid_argument("EdDSA curve", "unknown curve OID"));
    }
    Ok(())
}

/// Decode the point MPI of an EdDSA public key
pub fn decode_point(point: &Mpi) -> Result<Ed25519PublicKey> {
    let bytes = point.bytes();
    validate::check_argument(
        bytes.len() == ED25519_ENCODED_POINT_SIZE,
        "EdDSA point",
        "invalid EdDSA public key encoding",
    )?;

    match PointFormat::from_prefix(bytes[0])? {
        PointFormat::Native => Ed25519PublicKey::from_slice(&bytes[1..]),
        // GnuPG converts these to the native form before use
        // (_gcry_ecc_eddsa_ensure_compact); not supported here yet.
        PointFormat::Uncompressed => Err(Error::not_implemented("uncompressed EdDSA point")),
    }
}

/// Encode a public key in the native point format
pub fn encode_point(public_key: &Ed25519PublicKey) -> Result<Mpi> {
    let mut encoded = [0u8; ED25519_ENCODED_POINT_SIZE];
    encoded[0] = POINT_FORMAT_NATIVE;
    encoded[1..1 + ED25519_PUBLIC_KEY_SIZE].copy_from_slice(public_key.as_bytes());
    Mpi::new(&encoded)
}
