//! Smart-card agent capability

use crate::Result;
use zeroize::Zeroizing;

/// Something able to release private key bytes held on a hardware token.
///
/// Implemented by token drivers outside this library and registered with a
/// card-agent registry under one or more card serial numbers. Errors returned
/// here reach the caller of the S2K conversion unchanged.
pub trait CardAgent: Send + Sync {
    /// Extract the private key stored on the card with `serial`, unlocking it
    /// with `passphrase`.
    fn extract_private_key(&self, serial: &[u8], passphrase: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}
