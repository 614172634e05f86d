//! String-to-key capability

use core::fmt;
use std::io::Write;

use crate::Result;

/// A parsed S2K specifier.
///
/// The host packet library calls `convert` to turn a passphrase into the
/// symmetric key protecting a secret-key packet, and `write_to` to
/// re-serialize the specifier unchanged.
pub trait S2k: fmt::Debug + Send + Sync {
    /// The S2K type byte this specifier was parsed from
    fn id(&self) -> u8;

    /// Fill `key` with key material derived from `passphrase`.
    ///
    /// On failure `key` is left exactly as it was.
    fn convert(&self, key: &mut [u8], passphrase: &[u8]) -> Result<()>;

    /// Produce the IV for a cipher with a `size`-byte block
    fn setup_iv(&self, size: usize) -> Result<Vec<u8>>;

    /// Serialize the specifier including its type byte, returning the number
    /// of bytes written
    fn write_to(&self, writer: &mut dyn Write) -> Result<usize>;

    /// True when the specifier states that no secret key material exists,
    /// as opposed to material that failed to unlock
    fn is_dummy(&self) -> bool {
        false
    }
}
