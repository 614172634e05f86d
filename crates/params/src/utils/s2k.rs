//! Constants for the GNU string-to-key extensions

/// S2K type byte shared by every GNU extension
pub const S2K_GNU_EXTENSION: u8 = 0x65;

/// Literal marker following the hash id in a GNU extension record
pub const GNU_MARKER: [u8; 3] = *b"GNU";

/// Length of the extension header after the S2K type byte:
/// hash id, marker, specifier
pub const GNU_HEADER_SIZE: usize = 5;

/// Specifier for gnu-dummy (no secret key material present)
pub const GNU_SPECIFIER_DUMMY: u8 = 0x01;

/// Specifier for gnu-divert-to-card (secret key lives on a smart card)
pub const GNU_SPECIFIER_DIVERT_TO_CARD: u8 = 0x02;
