//! Endianness utility functions
//!
//! OpenPGP is big-endian throughout, so only the big-endian direction is kept.

/// Convert a u16 from big-endian byte order to native byte order
pub fn u16_from_be_bytes(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Convert a u16 from native byte order to big-endian bytes
pub fn u16_to_be_bytes(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Number of significant bits in a big-endian magnitude.
///
/// Leading zero bytes and leading zero bits of the first non-zero byte do
/// not count. An all-zero (or empty) input has a bit length of zero.
pub fn be_bit_length(bytes: &[u8]) -> usize {
    match bytes.iter().position(|&b| b != 0) {
        Some(first) => {
            let remaining = bytes.len() - first - 1;
            remaining * 8 + (8 - bytes[first].leading_zeros() as usize)
        }
        None => 0,
    }
}

/// Strip leading zero bytes from a big-endian magnitude.
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}
