//! Curve identifiers (RFC 6637 section 9)

use core::fmt;
use std::io::{Read, Write};

use crate::error::{validate, Result};

/// A variable-length field with a one-octet size prefix, used for curve OIDs.
///
/// The prefix counts octets. The values 0 and 0xFF are reserved for future
/// extensions and are rejected.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitString {
    bytes: Vec<u8>,
}

impl BitString {
    pub fn new(bytes: &[u8]) -> Result<Self> {
        validate::check_argument(
            !bytes.is_empty() && bytes.len() < 0xff,
            "bit string",
            "length must be between 1 and 254 octets",
        )?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut len = [0u8; 1];
        reader.read_exact(&mut len)?;
        validate::encoding(
            len[0] != 0 && len[0] != 0xff,
            "bit string",
            "reserved length octet",
        )?;

        let mut bytes = vec![0u8; len[0] as usize];
        reader.read_exact(&mut bytes)?;
        Ok(Self { bytes })
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_all(&[self.bytes.len() as u8])?;
        writer.write_all(&self.bytes)?;
        Ok(self.encoded_len())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn encoded_len(&self) -> usize {
        1 + self.bytes.len()
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({})", hex::encode(&self.bytes))
    }
}
