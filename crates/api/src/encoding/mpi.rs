//! Multiprecision integers (RFC 4880 section 3.2)

use core::fmt;
use std::io::{Read, Write};

use gpgext_internal::endian::{
    be_bit_length, trim_leading_zeros, u16_from_be_bytes, u16_to_be_bytes,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Largest bit count an MPI can describe
pub const MPI_MAX_BITS: usize = u16::MAX as usize;

/// A two-octet bit count followed by a big-endian magnitude.
///
/// MPIs carry secret seeds as well as public points, so the buffer is wiped
/// on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Mpi {
    bytes: Vec<u8>,
    bit_length: u16,
}

impl Mpi {
    /// Build an MPI from a big-endian magnitude.
    ///
    /// Leading zero octets are dropped so the encoding is minimal. Magnitudes
    /// wider than the two-octet bit count can describe are rejected.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let trimmed = trim_leading_zeros(bytes);
        let bits = be_bit_length(trimmed);
        if bits > MPI_MAX_BITS {
            return Err(Error::InvalidLength {
                context: "MPI bit count",
                expected: MPI_MAX_BITS,
                actual: bits,
            });
        }
        Ok(Self {
            bytes: trimmed.to_vec(),
            bit_length: bits as u16,
        })
    }

    /// Read one MPI. The octets are kept exactly as they appear on the wire.
    pub fn read_from<R: Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut header = [0u8; 2];
        reader.read_exact(&mut header)?;
        let bit_length = u16_from_be_bytes(&header);

        let mut bytes = vec![0u8; (bit_length as usize + 7) / 8];
        reader.read_exact(&mut bytes)?;

        Ok(Self { bytes, bit_length })
    }

    /// Write the MPI, returning the number of octets written.
    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        writer.write_all(&u16_to_be_bytes(self.bit_length))?;
        writer.write_all(&self.bytes)?;
        Ok(self.encoded_len())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn bit_length(&self) -> u16 {
        self.bit_length
    }

    /// Length of the wire encoding including the bit-count prefix
    pub fn encoded_len(&self) -> usize {
        2 + self.bytes.len()
    }
}

impl fmt::Debug for Mpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mpi")
            .field("bit_length", &self.bit_length)
            .finish_non_exhaustive()
    }
}
