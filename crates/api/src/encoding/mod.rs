//! Variable-length wire fields
//!
//! These are the field encodings the host packet library reads and writes on
//! behalf of every public-key algorithm. The extensions only call into them.

mod bitstring;
mod mpi;

pub use bitstring::BitString;
pub use mpi::{Mpi, MPI_MAX_BITS};

use std::io::Write;

use crate::error::Result;

/// One algorithm-specific field of a key or signature packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Mpi(Mpi),
    BitString(BitString),
}

impl Field {
    /// The field's payload without its length prefix
    pub fn bytes(&self) -> &[u8] {
        match self {
            Field::Mpi(mpi) => mpi.bytes(),
            Field::BitString(bits) => bits.bytes(),
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> Result<usize> {
        match self {
            Field::Mpi(mpi) => mpi.write_to(writer),
            Field::BitString(bits) => bits.write_to(writer),
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Field::Mpi(mpi) => mpi.encoded_len(),
            Field::BitString(bits) => bits.encoded_len(),
        }
    }
}

impl From<Mpi> for Field {
    fn from(mpi: Mpi) -> Self {
        Field::Mpi(mpi)
    }
}

impl From<BitString> for Field {
    fn from(bits: BitString) -> Self {
        Field::BitString(bits)
    }
}

/// Write a sequence of fields back to back
pub fn write_fields<W: Write + ?Sized>(writer: &mut W, fields: &[Field]) -> Result<usize> {
    let mut written = 0;
    for field in fields {
        written += field.write_to(writer)?;
    }
    Ok(written)
}
