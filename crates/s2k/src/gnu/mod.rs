//! The GNU S2K extension (S2K type `0x65`)
//!
//! After the type byte the record carries a hash-algorithm id, the literal
//! `GNU` and a one-byte specifier naming the extension:
//!
//! ```text
//! 0x65 | hash id | 'G' 'N' 'U' | specifier | extension payload ...
//! ```
//!
//! The dispatcher reads that header in a single pass and hands the rest of
//! the stream to the handler registered for the specifier.
//!
//! ```
//! use gpgext_api::S2k;
//! use gpgext_s2k::{parse_gnu_extension, CardAgentRegistry, ExtensionTable};
//!
//! let extensions = ExtensionTable::with_gnupg_extensions();
//! let agents = CardAgentRegistry::new();
//!
//! let mut record: &[u8] = &[0x02, b'G', b'N', b'U', 0x01];
//! let dummy = parse_gnu_extension(&mut record, &extensions, &agents).unwrap();
//! assert!(dummy.is_dummy());
//!
//! let mut out = Vec::new();
//! dummy.write_to(&mut out).unwrap();
//! assert_eq!(out, [0x65, 0x02, b'G', b'N', b'U']);
//! ```

use std::io::{Read, Write};

use gpgext_api::error::ResultExt;
use gpgext_api::{Error, HashAlgorithm, Result, S2k};
use gpgext_params::utils::s2k::{
    GNU_HEADER_SIZE, GNU_MARKER, GNU_SPECIFIER_DIVERT_TO_CARD, GNU_SPECIFIER_DUMMY,
    S2K_GNU_EXTENSION,
};

use crate::agent::CardAgentRegistry;
use crate::table::ExtensionTable;

mod divert;
mod dummy;

pub use divert::DivertToCard;
pub use dummy::Dummy;


/// GNU extension specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ExtensionSpecifier {
    /// gnu-dummy: the secret key is not present
    Dummy = GNU_SPECIFIER_DUMMY,
    /// gnu-divert-to-card: the secret key is on a smart card
    DivertToCard = GNU_SPECIFIER_DIVERT_TO_CARD,
}

impl ExtensionSpecifier {
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for ExtensionSpecifier {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            GNU_SPECIFIER_DUMMY => Ok(Self::Dummy),
            GNU_SPECIFIER_DIVERT_TO_CARD => Ok(Self::DivertToCard),
            other => Err(Error::unsupported(
                "GNU S2K",
                format!("unknown GNU S2K extension specifier {}", other),
            )),
        }
    }
}

/// Write the header every GNU extension starts with
fn write_header(writer: &mut dyn Write, hash: HashAlgorithm) -> Result<usize> {
    let [g, n, u] = GNU_MARKER;
    let header = [S2K_GNU_EXTENSION, hash.id(), g, n, u];
    writer.write_all(&header).with_context("GNU S2K header")?;
    Ok(header.len())
}

/// Parse a GNU extension record.
///
/// `reader` is positioned just after the `0x65` type byte. Divert-to-card
/// consumes the rest of the stream as the card serial.
pub fn parse_gnu_extension(
    reader: &mut dyn Read,
    extensions: &ExtensionTable,
    agents: &CardAgentRegistry,
) -> Result<GnuExtension> {
    let mut header = [0u8; GNU_HEADER_SIZE];
    reader.read_exact(&mut header).with_context("GNU S2K header")?;

    let hash = HashAlgorithm::from_id(header[0]).ok_or_else(|| {
        Error::unsupported("GNU S2K", format!("hash for S2K function: {}", header[0]))
    })?;

    if header[1..4] != GNU_MARKER {
        tracing::debug!(marker = %hex::encode(&header[1..4]), "GNU S2K record without GNU marker");
        return Err(Error::malformed("GNU S2K", "missing 'GNU' marker for s2k"));
    }

    let specifier = header[4];
    tracing::trace!(hash = hash.name(), specifier, "dispatching GNU S2K extension");
    extensions.parse(specifier, hash, reader, agents)
}

/// A parsed GNU extension
#[derive(Debug, Clone)]
pub enum GnuExtension {
    Dummy(Dummy),
    DivertToCard(DivertToCard),
}

impl GnuExtension {
    pub fn specifier(&self) -> ExtensionSpecifier {
        match self {
            Self::Dummy(_) => ExtensionSpecifier::Dummy,
            Self::DivertToCard(_) => ExtensionSpecifier::DivertToCard,
        }
    }

    /// Hash algorithm named in the header
    pub fn hash(&self) -> HashAlgorithm {
        match self {
            Self::Dummy(dummy) => dummy.hash(),
            Self::DivertToCard(divert) => divert.hash(),
        }
    }

    pub fn as_divert_to_card(&self) -> Option<&DivertToCard> {
        match self {
            Self::DivertToCard(divert) => Some(divert),
            Self::Dummy(_) => None,
        }
    }
}

impl From<Dummy> for GnuExtension {
    fn from(dummy: Dummy) -> Self {
        Self::Dummy(dummy)
    }
}

impl From<DivertToCard> for GnuExtension {
    fn from(divert: DivertToCard) -> Self {
        Self::DivertToCard(divert)
    }
}

impl S2k for GnuExtension {
    fn id(&self) -> u8 {
        S2K_GNU_EXTENSION
    }

    fn convert(&self, key: &mut [u8], passphrase: &[u8]) -> Result<()> {
        match self {
            Self::Dummy(dummy) => dummy.convert(key, passphrase),
            Self::DivertToCard(divert) => divert.convert(key, passphrase),
        }
    }

    fn setup_iv(&self, size: usize) -> Result<Vec<u8>> {
        match self {
            Self::Dummy(dummy) => dummy.setup_iv(size),
            Self::DivertToCard(divert) => divert.setup_iv(size),
        }
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<usize> {
        match self {
            Self::Dummy(dummy) => dummy.write_to(writer),
            Self::DivertToCard(divert) => divert.write_to(writer),
        }
    }

    fn is_dummy(&self) -> bool {
        matches!(self, Self::Dummy(_))
    }
}
