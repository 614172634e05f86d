//! gnu-dummy: a secret-key packet whose secret part was deliberately left out

use std::io::{Read, Write};

use gpgext_api::{Error, HashAlgorithm, Result, S2k};
use gpgext_params::utils::s2k::S2K_GNU_EXTENSION;

use super::{write_header, GnuExtension};
use crate::agent::CardAgentRegistry;

/// Stands in for secret key material that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dummy {
    hash: HashAlgorithm,
}

impl Dummy {
    pub fn new(hash: HashAlgorithm) -> Self {
        Self { hash }
    }

    /// Extension constructor. A dummy record carries no payload.
    pub fn parse(
        hash: HashAlgorithm,
        _reader: &mut dyn Read,
        _agents: &CardAgentRegistry,
    ) -> Result<GnuExtension> {
        Ok(GnuExtension::Dummy(Self::new(hash)))
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }
}

impl S2k for Dummy {
    fn id(&self) -> u8 {
        S2K_GNU_EXTENSION
    }

    fn convert(&self, _key: &mut [u8], _passphrase: &[u8]) -> Result<()> {
        Err(Error::unsupported(
            "gnu-dummy",
            "gnu-dummy does not support key decryption",
        ))
    }

    /// Dummy keys are never decrypted, so there is no IV to derive.
    fn setup_iv(&self, _size: usize) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<usize> {
        write_header(writer, self.hash)
    }

    fn is_dummy(&self) -> bool {
        true
    }
}
