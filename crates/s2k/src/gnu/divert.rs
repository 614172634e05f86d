//! gnu-divert-to-card: the secret key lives on a smart card
//!
//! The record payload is the card serial, taken as opaque bytes up to the end
//! of the stream. Converting a passphrase asks the card agent registered for
//! that serial to release the key.

use std::fmt;
use std::io::{Read, Write};
use std::sync::{Arc, Weak};

use gpgext_api::error::ResultExt;
use gpgext_api::{CardAgent, Error, HashAlgorithm, Result, S2k};
use gpgext_params::utils::s2k::{GNU_SPECIFIER_DIVERT_TO_CARD, S2K_GNU_EXTENSION};

use super::{write_header, GnuExtension};
use crate::agent::CardAgentRegistry;

/// A secret key held on the card with a given serial.
///
/// The agent is borrowed from the registry the record was parsed against;
/// the registry alone keeps it alive.
#[derive(Clone)]
pub struct DivertToCard {
    hash: HashAlgorithm,
    serial: Vec<u8>,
    agent: Weak<dyn CardAgent>,
}

impl DivertToCard {
    /// Read the serial from the rest of `reader` and resolve its agent
    pub fn read_from(
        hash: HashAlgorithm,
        reader: &mut dyn Read,
        agents: &CardAgentRegistry,
    ) -> Result<Self> {
        let mut serial = Vec::new();
        reader
            .read_to_end(&mut serial)
            .with_context("gnu-divert-to-card serial")?;

        let agent = agents.lookup(&serial).ok_or_else(|| {
            Error::unsupported(
                "gnu-divert-to-card",
                format!("no card agent for serial: {}", hex::encode(&serial)),
            )
        })?;

        Ok(Self {
            hash,
            serial,
            agent: Arc::downgrade(&agent),
        })
    }

    /// Extension constructor
    pub fn parse(
        hash: HashAlgorithm,
        reader: &mut dyn Read,
        agents: &CardAgentRegistry,
    ) -> Result<GnuExtension> {
        Self::read_from(hash, reader, agents).map(GnuExtension::DivertToCard)
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The card serial, exactly as it appeared on the wire
    pub fn serial(&self) -> &[u8] {
        &self.serial
    }
}

impl fmt::Debug for DivertToCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivertToCard")
            .field("hash", &self.hash)
            .field("serial", &hex::encode(&self.serial))
            .finish_non_exhaustive()
    }
}

impl S2k for DivertToCard {
    fn id(&self) -> u8 {
        S2K_GNU_EXTENSION
    }

    /// Fetch the key from the card. Agent errors are returned unchanged, and
    /// `key` is only written once the extracted key is known to fit exactly.
    fn convert(&self, key: &mut [u8], passphrase: &[u8]) -> Result<()> {
        let agent = self.agent.upgrade().ok_or_else(|| {
            Error::unsupported(
                "gnu-divert-to-card",
                format!("card agent for serial {} is gone", hex::encode(&self.serial)),
            )
        })?;
        let extracted = agent.extract_private_key(&self.serial, passphrase)?;

        if extracted.len() != key.len() {
            tracing::warn!(
                serial = %hex::encode(&self.serial),
                expected = key.len(),
                actual = extracted.len(),
                "card agent returned a key of unexpected length"
            );
            return Err(Error::unsupported(
                "gnu-divert-to-card",
                "unexpected length of private key from card",
            ));
        }

        key.copy_from_slice(&extracted);
        Ok(())
    }

    fn setup_iv(&self, _size: usize) -> Result<Vec<u8>> {
        Err(Error::not_implemented("gnu-divert-to-card IV derivation"))
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<usize> {
        let header = write_header(writer, self.hash)?;
        writer
            .write_all(&[GNU_SPECIFIER_DIVERT_TO_CARD])
            .with_context("gnu-divert-to-card specifier")?;
        writer
            .write_all(&self.serial)
            .with_context("gnu-divert-to-card serial")?;
        Ok(header + 1 + self.serial.len())
    }
}
