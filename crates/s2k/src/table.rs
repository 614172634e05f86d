//! Dispatch tables for S2K parsing
//!
//! [`S2kParserTable`] maps the S2K type byte of a secret-key packet to a
//! parser; [`ExtensionTable`] maps a GNU extension specifier to the handler
//! constructor. Both are built once at startup and passed by reference.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;

use gpgext_api::{Error, HashAlgorithm, Result, S2k};
use gpgext_params::utils::s2k::S2K_GNU_EXTENSION;

use crate::agent::CardAgentRegistry;
use crate::gnu::{parse_gnu_extension, DivertToCard, Dummy, ExtensionSpecifier, GnuExtension};

/// Builds a handler from the stream following a GNU extension header
pub type ExtensionConstructor =
    fn(HashAlgorithm, &mut dyn Read, &CardAgentRegistry) -> Result<GnuExtension>;

/// GNU extension specifier to handler constructor
#[derive(Default)]
pub struct ExtensionTable {
    constructors: BTreeMap<ExtensionSpecifier, ExtensionConstructor>,
}

impl ExtensionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// gnu-dummy and gnu-divert-to-card
    pub fn with_gnupg_extensions() -> Self {
        let mut table = Self::new();
        table
            .constructors
            .insert(ExtensionSpecifier::Dummy, Dummy::parse);
        table
            .constructors
            .insert(ExtensionSpecifier::DivertToCard, DivertToCard::parse);
        table
    }

    pub fn register(
        &mut self,
        specifier: ExtensionSpecifier,
        constructor: ExtensionConstructor,
    ) -> Result<()> {
        if self.constructors.contains_key(&specifier) {
            return Err(Error::unsupported(
                "GNU extension table",
                format!("GNU S2K extension {:?} is already registered", specifier),
            ));
        }
        self.constructors.insert(specifier, constructor);
        Ok(())
    }

    pub fn contains(&self, specifier: ExtensionSpecifier) -> bool {
        self.constructors.contains_key(&specifier)
    }

    /// Run the constructor for the specifier byte `specifier`
    pub fn parse(
        &self,
        specifier: u8,
        hash: HashAlgorithm,
        reader: &mut dyn Read,
        agents: &CardAgentRegistry,
    ) -> Result<GnuExtension> {
        let constructor = ExtensionSpecifier::try_from(specifier)
            .ok()
            .and_then(|specifier| self.constructors.get(&specifier))
            .ok_or_else(|| {
                Error::unsupported(
                    "GNU S2K",
                    format!("unknown GNU S2K extension specifier {}", specifier),
                )
            })?;
        constructor(hash, reader, agents)
    }
}

impl fmt::Debug for ExtensionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.constructors.keys()).finish()
    }
}

/// What an S2K parser may consult besides the packet bytes
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    pub extensions: &'a ExtensionTable,
    pub agents: &'a CardAgentRegistry,
}

/// Parses the S2K specifier following its type byte
pub type S2kParser = fn(&mut dyn Read, &ParseContext<'_>) -> Result<Box<dyn S2k>>;

fn parse_gnu(reader: &mut dyn Read, context: &ParseContext<'_>) -> Result<Box<dyn S2k>> {
    let extension = parse_gnu_extension(reader, context.extensions, context.agents)?;
    Ok(Box::new(extension))
}

/// S2K type byte to parser
#[derive(Default)]
pub struct S2kParserTable {
    parsers: BTreeMap<u8, S2kParser>,
}

impl S2kParserTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the GNU extension parser under `0x65`
    pub fn with_gnupg_extensions() -> Self {
        let mut table = Self::new();
        table.parsers.insert(S2K_GNU_EXTENSION, parse_gnu);
        table
    }

    /// Add a parser for S2K type `id`. A type may only be claimed once.
    pub fn register(&mut self, id: u8, parser: S2kParser) -> Result<()> {
        if self.parsers.contains_key(&id) {
            return Err(Error::unsupported(
                "S2K parser table",
                format!("S2K type {} is already registered", id),
            ));
        }
        tracing::debug!(id, "registered S2K parser");
        self.parsers.insert(id, parser);
        Ok(())
    }

    pub fn get(&self, id: u8) -> Option<S2kParser> {
        self.parsers.get(&id).copied()
    }

    /// Parse the specifier of S2K type `id` from `reader`
    pub fn parse(
        &self,
        id: u8,
        reader: &mut dyn Read,
        context: &ParseContext<'_>,
    ) -> Result<Box<dyn S2k>> {
        let parser = self
            .get(id)
            .ok_or_else(|| Error::unsupported("S2K", format!("unknown S2K type {}", id)))?;
        parser(reader, context)
    }

    /// Registered S2K types in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.parsers.keys().copied()
    }
}

impl fmt::Debug for S2kParserTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.parsers.keys()).finish()
    }
}
