//! GNU string-to-key extensions for OpenPGP secret keys
//!
//! GnuPG marks secret-key packets whose secret material is absent
//! (`gnu-dummy`) or held on a smart card (`gnu-divert-to-card`) with the
//! private S2K type `0x65`. This crate parses those specifiers into [`S2k`]
//! capabilities the host packet library can drive, and keeps the registry of
//! card agents that divert-to-card keys are resolved against.
//!
//! [`S2k`]: gpgext_api::S2k

pub mod agent;
pub mod gnu;
pub mod table;

pub use agent::CardAgentRegistry;
pub use gnu::{parse_gnu_extension, DivertToCard, Dummy, ExtensionSpecifier, GnuExtension};
pub use table::{ExtensionConstructor, ExtensionTable, ParseContext, S2kParser, S2kParserTable};
