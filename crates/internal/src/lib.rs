//! Internal utilities for the gpgext library
//!
//! Nothing in here is part of the OpenPGP wire contract; these are the small
//! byte-level helpers the other crates share.

pub mod constant_time;
pub mod endian;
