//! Constant values shared by the OpenPGP extension crates

pub mod hash;
pub mod s2k;
