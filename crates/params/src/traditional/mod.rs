//! Constants for the EdDSA public-key algorithm

pub mod eddsa;
