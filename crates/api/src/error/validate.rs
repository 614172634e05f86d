//! Validation utilities for wire and key-shape checks

use super::types::{Error, Result};

/// Check a caller-supplied argument condition
pub fn check_argument(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidArgument {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Check a wire-layout condition
pub fn encoding(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::MalformedEncoding {
            context,
            message: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate an exact length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate a signature verification result
pub fn signature(is_valid: bool, context: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::InvalidSignature {
            context,
            message: "verification failure".to_string(),
        });
    }
    Ok(())
}
