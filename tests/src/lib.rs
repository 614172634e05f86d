//! Test fixtures shared by the gpgext integration tests

use std::sync::atomic::{AtomicUsize, Ordering};

use gpgext::api::{CardAgent, Error, Result};
use zeroize::Zeroizing;

pub mod vectors;

/// Enable tracing with the RUST_LOG environment variable.
///
/// This is intended to be used in tests, so it defaults to DEBUG level.
pub fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::DEBUG.into())
                .from_env_lossy(),
        )
        .try_init();
}

/// A card agent backed by memory, unlocked by a fixed PIN
pub struct SoftCard {
    pin: Vec<u8>,
    key: Zeroizing<Vec<u8>>,
    extractions: AtomicUsize,
}

impl SoftCard {
    pub fn new(pin: &[u8], key: &[u8]) -> Self {
        Self {
            pin: pin.to_vec(),
            key: Zeroizing::new(key.to_vec()),
            extractions: AtomicUsize::new(0),
        }
    }

    /// Successful extractions so far
    pub fn extractions(&self) -> usize {
        self.extractions.load(Ordering::SeqCst)
    }
}

impl CardAgent for SoftCard {
    fn extract_private_key(&self, serial: &[u8], passphrase: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        if passphrase != self.pin.as_slice() {
            tracing::debug!(serial = %hex::encode(serial), "soft card rejected PIN");
            return Err(Error::invalid_argument("soft card", "bad PIN"));
        }
        self.extractions.fetch_add(1, Ordering::SeqCst);
        Ok(self.key.clone())
    }
}
