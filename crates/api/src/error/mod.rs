//! Error handling for the GnuPG extensions

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, ErrorKind, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::MalformedEncoding {
                context: "read",
                message: "truncated input".to_string(),
            },
            _ => Self::Io {
                context: "I/O operation",
                message: e.to_string(),
            },
        }
    }
}
