//! Error type definitions for the GnuPG extensions

use std::string::String;

/// Primary error type for extension operations
///
/// Every failure a plug-in can report is one of these variants; none of the
/// operations in this library abort the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Caller supplied a value of the wrong concrete kind or shape
    #[error("invalid argument: {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Operation is structurally impossible for this algorithm or handler
    #[error("unsupported: {context}: {message}")]
    Unsupported {
        context: &'static str,
        message: String,
    },

    /// Wire bytes violate the fixed layout, including truncated input
    #[error("malformed encoding: {context}: {message}")]
    MalformedEncoding {
        context: &'static str,
        message: String,
    },

    /// Cryptographic verification failed
    #[error("invalid signature: {context}: {message}")]
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// A recognized wire variant this library does not handle
    #[error("{feature} is not implemented")]
    NotImplemented {
        feature: &'static str,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Reader or writer failure other than a short read
    #[error("I/O error: {context}: {message}")]
    Io {
        context: &'static str,
        message: String,
    },
}

/// Result type for extension operations
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    InvalidArgument,
    Unsupported,
    MalformedEncoding,
    SignatureInvalid,
    Unimplemented,
    Io,
}

impl Error {
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    pub fn unsupported(context: &'static str, message: impl Into<String>) -> Self {
        Self::Unsupported {
            context,
            message: message.into(),
        }
    }

    pub fn malformed(context: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedEncoding {
            context,
            message: message.into(),
        }
    }

    pub fn invalid_signature(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            context,
            message: message.into(),
        }
    }

    pub fn not_implemented(feature: &'static str) -> Self {
        Self::NotImplemented { feature }
    }

    /// Classify this error.
    ///
    /// `InvalidLength` is a shape violation and therefore counts as an
    /// invalid argument.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } | Self::InvalidLength { .. } => ErrorKind::InvalidArgument,
            Self::Unsupported { .. } => ErrorKind::Unsupported,
            Self::MalformedEncoding { .. } => ErrorKind::MalformedEncoding,
            Self::InvalidSignature { .. } => ErrorKind::SignatureInvalid,
            Self::NotImplemented { .. } => ErrorKind::Unimplemented,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::Unsupported { message, .. } => Self::Unsupported { context, message },
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::Io { message, .. } => Self::Io { context, message },
        }
    }
}
