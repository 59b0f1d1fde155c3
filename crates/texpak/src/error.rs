//! Error types for the texpak crate.

use std::fmt;

use texpak_decode::DecodeError;

/// Result type for texpak operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a texture container.
///
/// Every error is fatal to the decode attempt: no partial texture is ever
/// returned, and no fallback value is ever substituted.
#[derive(Debug)]
pub enum Error {
    /// The stream was not readable when decoding started.
    UnreadableSource,
    /// The stream ended while reading a header field.
    TruncatedHeader {
        /// The field being read.
        context: &'static str,
    },
    /// The stream ended inside the metadata section.
    TruncatedMetadata {
        /// The block part being read.
        context: &'static str,
    },
    /// The stream ended before the texel payload was complete.
    TruncatedPayload {
        /// Bytes the read needed to obtain.
        expected: usize,
    },
    /// The stream failed for a reason other than running out of bytes.
    Io(std::io::Error),
    /// The container data itself was invalid.
    Decode(DecodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnreadableSource => {
                write!(f, "source stream is not readable")
            }
            Error::TruncatedHeader { context } => {
                write!(f, "stream ended while reading header field {context}")
            }
            Error::TruncatedMetadata { context } => {
                write!(f, "stream ended while reading metadata {context}")
            }
            Error::TruncatedPayload { expected } => {
                write!(f, "stream ended before {expected} payload bytes were read")
            }
            Error::Io(e) => write!(f, "stream read failed: {e}"),
            Error::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}
