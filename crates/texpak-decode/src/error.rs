//! Error types for container decoding.

use std::fmt;

/// Errors that can occur while interpreting container data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The version word at the start of the stream matched no known header layout.
    UnrecognizedVersion { value: u32 },
    /// A legacy header carried a format identifier with no mapping entry.
    UnsupportedLegacyFormat { id: u8 },
    /// The metadata section consumed more bytes than its declared size.
    CorruptMetadata { declared: u32, consumed: u32 },
    /// An enumerated header field held a value outside its namespace.
    InvalidField {
        field: &'static str,
        value: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedVersion { value } => {
                write!(f, "unrecognized container version word {value:#010x}")
            }
            Self::UnsupportedLegacyFormat { id } => {
                write!(f, "unsupported legacy pixel format {id:#04x}")
            }
            Self::CorruptMetadata { declared, consumed } => {
                write!(
                    f,
                    "metadata section declared {declared} bytes but blocks consumed {consumed}"
                )
            }
            Self::InvalidField { field, value } => {
                write!(f, "invalid value {value} for header field {field}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
