//! Error handling.

use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ExifError {
    /// The segment does not carry the `Exif\0\0` signature at byte 4.
    #[error("Invalid EXIF header: expected \"Exif\\0\\0\", got {}", display_bytes(.actual))]
    InvalidHeader {
        /// The bytes found where the signature was expected.
        actual: Vec<u8>,
    },

    /// The byte order marker is neither `II` nor `MM`.
    #[error("Invalid byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// The TIFF magic number following the byte order marker is wrong.
    #[error("Invalid tag mark: expected {expected}, got {actual}")]
    InvalidTagMark {
        /// The TIFF magic number (42).
        expected: u16,
        /// The value read with the detected byte order.
        actual: u16,
    },

    /// A read would go past the end of the buffer.
    #[error("Out of range read: requested {length} bytes at offset {offset}, size is {size}")]
    OutOfRange {
        /// Start of the attempted read within the segment.
        offset: u64,
        /// Number of bytes requested.
        length: u64,
        /// Size of the segment.
        size: u64,
    },

    /// A directory declares more entries than the configured limit.
    #[error("Directory at offset {offset} declares {count} entries, limit is {limit}")]
    TooManyEntries {
        /// Segment position of the directory.
        offset: usize,
        /// Declared entry count.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },
}

fn display_bytes(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}

/// Crate-specific result type.
pub type ExifResult<T> = std::result::Result<T, ExifError>;
