//! Bounds-checked, endianness-aware reads over an EXIF segment.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use bytes::Bytes;

use crate::error::{ExifError, ExifResult};

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Little Endian
    LittleEndian,
    /// Big Endian
    BigEndian,
}

impl Endianness {
    /// Marker bytes `II` (Intel).
    pub const LITTLE_ENDIAN_MARKER: u16 = 0x4949;
    /// Marker bytes `MM` (Motorola).
    pub const BIG_ENDIAN_MARKER: u16 = 0x4D4D;

    /// Map a 2-byte byte order marker to an [`Endianness`].
    ///
    /// Both markers are palindromic, so the caller may read the marker in any byte order.
    pub fn from_marker(marker: u16) -> ExifResult<Self> {
        match marker {
            Self::LITTLE_ENDIAN_MARKER => Ok(Endianness::LittleEndian),
            Self::BIG_ENDIAN_MARKER => Ok(Endianness::BigEndian),
            other => Err(ExifError::InvalidByteOrder(other)),
        }
    }
}

/// A read-only view of an EXIF segment that decodes primitives at absolute positions.
///
/// Every read checks the requested range against the segment length and fails with
/// [`ExifError::OutOfRange`] instead of returning truncated data.
#[derive(Debug, Clone)]
pub(crate) struct EndianAwareReader {
    data: Bytes,
    endianness: Endianness,
}

impl EndianAwareReader {
    pub(crate) fn new(data: Bytes, endianness: Endianness) -> Self {
        Self { data, endianness }
    }

    pub(crate) fn into_inner(self) -> (Bytes, Endianness) {
        (self.data, self.endianness)
    }

    pub(crate) fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow `length` bytes starting at `offset`.
    pub(crate) fn bytes(&self, offset: usize, length: usize) -> ExifResult<&[u8]> {
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= self.data.len())
            .ok_or(ExifError::OutOfRange {
                offset: offset as u64,
                length: length as u64,
                size: self.data.len() as u64,
            })?;
        Ok(&self.data[offset..end])
    }

    /// Zero-copy slice of the underlying segment.
    pub(crate) fn slice(&self, offset: usize, length: usize) -> ExifResult<Bytes> {
        self.bytes(offset, length)?;
        Ok(self.data.slice(offset..offset + length))
    }

    pub(crate) fn read_u8(&self, offset: usize) -> ExifResult<u8> {
        Ok(self.bytes(offset, 1)?[0])
    }

    pub(crate) fn read_i8(&self, offset: usize) -> ExifResult<i8> {
        Ok(self.read_u8(offset)? as i8)
    }

    pub(crate) fn read_u16(&self, offset: usize) -> ExifResult<u16> {
        let buf = self.bytes(offset, 2)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_u16(buf),
            Endianness::BigEndian => BigEndian::read_u16(buf),
        })
    }

    pub(crate) fn read_i16(&self, offset: usize) -> ExifResult<i16> {
        let buf = self.bytes(offset, 2)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_i16(buf),
            Endianness::BigEndian => BigEndian::read_i16(buf),
        })
    }

    pub(crate) fn read_u32(&self, offset: usize) -> ExifResult<u32> {
        let buf = self.bytes(offset, 4)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_u32(buf),
            Endianness::BigEndian => BigEndian::read_u32(buf),
        })
    }

    pub(crate) fn read_i32(&self, offset: usize) -> ExifResult<i32> {
        let buf = self.bytes(offset, 4)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_i32(buf),
            Endianness::BigEndian => BigEndian::read_i32(buf),
        })
    }

    pub(crate) fn read_f32(&self, offset: usize) -> ExifResult<f32> {
        let buf = self.bytes(offset, 4)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_f32(buf),
            Endianness::BigEndian => BigEndian::read_f32(buf),
        })
    }

    pub(crate) fn read_f64(&self, offset: usize) -> ExifResult<f64> {
        let buf = self.bytes(offset, 8)?;
        Ok(match self.endianness {
            Endianness::LittleEndian => LittleEndian::read_f64(buf),
            Endianness::BigEndian => BigEndian::read_f64(buf),
        })
    }

    /// Read a fixed-length Latin-1 string. Every byte maps to the code point of the same value.
    pub(crate) fn read_string(&self, offset: usize, length: usize) -> ExifResult<String> {
        Ok(self.bytes(offset, length)?.iter().map(|b| *b as char).collect())
    }
}
