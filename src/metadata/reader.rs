use bytes::Bytes;
use tracing::{debug, trace};

use crate::error::{ExifError, ExifResult};
use crate::ifd::{IfdEntry, ImageFileDirectory, RootDirectory};
use crate::options::DecodeOptions;
use crate::reader::{EndianAwareReader, Endianness};
use crate::tiff::tags::Type;
use crate::tiff::Value;

/// The APP1 signature that precedes the TIFF header.
pub const EXIF_SIGNATURE: &[u8; 6] = b"Exif\0\0";

/// Segment position of the TIFF header. Offsets stored in the EXIF data are relative to it.
pub const TIFF_HEADER_START: usize = 10;

const SIGNATURE_POSITION: usize = 4;
const BYTE_ORDER_POSITION: usize = TIFF_HEADER_START;
const TAG_MARK_POSITION: usize = 12;
const ROOT_OFFSET_POSITION: usize = 14;

/// The TIFF magic number.
const TIFF_TAG_MARK: u16 = 42;

// Tag   2 bytes
// Type  2 bytes
// Count 4 bytes
// Value 4 bytes, either the value itself or an offset to it
const IFD_ENTRY_BYTE_SIZE: usize = 12;
const TAG_COUNT_BYTE_SIZE: usize = 2;
const INLINE_VALUE_BYTE_SIZE: u64 = 4;

/// Entry point to reading EXIF metadata out of an APP1 segment.
///
/// [`try_open`](Self::try_open) validates the header and detects the byte order; directories are
/// read on demand afterwards.
///
/// ```
/// use exif_ifd::metadata::ExifMetadataReader;
/// use exif_ifd::reader::Endianness;
///
/// let segment = b"\xff\xe1\x00\x18Exif\0\0MM\0\x2a\0\0\0\x08\0\0\0\0\0\0".to_vec();
/// let metadata = ExifMetadataReader::try_open(segment.into()).unwrap();
/// assert_eq!(metadata.endianness(), Endianness::BigEndian);
/// assert_eq!(metadata.root_ifd_offset(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct ExifMetadataReader {
    reader: EndianAwareReader,
    root_ifd_offset: u32,
}

impl ExifMetadataReader {
    /// Validate the signature, the byte order marker and the TIFF magic number, in that order,
    /// and read the offset of the root directory.
    pub fn try_open(segment: Bytes) -> ExifResult<Self> {
        // The byte order is not known yet; the signature and the palindromic markers read the
        // same either way.
        let unordered = EndianAwareReader::new(segment, Endianness::BigEndian);

        let signature = unordered.bytes(SIGNATURE_POSITION, EXIF_SIGNATURE.len())?;
        if signature != EXIF_SIGNATURE {
            return Err(ExifError::InvalidHeader {
                actual: signature.to_vec(),
            });
        }

        let marker = unordered.read_u16(BYTE_ORDER_POSITION)?;
        let endianness = Endianness::from_marker(marker)?;
        debug!(?endianness, "detected byte order");

        let (segment, _) = unordered.into_inner();
        let reader = EndianAwareReader::new(segment, endianness);

        let tag_mark = reader.read_u16(TAG_MARK_POSITION)?;
        if tag_mark != TIFF_TAG_MARK {
            return Err(ExifError::InvalidTagMark {
                expected: TIFF_TAG_MARK,
                actual: tag_mark,
            });
        }

        let root_ifd_offset = reader.read_u32(ROOT_OFFSET_POSITION)?;

        Ok(Self {
            reader,
            root_ifd_offset,
        })
    }

    /// Returns the byte order of the segment.
    pub fn endianness(&self) -> Endianness {
        self.reader.endianness()
    }

    /// TIFF-relative offset of the root directory (IFD0).
    pub fn root_ifd_offset(&self) -> u32 {
        self.root_ifd_offset
    }

    /// Read IFD0 together with the offsets of the directories linked from it.
    pub fn read_root_directory(&self, options: &DecodeOptions) -> ExifResult<RootDirectory> {
        let ifd_reader =
            ImageFileDirectoryReader::open(&self.reader, self.root_ifd_offset, options)?;
        let entries = ifd_reader.read()?;
        let next_ifd_offset = ifd_reader.finish()?;
        Ok(RootDirectory::from_entries(entries, next_ifd_offset))
    }

    /// Read the directory at the TIFF-relative `offset`. Any link to a following directory is
    /// ignored.
    pub fn read_directory(
        &self,
        offset: u32,
        options: &DecodeOptions,
    ) -> ExifResult<ImageFileDirectory> {
        let ifd_reader = ImageFileDirectoryReader::open(&self.reader, offset, options)?;
        Ok(ImageFileDirectory::from_entries(ifd_reader.read()?))
    }

    /// Zero-copy slice of `length` bytes at the TIFF-relative `offset`.
    pub fn slice(&self, offset: u32, length: u32) -> ExifResult<Bytes> {
        self.reader.slice(tiff_position(offset), length as usize)
    }
}

/// Convert a TIFF-relative offset into a segment position.
fn tiff_position(offset: u32) -> usize {
    (offset as usize).saturating_add(TIFF_HEADER_START)
}

/// Reads the entries of one directory.
///
/// The entry table is checked to lie inside the segment before any entry is decoded. Call
/// [`finish`][Self::finish] to read the offset of the following directory.
pub(crate) struct ImageFileDirectoryReader<'a> {
    reader: &'a EndianAwareReader,
    /// Segment position of the entry count
    ifd_start: usize,
    /// The number of entries in this IFD
    tag_count: usize,
}

impl<'a> ImageFileDirectoryReader<'a> {
    pub(crate) fn open(
        reader: &'a EndianAwareReader,
        ifd_offset: u32,
        options: &DecodeOptions,
    ) -> ExifResult<Self> {
        let ifd_start = tiff_position(ifd_offset);
        let tag_count = reader.read_u16(ifd_start)? as usize;
        if tag_count > options.max_entries {
            return Err(ExifError::TooManyEntries {
                offset: ifd_start,
                count: tag_count,
                limit: options.max_entries,
            });
        }
        reader.bytes(ifd_start + TAG_COUNT_BYTE_SIZE, tag_count * IFD_ENTRY_BYTE_SIZE)?;
        debug!(ifd_offset, tag_count, "reading directory");

        Ok(Self {
            reader,
            ifd_start,
            tag_count,
        })
    }

    /// Read the entry with the specified index.
    pub(crate) fn read_tag(&self, tag_idx: usize) -> ExifResult<IfdEntry> {
        let entry_position = self.ifd_start + TAG_COUNT_BYTE_SIZE + IFD_ENTRY_BYTE_SIZE * tag_idx;
        read_tag(self.reader, entry_position)
    }

    /// Read all entries in file order.
    pub(crate) fn read(&self) -> ExifResult<Vec<IfdEntry>> {
        (0..self.tag_count).map(|idx| self.read_tag(idx)).collect()
    }

    /// Read the TIFF-relative offset of the next directory, `None` if it is zero.
    pub(crate) fn finish(self) -> ExifResult<Option<u32>> {
        let next_ifd_position =
            self.ifd_start + TAG_COUNT_BYTE_SIZE + IFD_ENTRY_BYTE_SIZE * self.tag_count;
        let next_ifd_offset = self.reader.read_u32(next_ifd_position)?;
        Ok((next_ifd_offset != 0).then_some(next_ifd_offset))
    }
}

/// Decode the 12-byte entry at `entry_position`.
pub(crate) fn read_tag(reader: &EndianAwareReader, entry_position: usize) -> ExifResult<IfdEntry> {
    let tag = reader.read_u16(entry_position)?;
    let format = reader.read_u16(entry_position + 2)?;
    let count = reader.read_u32(entry_position + 4)?;
    let value_position = entry_position + 8;

    let value = match Type::from_u16(format) {
        Some(tag_type) => read_tag_value(reader, tag_type, count, value_position)?,
        None => {
            let mut raw = [0; 4];
            raw.copy_from_slice(reader.bytes(value_position, 4)?);
            Value::Unsupported { format, raw }
        }
    };
    trace!(tag, format, count, ?value, "decoded entry");

    Ok(IfdEntry {
        tag,
        format,
        count,
        value,
    })
}

/// Decode `count` components of `tag_type`, inline from the value field when they fit in its
/// 4 bytes and from the TIFF-relative offset stored there otherwise.
fn read_tag_value(
    reader: &EndianAwareReader,
    tag_type: Type,
    count: u32,
    value_position: usize,
) -> ExifResult<Value> {
    if count == 0 {
        return Ok(match tag_type {
            Type::ASCII => Value::Ascii(String::new()),
            _ => Value::List(vec![]),
        });
    }

    let value_byte_length = u64::from(count) * tag_type.size() as u64;
    let data_position = if value_byte_length <= INLINE_VALUE_BYTE_SIZE {
        value_position
    } else {
        tiff_position(reader.read_u32(value_position)?)
    };

    let out_of_range = || ExifError::OutOfRange {
        offset: data_position as u64,
        length: value_byte_length,
        size: reader.len() as u64,
    };
    let value_byte_length = usize::try_from(value_byte_length).map_err(|_| out_of_range())?;
    reader
        .bytes(data_position, value_byte_length)
        .map_err(|_| out_of_range())?;

    if tag_type == Type::ASCII {
        let s = reader.read_string(data_position, value_byte_length)?;
        return Ok(Value::Ascii(s.trim_end_matches('\0').to_string()));
    }

    if count == 1 {
        return read_component(reader, tag_type, data_position);
    }

    let size = tag_type.size();
    let values = (0..count as usize)
        .map(|idx| read_component(reader, tag_type, data_position + idx * size))
        .collect::<ExifResult<Vec<_>>>()?;
    Ok(Value::List(values))
}

fn read_component(
    reader: &EndianAwareReader,
    tag_type: Type,
    position: usize,
) -> ExifResult<Value> {
    Ok(match tag_type {
        Type::BYTE | Type::UNDEFINED => Value::Byte(reader.read_u8(position)?),
        Type::SBYTE => Value::SignedByte(reader.read_i8(position)?),
        Type::SHORT => Value::Short(reader.read_u16(position)?),
        Type::SSHORT => Value::SignedShort(reader.read_i16(position)?),
        Type::LONG => Value::Unsigned(reader.read_u32(position)?),
        Type::SLONG => Value::Signed(reader.read_i32(position)?),
        Type::FLOAT => Value::Float(reader.read_f32(position)?),
        Type::DOUBLE => Value::Double(reader.read_f64(position)?),
        Type::IFD => Value::Ifd(reader.read_u32(position)?),
        Type::RATIONAL => Value::Rational(
            reader.read_u32(position)?,
            reader.read_u32(position + 4)?,
        ),
        Type::SRATIONAL => Value::SRational(
            reader.read_i32(position)?,
            reader.read_i32(position + 4)?,
        ),
        Type::ASCII => unreachable!("ASCII values are decoded as a whole string"),
    })
}
