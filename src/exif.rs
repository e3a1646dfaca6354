use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::{ExifError, ExifResult};
use crate::gps::format_gps;
use crate::ifd::{ImageFileDirectory, RootDirectory};
use crate::metadata::ExifMetadataReader;
use crate::options::{DecodeOptions, SubDirectoryPolicy};
use crate::reader::Endianness;
use crate::summary::Summary;
use crate::tiff::tags::{ExifTag, GpsTag, ImageTag, TagTable};
use crate::tiff::FieldValue;

/// A decoded EXIF segment.
///
/// All directories are decoded when the document is created; the summaries are recomputed from
/// the decoded entries on every call.
#[derive(Debug, Clone)]
pub struct Exif {
    metadata: ExifMetadataReader,
    primary: RootDirectory,
    thumbnail: Option<ImageFileDirectory>,
    exif: Option<ImageFileDirectory>,
    gps: Option<ImageFileDirectory>,
}

impl Exif {
    /// Decode an APP1 segment that starts at the `FF E1` marker, with default options.
    pub fn new(segment: impl Into<Bytes>) -> ExifResult<Self> {
        Self::with_options(segment, DecodeOptions::default())
    }

    /// Decode the `length` bytes at `offset` of a larger buffer, typically a whole JPEG file.
    pub fn from_segment(data: impl Into<Bytes>, offset: usize, length: usize) -> ExifResult<Self> {
        let data = data.into();
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= data.len())
            .ok_or(ExifError::OutOfRange {
                offset: offset as u64,
                length: length as u64,
                size: data.len() as u64,
            })?;
        Self::new(data.slice(offset..end))
    }

    /// Decode an APP1 segment.
    ///
    /// Header validation failures and errors while reading the root directory always abort.
    /// Errors in the thumbnail, EXIF and GPS directories are handled according to
    /// [`DecodeOptions::sub_directory_policy`].
    pub fn with_options(segment: impl Into<Bytes>, options: DecodeOptions) -> ExifResult<Self> {
        let metadata = ExifMetadataReader::try_open(segment.into())?;
        let primary = metadata.read_root_directory(&options)?;
        debug!(
            entries = primary.ifd().len(),
            thumbnail = ?primary.next_ifd_offset(),
            exif = ?primary.exif_ifd_offset(),
            gps = ?primary.gps_ifd_offset(),
            "decoded root directory"
        );

        let thumbnail = match primary.next_ifd_offset() {
            Some(offset) if options.follow_thumbnail => {
                read_sub_directory(&metadata, "thumbnail", offset, &options)?
            }
            _ => None,
        };
        let exif = match primary.exif_ifd_offset() {
            Some(offset) => read_sub_directory(&metadata, "exif", offset, &options)?,
            None => None,
        };
        let gps = match primary.gps_ifd_offset() {
            Some(offset) => read_sub_directory(&metadata, "gps", offset, &options)?,
            None => None,
        };

        Ok(Self {
            metadata,
            primary,
            thumbnail,
            exif,
            gps,
        })
    }

    /// Byte order of the segment.
    pub fn endianness(&self) -> Endianness {
        self.metadata.endianness()
    }

    /// The root directory (IFD0).
    pub fn primary_directory(&self) -> &RootDirectory {
        &self.primary
    }

    /// The thumbnail directory (IFD1), if present.
    pub fn thumbnail_directory(&self) -> Option<&ImageFileDirectory> {
        self.thumbnail.as_ref()
    }

    /// The EXIF sub-directory, if present.
    pub fn exif_directory(&self) -> Option<&ImageFileDirectory> {
        self.exif.as_ref()
    }

    /// The GPS sub-directory, if present.
    pub fn gps_directory(&self) -> Option<&ImageFileDirectory> {
        self.gps.as_ref()
    }

    /// Named fields of the primary image directory.
    ///
    /// The EXIF and GPS directory pointers are structural and are not reported; see
    /// [`RootDirectory::exif_ifd_offset`] and [`RootDirectory::gps_ifd_offset`].
    pub fn primary(&self) -> Option<Summary> {
        summarize::<ImageTag, _>(Some(self.primary.ifd()), image_field)
    }

    /// Named fields of the thumbnail directory.
    pub fn thumbnail(&self) -> Option<Summary> {
        summarize::<ImageTag, _>(self.thumbnail.as_ref(), image_field)
    }

    /// Named fields of the EXIF sub-directory.
    ///
    /// `None` when the directory is absent, and also when it was decoded but none of its entries
    /// has a known name and a representable value. The same holds for the other summaries.
    pub fn exif(&self) -> Option<Summary> {
        summarize::<ExifTag, _>(self.exif.as_ref(), passthrough)
    }

    /// Named fields of the GPS sub-directory, with coordinates in decimal degrees and the time
    /// stamp as `HH:MM:SS`.
    pub fn gps(&self) -> Option<Summary> {
        summarize::<GpsTag, _>(self.gps.as_ref(), format_gps)
    }

    /// The embedded JPEG thumbnail located by the thumbnail directory.
    pub fn thumbnail_image(&self) -> Option<Bytes> {
        let ifd = self.thumbnail.as_ref()?;
        let offset = ifd.non_zero_u32(ImageTag::JPEGInterchangeFormat)?;
        let length = ifd.non_zero_u32(ImageTag::JPEGInterchangeFormatLength)?;
        self.metadata.slice(offset, length).ok()
    }
}

fn read_sub_directory(
    metadata: &ExifMetadataReader,
    kind: &'static str,
    offset: u32,
    options: &DecodeOptions,
) -> ExifResult<Option<ImageFileDirectory>> {
    match metadata.read_directory(offset, options) {
        Ok(ifd) => {
            debug!(kind, offset, entries = ifd.len(), "decoded sub-directory");
            Ok(Some(ifd))
        }
        Err(err) => match options.sub_directory_policy {
            SubDirectoryPolicy::Strict => Err(err),
            SubDirectoryPolicy::Skip => {
                warn!(kind, offset, %err, "skipping unreadable sub-directory");
                Ok(None)
            }
        },
    }
}

fn passthrough<T>(_tag: T, value: FieldValue) -> Option<FieldValue> {
    Some(value)
}

fn image_field(tag: ImageTag, value: FieldValue) -> Option<FieldValue> {
    match tag {
        ImageTag::ExifIFDPointer | ImageTag::GPSInfoIFDPointer => None,
        _ => Some(value),
    }
}

/// `None` when the directory is absent or nothing in it has a known name.
fn summarize<T, F>(ifd: Option<&ImageFileDirectory>, format: F) -> Option<Summary>
where
    T: TagTable,
    F: Fn(T, FieldValue) -> Option<FieldValue>,
{
    let summary = Summary::build::<T, F>(ifd?, format);
    (!summary.is_empty()).then_some(summary)
}
