use crate::tiff::tags::{ImageTag, Type};
use crate::tiff::Value;

/// A single decoded directory entry.
#[derive(Debug, Clone, PartialEq)]
pub struct IfdEntry {
    pub(crate) tag: u16,
    pub(crate) format: u16,
    pub(crate) count: u32,
    pub(crate) value: Value,
}

impl IfdEntry {
    /// The numeric tag id.
    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// The raw format code.
    pub fn format(&self) -> u16 {
        self.format
    }

    /// The format code as a known [`Type`], or `None` for unsupported codes.
    pub fn field_type(&self) -> Option<Type> {
        Type::from_u16(self.format)
    }

    /// The number of components.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The decoded value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An Image File Directory: its entries in file order.
///
/// Entries with unknown tag ids or unsupported formats are kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageFileDirectory {
    entries: Vec<IfdEntry>,
}

impl ImageFileDirectory {
    pub(crate) fn from_entries(entries: Vec<IfdEntry>) -> Self {
        Self { entries }
    }

    /// All entries in file order.
    pub fn entries(&self) -> &[IfdEntry] {
        &self.entries
    }

    /// The first entry with the given tag id.
    pub fn get(&self, tag: u16) -> Option<&IfdEntry> {
        self.entries.iter().find(|entry| entry.tag == tag)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value of `tag` as a non-zero unsigned integer.
    pub(crate) fn non_zero_u32(&self, tag: ImageTag) -> Option<u32> {
        self.get(tag.to_u16())
            .and_then(|entry| entry.value.as_u32())
            .filter(|value| *value > 0)
    }
}

/// The root directory (IFD0) and the directories it links to.
#[derive(Debug, Clone, PartialEq)]
pub struct RootDirectory {
    ifd: ImageFileDirectory,
    next_ifd_offset: Option<u32>,
    exif_ifd_offset: Option<u32>,
    gps_ifd_offset: Option<u32>,
}

impl RootDirectory {
    pub(crate) fn from_entries(entries: Vec<IfdEntry>, next_ifd_offset: Option<u32>) -> Self {
        let ifd = ImageFileDirectory::from_entries(entries);
        let exif_ifd_offset = ifd.non_zero_u32(ImageTag::ExifIFDPointer);
        let gps_ifd_offset = ifd.non_zero_u32(ImageTag::GPSInfoIFDPointer);
        Self {
            ifd,
            next_ifd_offset: next_ifd_offset.filter(|offset| *offset > 0),
            exif_ifd_offset,
            gps_ifd_offset,
        }
    }

    /// The directory itself.
    pub fn ifd(&self) -> &ImageFileDirectory {
        &self.ifd
    }

    /// TIFF-relative offset of the thumbnail directory (IFD1).
    pub fn next_ifd_offset(&self) -> Option<u32> {
        self.next_ifd_offset
    }

    /// TIFF-relative offset of the EXIF sub-directory.
    pub fn exif_ifd_offset(&self) -> Option<u32> {
        self.exif_ifd_offset
    }

    /// TIFF-relative offset of the GPS sub-directory.
    pub fn gps_ifd_offset(&self) -> Option<u32> {
        self.gps_ifd_offset
    }
}

impl AsRef<ImageFileDirectory> for RootDirectory {
    fn as_ref(&self) -> &ImageFileDirectory {
        &self.ifd
    }
}
