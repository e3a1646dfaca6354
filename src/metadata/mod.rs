//! API for reading the directories out of an EXIF segment.
//!
//! [`Exif`](crate::Exif) is built on top of [`ExifMetadataReader`], which can also be used
//! directly to walk directories the document does not follow:
//!
//! ```
//! use exif_ifd::metadata::ExifMetadataReader;
//! use exif_ifd::DecodeOptions;
//!
//! // An empty little-endian root directory.
//! let segment = b"\xff\xe1\x00\x18Exif\0\0II\x2a\0\x08\0\0\0\0\0\0\0\0\0".to_vec();
//! let metadata = ExifMetadataReader::try_open(segment.into()).unwrap();
//! let root = metadata
//!     .read_root_directory(&DecodeOptions::default())
//!     .unwrap();
//! assert!(root.ifd().is_empty());
//! assert_eq!(root.next_ifd_offset(), None);
//! ```

mod reader;

pub use reader::{ExifMetadataReader, EXIF_SIGNATURE, TIFF_HEADER_START};
