#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
mod exif;
pub mod gps;
mod ifd;
pub mod metadata;
mod options;
pub mod reader;
mod summary;
pub mod tiff;

pub use error::{ExifError, ExifResult};
pub use exif::Exif;
pub use ifd::{IfdEntry, ImageFileDirectory, RootDirectory};
pub use options::{DecodeOptions, SubDirectoryPolicy};
pub use summary::Summary;
pub use tiff::{FieldValue, Value};
