//! TIFF field types, tag tables and decoded values.

pub mod tags;
mod value;

pub use value::{FieldValue, Value};
