//! Builds synthetic APP1 EXIF segments.
#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use exif_ifd::reader::Endianness;

pub const EXIF_IFD_POINTER: u16 = 0x8769;
pub const GPS_IFD_POINTER: u16 = 0x8825;
pub const JPEG_INTERCHANGE_FORMAT: u16 = 0x0201;
pub const JPEG_INTERCHANGE_FORMAT_LENGTH: u16 = 0x0202;

/// An entry value together with its TIFF format.
#[derive(Debug, Clone)]
pub enum Field {
    Byte(Vec<u8>),
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<(u32, u32)>),
    SRational(Vec<(i32, i32)>),
    Undefined(Vec<u8>),
    /// Arbitrary format code, count and value bytes.
    Raw { format: u16, count: u32, bytes: Vec<u8> },
}

impl Field {
    pub fn ascii(s: &str) -> Self {
        Field::Ascii(s.to_string())
    }

    pub fn rationals(values: &[(u32, u32)]) -> Self {
        Field::Rational(values.to_vec())
    }

    fn encode(&self, endianness: Endianness) -> (u16, u32, Vec<u8>) {
        let mut out = Vec::new();
        let (format, count) = match self {
            Field::Byte(v) => {
                out.extend_from_slice(v);
                (1, v.len())
            }
            Field::Ascii(s) => {
                out.extend_from_slice(s.as_bytes());
                out.push(0);
                (2, s.len() + 1)
            }
            Field::Short(v) => {
                v.iter().for_each(|x| write_u16(&mut out, endianness, *x));
                (3, v.len())
            }
            Field::Long(v) => {
                v.iter().for_each(|x| write_u32(&mut out, endianness, *x));
                (4, v.len())
            }
            Field::Rational(v) => {
                v.iter().for_each(|(n, d)| {
                    write_u32(&mut out, endianness, *n);
                    write_u32(&mut out, endianness, *d);
                });
                (5, v.len())
            }
            Field::Undefined(v) => {
                out.extend_from_slice(v);
                (7, v.len())
            }
            Field::SRational(v) => {
                v.iter().for_each(|(n, d)| {
                    write_i32(&mut out, endianness, *n);
                    write_i32(&mut out, endianness, *d);
                });
                (10, v.len())
            }
            Field::Raw {
                format,
                count,
                bytes,
            } => {
                out.extend_from_slice(bytes);
                (*format, *count as usize)
            }
        };
        (format, count as u32, out)
    }
}

fn write_u16(buf: &mut Vec<u8>, endianness: Endianness, value: u16) {
    let written = match endianness {
        Endianness::LittleEndian => buf.write_u16::<LittleEndian>(value),
        Endianness::BigEndian => buf.write_u16::<BigEndian>(value),
    };
    written.unwrap();
}

fn write_u32(buf: &mut Vec<u8>, endianness: Endianness, value: u32) {
    let written = match endianness {
        Endianness::LittleEndian => buf.write_u32::<LittleEndian>(value),
        Endianness::BigEndian => buf.write_u32::<BigEndian>(value),
    };
    written.unwrap();
}

fn write_i32(buf: &mut Vec<u8>, endianness: Endianness, value: i32) {
    let written = match endianness {
        Endianness::LittleEndian => buf.write_i32::<LittleEndian>(value),
        Endianness::BigEndian => buf.write_i32::<BigEndian>(value),
    };
    written.unwrap();
}

type Entries = Vec<(u16, Field)>;

/// Lays out IFD0, then IFD1, the EXIF and GPS directories and the thumbnail, each directory
/// followed by its out-of-line values. All offsets are relative to the TIFF header.
#[derive(Debug, Clone)]
pub struct ExifBuilder {
    endianness: Endianness,
    ifd0: Entries,
    ifd1: Option<Entries>,
    exif: Option<Entries>,
    gps: Option<Entries>,
    thumbnail: Option<Vec<u8>>,
}

impl ExifBuilder {
    pub fn new(endianness: Endianness) -> Self {
        Self {
            endianness,
            ifd0: Vec::new(),
            ifd1: None,
            exif: None,
            gps: None,
            thumbnail: None,
        }
    }

    pub fn big_endian() -> Self {
        Self::new(Endianness::BigEndian)
    }

    pub fn little_endian() -> Self {
        Self::new(Endianness::LittleEndian)
    }

    pub fn primary(mut self, tag: u16, field: Field) -> Self {
        self.ifd0.push((tag, field));
        self
    }

    pub fn thumbnail(mut self, tag: u16, field: Field) -> Self {
        self.ifd1.get_or_insert_with(Vec::new).push((tag, field));
        self
    }

    pub fn thumbnail_jpeg(mut self, jpeg: &[u8]) -> Self {
        self.ifd1.get_or_insert_with(Vec::new);
        self.thumbnail = Some(jpeg.to_vec());
        self
    }

    pub fn exif(mut self, tag: u16, field: Field) -> Self {
        self.exif.get_or_insert_with(Vec::new).push((tag, field));
        self
    }

    pub fn gps(mut self, tag: u16, field: Field) -> Self {
        self.gps.get_or_insert_with(Vec::new).push((tag, field));
        self
    }

    /// The TIFF structure alone, starting at the byte order marker.
    pub fn build_tiff(&self) -> Vec<u8> {
        let mut ifd0 = self.ifd0.clone();
        let mut ifd1 = self.ifd1.clone();
        if self.exif.is_some() {
            ifd0.push((EXIF_IFD_POINTER, Field::Long(vec![0])));
        }
        if self.gps.is_some() {
            ifd0.push((GPS_IFD_POINTER, Field::Long(vec![0])));
        }
        if let (Some(entries), Some(jpeg)) = (ifd1.as_mut(), self.thumbnail.as_ref()) {
            entries.push((JPEG_INTERCHANGE_FORMAT, Field::Long(vec![0])));
            entries.push((
                JPEG_INTERCHANGE_FORMAT_LENGTH,
                Field::Long(vec![jpeg.len() as u32]),
            ));
        }

        let mut next = 8 + self.encode_dir(&ifd0, 0, 0).len() as u32;
        let mut place = |entries: Option<&Entries>| {
            entries.map(|entries| {
                let offset = next;
                next += self.encode_dir(entries, 0, 0).len() as u32;
                offset
            })
        };
        let ifd1_offset = place(ifd1.as_ref());
        let exif_offset = place(self.exif.as_ref());
        let gps_offset = place(self.gps.as_ref());
        let thumbnail_offset = next;

        set_pointer(&mut ifd0, EXIF_IFD_POINTER, exif_offset);
        set_pointer(&mut ifd0, GPS_IFD_POINTER, gps_offset);
        if let Some(entries) = ifd1.as_mut() {
            if self.thumbnail.is_some() {
                set_pointer(entries, JPEG_INTERCHANGE_FORMAT, Some(thumbnail_offset));
            }
        }

        let mut out = Vec::new();
        out.extend_from_slice(match self.endianness {
            Endianness::LittleEndian => b"II",
            Endianness::BigEndian => b"MM",
        });
        write_u16(&mut out, self.endianness, 42);
        write_u32(&mut out, self.endianness, 8);
        out.extend(self.encode_dir(&ifd0, 8, ifd1_offset.unwrap_or(0)));
        if let (Some(entries), Some(offset)) = (ifd1.as_ref(), ifd1_offset) {
            out.extend(self.encode_dir(entries, offset, 0));
        }
        if let (Some(entries), Some(offset)) = (self.exif.as_ref(), exif_offset) {
            out.extend(self.encode_dir(entries, offset, 0));
        }
        if let (Some(entries), Some(offset)) = (self.gps.as_ref(), gps_offset) {
            out.extend(self.encode_dir(entries, offset, 0));
        }
        if let Some(jpeg) = self.thumbnail.as_ref() {
            out.extend_from_slice(jpeg);
        }
        out
    }

    /// A complete APP1 segment: marker, length, signature and TIFF structure.
    pub fn build(&self) -> Vec<u8> {
        wrap_tiff(&self.build_tiff())
    }

    fn encode_dir(&self, entries: &Entries, start: u32, next_ifd: u32) -> Vec<u8> {
        let table_len = 2 + 12 * entries.len() as u32 + 4;
        let endianness = self.endianness;
        let mut dir = Vec::new();
        let mut data = Vec::new();
        write_u16(&mut dir, endianness, entries.len() as u16);
        for (tag, field) in entries {
            let (format, count, mut bytes) = field.encode(endianness);
            write_u16(&mut dir, endianness, *tag);
            write_u16(&mut dir, endianness, format);
            write_u32(&mut dir, endianness, count);
            if bytes.len() <= 4 {
                bytes.resize(4, 0);
                dir.extend_from_slice(&bytes);
            } else {
                write_u32(&mut dir, endianness, start + table_len + data.len() as u32);
                data.extend_from_slice(&bytes);
                if data.len() % 2 == 1 {
                    data.push(0);
                }
            }
        }
        write_u32(&mut dir, endianness, next_ifd);
        dir.extend_from_slice(&data);
        dir
    }
}

fn set_pointer(entries: &mut Entries, tag: u16, offset: Option<u32>) {
    if let (Some((_, field)), Some(offset)) =
        (entries.iter_mut().find(|(t, _)| *t == tag), offset)
    {
        *field = Field::Long(vec![offset]);
    }
}

/// Prefix a TIFF structure with the APP1 marker, segment length and `Exif\0\0`.
pub fn wrap_tiff(tiff: &[u8]) -> Vec<u8> {
    let mut segment = vec![0xFF, 0xE1];
    // JPEG segment lengths are always big-endian.
    segment
        .write_u16::<BigEndian>((2 + 6 + tiff.len()) as u16)
        .unwrap();
    segment.extend_from_slice(b"Exif\0\0");
    segment.extend_from_slice(tiff);
    segment
}
