//! Static tables mapping numeric field types and tag ids to their names.
//!
//! Tag names follow the EXIF 2.32 specification and are used verbatim as summary keys.

use num_enum::TryFromPrimitive;

macro_rules! tags {
    {
        $(#[$enum_attr:meta])*
        $vis:vis enum $name:ident {
            $($tag:ident = $val:expr,)*
        }
    } => {
        $(#[$enum_attr])*
        #[allow(missing_docs)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
        #[repr(u16)]
        $vis enum $name {
            $($tag = $val,)*
        }

        impl TagTable for $name {
            fn lookup(code: u16) -> Option<Self> {
                Self::from_u16(code)
            }

            fn tag_name(self) -> &'static str {
                self.name()
            }
        }

        impl $name {
            /// Look up a tag by its numeric id, returning `None` for ids without a known name.
            pub fn from_u16(code: u16) -> Option<Self> {
                Self::try_from_primitive(code).ok()
            }

            /// The numeric tag id.
            pub fn to_u16(self) -> u16 {
                self as u16
            }

            /// Human-readable tag name.
            pub fn name(self) -> &'static str {
                match self {
                    $($name::$tag => stringify!($tag),)*
                }
            }
        }
    };
}

/// A static table of tag ids with human-readable names.
pub trait TagTable: Copy {
    /// Look up a tag by id; `None` means the id is not in this table.
    fn lookup(code: u16) -> Option<Self>;

    /// The summary key for this tag.
    fn tag_name(self) -> &'static str;
}

/// The type of an IFD entry's value (the "format" field).
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
#[repr(u16)]
pub enum Type {
    /// 8-bit unsigned integer
    BYTE = 1,
    /// 8-bit byte that contains a 7-bit ASCII code; the last byte must be zero
    ASCII = 2,
    /// 16-bit unsigned integer
    SHORT = 3,
    /// 32-bit unsigned integer
    LONG = 4,
    /// Fraction stored as two 32-bit unsigned integers
    RATIONAL = 5,
    /// 8-bit signed integer
    SBYTE = 6,
    /// 8-bit byte that may contain anything, depending on the field
    UNDEFINED = 7,
    /// 16-bit signed integer
    SSHORT = 8,
    /// 32-bit signed integer
    SLONG = 9,
    /// Fraction stored as two 32-bit signed integers
    SRATIONAL = 10,
    /// 32-bit IEEE floating point
    FLOAT = 11,
    /// 64-bit IEEE floating point
    DOUBLE = 12,
    /// 32-bit offset to a child IFD
    IFD = 13,
}

impl Type {
    /// Look up a field type by its format code.
    pub fn from_u16(code: u16) -> Option<Self> {
        Self::try_from_primitive(code).ok()
    }

    /// Size in bytes of a single component of this type.
    pub fn size(self) -> usize {
        match self {
            Type::BYTE | Type::SBYTE | Type::ASCII | Type::UNDEFINED => 1,
            Type::SHORT | Type::SSHORT => 2,
            Type::LONG | Type::SLONG | Type::FLOAT | Type::IFD => 4,
            Type::RATIONAL | Type::SRATIONAL | Type::DOUBLE => 8,
        }
    }
}

tags! {
/// Tags of the primary image directory (IFD0) and the thumbnail directory (IFD1).
pub enum ImageTag {
    ImageWidth = 0x0100,
    ImageHeight = 0x0101,
    BitsPerSample = 0x0102,
    Compression = 0x0103,
    PhotometricInterpretation = 0x0106,
    ImageDescription = 0x010E,
    Make = 0x010F,
    Model = 0x0110,
    StripOffsets = 0x0111,
    Orientation = 0x0112,
    SamplesPerPixel = 0x0115,
    RowsPerStrip = 0x0116,
    StripByteCounts = 0x0117,
    XResolution = 0x011A,
    YResolution = 0x011B,
    PlanarConfiguration = 0x011C,
    ResolutionUnit = 0x0128,
    TransferFunction = 0x012D,
    Software = 0x0131,
    DateTime = 0x0132,
    Artist = 0x013B,
    HostComputer = 0x013C,
    WhitePoint = 0x013E,
    PrimaryChromaticities = 0x013F,
    JPEGInterchangeFormat = 0x0201,
    JPEGInterchangeFormatLength = 0x0202,
    YCbCrCoefficients = 0x0211,
    YCbCrSubSampling = 0x0212,
    YCbCrPositioning = 0x0213,
    ReferenceBlackWhite = 0x0214,
    Copyright = 0x8298,
    ExifIFDPointer = 0x8769,
    GPSInfoIFDPointer = 0x8825,
}
}

tags! {
/// Tags of the EXIF sub-directory.
pub enum ExifTag {
    ExposureTime = 0x829A,
    FNumber = 0x829D,
    ExposureProgram = 0x8822,
    SpectralSensitivity = 0x8824,
    ISOSpeedRatings = 0x8827,
    OECF = 0x8828,
    SensitivityType = 0x8830,
    ExifVersion = 0x9000,
    DateTimeOriginal = 0x9003,
    DateTimeDigitized = 0x9004,
    OffsetTime = 0x9010,
    OffsetTimeOriginal = 0x9011,
    OffsetTimeDigitized = 0x9012,
    ComponentsConfiguration = 0x9101,
    CompressedBitsPerPixel = 0x9102,
    ShutterSpeedValue = 0x9201,
    ApertureValue = 0x9202,
    BrightnessValue = 0x9203,
    ExposureBiasValue = 0x9204,
    MaxApertureValue = 0x9205,
    SubjectDistance = 0x9206,
    MeteringMode = 0x9207,
    LightSource = 0x9208,
    Flash = 0x9209,
    FocalLength = 0x920A,
    SubjectArea = 0x9214,
    MakerNote = 0x927C,
    UserComment = 0x9286,
    SubSecTime = 0x9290,
    SubSecTimeOriginal = 0x9291,
    SubSecTimeDigitized = 0x9292,
    FlashpixVersion = 0xA000,
    ColorSpace = 0xA001,
    PixelXDimension = 0xA002,
    PixelYDimension = 0xA003,
    RelatedSoundFile = 0xA004,
    InteroperabilityIFDPointer = 0xA005,
    FlashEnergy = 0xA20B,
    SpatialFrequencyResponse = 0xA20C,
    FocalPlaneXResolution = 0xA20E,
    FocalPlaneYResolution = 0xA20F,
    FocalPlaneResolutionUnit = 0xA210,
    SubjectLocation = 0xA214,
    ExposureIndex = 0xA215,
    SensingMethod = 0xA217,
    FileSource = 0xA300,
    SceneType = 0xA301,
    CFAPattern = 0xA302,
    CustomRendered = 0xA401,
    ExposureMode = 0xA402,
    WhiteBalance = 0xA403,
    DigitalZoomRatio = 0xA404,
    FocalLengthIn35mmFilm = 0xA405,
    SceneCaptureType = 0xA406,
    GainControl = 0xA407,
    Contrast = 0xA408,
    Saturation = 0xA409,
    Sharpness = 0xA40A,
    DeviceSettingDescription = 0xA40B,
    SubjectDistanceRange = 0xA40C,
    ImageUniqueID = 0xA420,
    CameraOwnerName = 0xA430,
    BodySerialNumber = 0xA431,
    LensSpecification = 0xA432,
    LensMake = 0xA433,
    LensModel = 0xA434,
    LensSerialNumber = 0xA435,
}
}

tags! {
/// Tags of the GPS sub-directory.
pub enum GpsTag {
    GPSVersionID = 0x00,
    GPSLatitudeRef = 0x01,
    GPSLatitude = 0x02,
    GPSLongitudeRef = 0x03,
    GPSLongitude = 0x04,
    GPSAltitudeRef = 0x05,
    GPSAltitude = 0x06,
    GPSTimeStamp = 0x07,
    GPSSatellites = 0x08,
    GPSStatus = 0x09,
    GPSMeasureMode = 0x0A,
    GPSDOP = 0x0B,
    GPSSpeedRef = 0x0C,
    GPSSpeed = 0x0D,
    GPSTrackRef = 0x0E,
    GPSTrack = 0x0F,
    GPSImgDirectionRef = 0x10,
    GPSImgDirection = 0x11,
    GPSMapDatum = 0x12,
    GPSDestLatitudeRef = 0x13,
    GPSDestLatitude = 0x14,
    GPSDestLongitudeRef = 0x15,
    GPSDestLongitude = 0x16,
    GPSDestBearingRef = 0x17,
    GPSDestBearing = 0x18,
    GPSDestDistanceRef = 0x19,
    GPSDestDistance = 0x1A,
    GPSProcessingMethod = 0x1B,
    GPSAreaInformation = 0x1C,
    GPSDateStamp = 0x1D,
    GPSDifferential = 0x1E,
    GPSHPositioningError = 0x1F,
}
}
