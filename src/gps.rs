//! Formatting applied to the GPS summary.

use crate::tiff::tags::GpsTag;
use crate::tiff::FieldValue;

/// Format a decoded GPS field.
///
/// Coordinates (`GPSLatitude`, `GPSLongitude`, `GPSDestLatitude`, `GPSDestLongitude`) become a
/// single decimal degree value and `GPSTimeStamp` becomes an `HH:MM:SS` string. Returns `None`
/// when the value does not have the shape the tag requires; every other tag passes through.
pub fn format_gps(tag: GpsTag, value: FieldValue) -> Option<FieldValue> {
    match tag {
        GpsTag::GPSLatitude
        | GpsTag::GPSLongitude
        | GpsTag::GPSDestLatitude
        | GpsTag::GPSDestLongitude => match value {
            FieldValue::Numbers(dms) => match dms[..] {
                [degrees, minutes, seconds] => Some(FieldValue::Number(dms_to_decimal(
                    degrees, minutes, seconds,
                ))),
                _ => None,
            },
            _ => None,
        },
        GpsTag::GPSTimeStamp => match value {
            FieldValue::Numbers(components) => {
                Some(FieldValue::Text(format_timestamp(&components)))
            }
            _ => None,
        },
        GpsTag::GPSVersionID
        | GpsTag::GPSLatitudeRef
        | GpsTag::GPSLongitudeRef
        | GpsTag::GPSAltitudeRef
        | GpsTag::GPSAltitude
        | GpsTag::GPSSatellites
        | GpsTag::GPSStatus
        | GpsTag::GPSMeasureMode
        | GpsTag::GPSDOP
        | GpsTag::GPSSpeedRef
        | GpsTag::GPSSpeed
        | GpsTag::GPSTrackRef
        | GpsTag::GPSTrack
        | GpsTag::GPSImgDirectionRef
        | GpsTag::GPSImgDirection
        | GpsTag::GPSMapDatum
        | GpsTag::GPSDestLatitudeRef
        | GpsTag::GPSDestLongitudeRef
        | GpsTag::GPSDestBearingRef
        | GpsTag::GPSDestBearing
        | GpsTag::GPSDestDistanceRef
        | GpsTag::GPSDestDistance
        | GpsTag::GPSProcessingMethod
        | GpsTag::GPSAreaInformation
        | GpsTag::GPSDateStamp
        | GpsTag::GPSDifferential
        | GpsTag::GPSHPositioningError => Some(value),
    }
}

/// `degrees + minutes / 60 + seconds / 3600`.
///
/// No range check is applied: `(0, 0, 3600)` is `1.0`.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}

/// Join the components with `:`, each zero-padded to two digits.
pub fn format_timestamp(components: &[f64]) -> String {
    components
        .iter()
        .map(|component| {
            if component.fract() == 0.0 {
                format!("{:02}", *component as i64)
            } else {
                format!("{component:02}")
            }
        })
        .collect::<Vec<_>>()
        .join(":")
}
