//! The three trailing `c s T` characters of a compressed position.
//!
//! `c` and `s` carry either course/speed, a pre-computed radio range or an
//! altitude; `T` is the compression type byte whose NMEA-source bits pick
//! the altitude form. A space in the `c` column means no data at all.

use serde::Serialize;

use crate::AprsError;
use crate::base91;

pub const NO_DATA: char = ' ';
pub const RANGE_MARKER: char = '{';

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressedExtension {
    /// Course in degrees and speed in knots.
    CourseSpeed { course: u16, speed: f64 },
    /// Pre-computed radio range in miles.
    Range { miles: f64 },
    /// Altitude in feet.
    Altitude { feet: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpsFix {
    Old,
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NmeaSource {
    Other,
    Gll,
    Gga,
    Rmc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompressionOrigin {
    Compressed,
    TncBText,
    Software,
    Tbd,
    Kpc3,
    Pico,
    OtherTracker,
    Digipeater,
}

/// Decoded compression type byte (`T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionType {
    pub gps_fix: GpsFix,
    pub nmea_source: NmeaSource,
    pub origin: CompressionOrigin,
}

impl CompressionType {
    pub fn from_bits(bits: u8) -> Self {
        let gps_fix = if bits & 0b10_0000 == 0 {
            GpsFix::Old
        } else {
            GpsFix::Current
        };
        let nmea_source = match (bits >> 3) & 0b11 {
            0b00 => NmeaSource::Other,
            0b01 => NmeaSource::Gll,
            0b10 => NmeaSource::Gga,
            _ => NmeaSource::Rmc,
        };
        let origin = match bits & 0b111 {
            0 => CompressionOrigin::Compressed,
            1 => CompressionOrigin::TncBText,
            2 => CompressionOrigin::Software,
            3 => CompressionOrigin::Tbd,
            4 => CompressionOrigin::Kpc3,
            5 => CompressionOrigin::Pico,
            6 => CompressionOrigin::OtherTracker,
            _ => CompressionOrigin::Digipeater,
        };

        Self {
            gps_fix,
            nmea_source,
            origin,
        }
    }
}

/// Everything carried by the `c s T` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompressedExtra {
    pub extension: Option<CompressedExtension>,
    pub compression_type: Option<CompressionType>,
}

impl CompressedExtra {
    pub const ABSENT: CompressedExtra = CompressedExtra {
        extension: None,
        compression_type: None,
    };
}

fn malformed(data: &str, offset: usize, character: char) -> AprsError {
    AprsError::MalformedExtension {
        input: data.to_owned(),
        offset,
        character,
    }
}

/// Decode the three extension characters.
///
/// Only characters outside printable ASCII are errors. Printable `c s T`
/// characters that are not base-91 digits carry no usable data and decode to
/// an absent extension, the same as the space placeholder.
pub fn decode_extra(data: &str) -> Result<CompressedExtra, AprsError> {
    let characters: Vec<char> = data.chars().collect();
    let [c, s, t] = characters[..] else {
        return Err(AprsError::InsufficientData {
            chunk: "compressed extension",
            needed: 3,
            available: characters.len(),
            input: data.to_owned(),
        });
    };

    if let Some((offset, &character)) = characters
        .iter()
        .enumerate()
        .find(|(_, ch)| !(' '..='~').contains(*ch))
    {
        return Err(malformed(data, offset, character));
    }

    if c == NO_DATA {
        return Ok(CompressedExtra::ABSENT);
    }

    let (Some(c_value), Some(s_value), Some(type_bits)) =
        (base91::digit(c), base91::digit(s), base91::digit(t))
    else {
        return Ok(CompressedExtra::ABSENT);
    };
    let compression_type = CompressionType::from_bits(type_bits as u8);

    let extension = if compression_type.nmea_source == NmeaSource::Gga {
        let exponent = c_value * base91::RADIX + s_value;
        CompressedExtension::Altitude {
            feet: 1.002f64.powi(exponent as i32),
        }
    } else if c == RANGE_MARKER {
        CompressedExtension::Range {
            miles: 2.0 * 1.08f64.powi(s_value as i32),
        }
    } else {
        CompressedExtension::CourseSpeed {
            course: (c_value * 4) as u16,
            speed: 1.08f64.powi(s_value as i32) - 1.0,
        }
    };

    Ok(CompressedExtra {
        extension: Some(extension),
        compression_type: Some(compression_type),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_and_speed() {
        let extra = decode_extra("7P[").unwrap();
        match extra.extension {
            Some(CompressedExtension::CourseSpeed { course, speed }) => {
                assert_eq!(course, 88);
                assert_relative_eq!(speed, 36.2, epsilon = 0.05);
            }
            other => panic!("Expected course/speed, got {other:?}"),
        }
        assert_eq!(
            extra.compression_type,
            Some(CompressionType {
                gps_fix: GpsFix::Current,
                nmea_source: NmeaSource::Rmc,
                origin: CompressionOrigin::Software,
            })
        );
    }

    #[test]
    fn radio_range() {
        match decode_extra("{?!").unwrap().extension {
            Some(CompressedExtension::Range { miles }) => {
                assert_relative_eq!(miles, 20.13, epsilon = 0.01);
            }
            other => panic!("Expected range, got {other:?}"),
        }
    }

    #[test]
    fn altitude_from_gga_source() {
        let extra = decode_extra("S]S").unwrap();
        match extra.extension {
            Some(CompressedExtension::Altitude { feet }) => {
                assert_relative_eq!(feet, 10004.0, epsilon = 1.0);
            }
            other => panic!("Expected altitude, got {other:?}"),
        }
        assert_eq!(
            extra.compression_type.map(|t| t.nmea_source),
            Some(NmeaSource::Gga)
        );
    }

    #[test]
    fn no_data_placeholder() {
        assert_eq!(
            decode_extra("   "),
            Ok(CompressedExtra {
                extension: None,
                compression_type: None,
            })
        );
        assert_eq!(decode_extra(" sT").unwrap().extension, None);
    }

    #[test]
    fn out_of_range_characters() {
        assert_eq!(
            decode_extra("7\u{7f}["),
            Err(AprsError::MalformedExtension {
                input: "7\u{7f}[".to_owned(),
                offset: 1,
                character: '\u{7f}',
            })
        );
        assert_eq!(
            decode_extra("é7["),
            Err(AprsError::MalformedExtension {
                input: "é7[".to_owned(),
                offset: 0,
                character: 'é',
            })
        );
    }

    #[test]
    fn printable_non_digits_are_absent() {
        for extra in ["7}[", "|P[", "7P ", "~~~", "7P}"] {
            assert_eq!(decode_extra(extra), Ok(CompressedExtra::ABSENT), "{extra:?}");
        }
    }

    #[test]
    fn wrong_width() {
        assert!(matches!(
            decode_extra("7P"),
            Err(AprsError::InsufficientData { needed: 3, available: 2, .. })
        ));
    }
}
