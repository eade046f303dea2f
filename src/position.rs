//! Position report chunkers.

use serde::Serialize;

use crate::AprsError;
use crate::base91;
use crate::chunk::{Chunk, Chunker, parse_digits, split_ascii, split_width};
use crate::compressed_extension::{CompressedExtension, CompressionType, decode_extra};
use crate::geo::{Cardinal, Coordinates, Latitude, Longitude};
use crate::symbols::{Symbol, symbol_of};

pub const COMPRESSED_WIDTH: usize = 13;
pub const UNCOMPRESSED_WIDTH: usize = 19;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum PositionReport {
    Compressed {
        coordinates: Coordinates,
        symbol: Symbol,
        extension: Option<CompressedExtension>,
        compression_type: Option<CompressionType>,
    },
    Uncompressed {
        coordinates: Coordinates,
        symbol: Symbol,
        /// Number of trailing digits blanked out by the sender (0-4).
        ambiguity: u8,
    },
}

impl PositionReport {
    pub fn coordinates(&self) -> &Coordinates {
        match self {
            Self::Compressed { coordinates, .. } | Self::Uncompressed { coordinates, .. } => {
                coordinates
            }
        }
    }

    pub fn symbol(&self) -> Symbol {
        match self {
            Self::Compressed { symbol, .. } | Self::Uncompressed { symbol, .. } => *symbol,
        }
    }
}

/// `/YYYYXXXX$csT`: table, latitude, longitude, code, extension.
pub struct CompressedPositionChunker;

impl Chunker for CompressedPositionChunker {
    type Output = PositionReport;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, PositionReport>, AprsError> {
        let (field, remaining) = split_width(data, COMPRESSED_WIDTH, "compressed position")?;
        let characters: Vec<char> = field.chars().collect();
        let axis = |range: std::ops::Range<usize>| -> String { characters[range].iter().collect() };

        let table_identifier = characters[0];
        let latitude = base91::decode_latitude(&axis(1..5))?;
        let longitude = base91::decode_longitude(&axis(5..9))?;
        let code_identifier = characters[9];
        let extra = decode_extra(&axis(10..13))?;

        Ok(Chunk::new(
            PositionReport::Compressed {
                coordinates: Coordinates::new(latitude, longitude),
                symbol: symbol_of(code_identifier, table_identifier),
                extension: extra.extension,
                compression_type: extra.compression_type,
            },
            remaining,
        ))
    }
}

/// `DDMM.hhN/DDDMM.hhW$`: latitude, table, longitude, code.
pub struct UncompressedPositionChunker;

struct Angle {
    degrees: u32,
    minutes: u32,
    seconds: f64,
    hemisphere: u8,
    ambiguity: u8,
}

/// Parse `D..DMM.hhX` where `degree_digits` leading digits are degrees.
/// Trailing digits may be blanked with spaces to signal ambiguity.
fn parse_angle(
    field: &str,
    degree_digits: usize,
    base_offset: usize,
    input: &str,
) -> Result<Angle, AprsError> {
    const CHUNK: &str = "uncompressed position";

    let bytes = field.as_bytes();
    let dot = degree_digits + 2;
    if bytes[dot] != b'.' {
        return Err(AprsError::malformed(CHUNK, base_offset + dot, input));
    }

    let minute_positions = [degree_digits, degree_digits + 1, dot + 1, dot + 2];
    let mut values = [0u32; 4];
    let mut ambiguity = 0u8;
    for (value, &position) in values.iter_mut().zip(&minute_positions) {
        *value = match bytes[position] {
            b' ' => {
                ambiguity += 1;
                0
            }
            digit @ b'0'..=b'9' if ambiguity == 0 => u32::from(digit - b'0'),
            _ => return Err(AprsError::malformed(CHUNK, base_offset + position, input)),
        };
    }

    let degrees = parse_digits(&field[..degree_digits], base_offset, CHUNK, input)?;
    let minutes = values[0] * 10 + values[1];
    let hundredths = values[2] * 10 + values[3];

    Ok(Angle {
        degrees,
        minutes,
        seconds: f64::from(hundredths * 60) / 100.0,
        hemisphere: bytes[dot + 3],
        ambiguity,
    })
}

impl Chunker for UncompressedPositionChunker {
    type Output = PositionReport;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, PositionReport>, AprsError> {
        const CHUNK: &str = "uncompressed position";

        let (field, remaining) = split_ascii(data, UNCOMPRESSED_WIDTH, CHUNK)?;
        let bytes = field.as_bytes();

        let latitude = parse_angle(&field[0..8], 2, 0, field)?;
        let latitude_cardinal = match latitude.hemisphere {
            b'N' | b'n' => Cardinal::North,
            b'S' | b's' => Cardinal::South,
            _ => return Err(AprsError::malformed(CHUNK, 7, field)),
        };

        let table_identifier = bytes[8] as char;

        let longitude = parse_angle(&field[9..18], 3, 9, field)?;
        let longitude_cardinal = match longitude.hemisphere {
            b'E' | b'e' => Cardinal::East,
            b'W' | b'w' => Cardinal::West,
            _ => return Err(AprsError::malformed(CHUNK, 17, field)),
        };

        let code_identifier = bytes[18] as char;

        let coordinates = Coordinates::from_lines(
            &Latitude::new(
                latitude.degrees,
                latitude.minutes,
                latitude.seconds,
                latitude_cardinal,
            ),
            &Longitude::new(
                longitude.degrees,
                longitude.minutes,
                longitude.seconds,
                longitude_cardinal,
            ),
        );

        Ok(Chunk::new(
            PositionReport::Uncompressed {
                coordinates,
                symbol: symbol_of(code_identifier, table_identifier),
                ambiguity: latitude.ambiguity,
            },
            remaining,
        ))
    }
}

/// Picks the uncompressed form when the position starts with a digit and the
/// compressed form otherwise.
pub struct PositionChunker;

impl Chunker for PositionChunker {
    type Output = PositionReport;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, PositionReport>, AprsError> {
        match data.chars().next() {
            Some(c) if c.is_ascii_digit() => UncompressedPositionChunker.pop_chunk(data),
            _ => CompressedPositionChunker.pop_chunk(data),
        }
    }
}
