//! Compressed coordinate transformer.
//!
//! Compressed positions carry each axis as four characters of a 91-symbol
//! alphabet (`'!'` through `'{'`), most significant character first.

use crate::AprsError;

pub const ALPHABET_START: u8 = b'!';
pub const ALPHABET_END: u8 = b'{';
pub const RADIX: u32 = 91;

/// Encoded latitude units per degree.
pub const LATITUDE_DIVISOR: f64 = 380_926.0;
/// Encoded longitude units per degree.
pub const LONGITUDE_DIVISOR: f64 = 190_463.0;

/// Value of a single base-91 character, `None` outside the alphabet.
pub fn digit(character: char) -> Option<u32> {
    let code = u32::from(character);
    (u32::from(ALPHABET_START)..=u32::from(ALPHABET_END))
        .contains(&code)
        .then(|| code - u32::from(ALPHABET_START))
}

/// Decode a base-91 integer. Values that do not fit in a `u32` (more than
/// four characters) are rejected at the overflowing character.
pub fn decode_value(data: &str) -> Result<u32, AprsError> {
    data.chars().enumerate().try_fold(0u32, |acc, (offset, character)| {
        digit(character)
            .and_then(|value| acc.checked_mul(RADIX)?.checked_add(value))
            .ok_or_else(|| AprsError::MalformedCoordinate {
                input: data.to_owned(),
                offset,
                character,
            })
    })
}

fn axis(data: &str) -> Result<u32, AprsError> {
    const CHUNK: &str = "compressed coordinate";
    const WIDTH: usize = 4;

    let count = data.chars().count();
    if count < WIDTH {
        return Err(AprsError::InsufficientData {
            chunk: CHUNK,
            needed: WIDTH,
            available: count,
            input: data.to_owned(),
        });
    }
    if count > WIDTH {
        return Err(AprsError::malformed(CHUNK, WIDTH, data));
    }
    decode_value(data)
}

/// Decode four characters into decimal degrees latitude.
///
/// The highest few codes of the leading character overshoot the pole; those
/// are pinned to -90.
pub fn decode_latitude(data: &str) -> Result<f64, AprsError> {
    let value = axis(data)?;
    Ok((90.0 - f64::from(value) / LATITUDE_DIVISOR).clamp(-90.0, 90.0))
}

/// Decode four characters into decimal degrees longitude.
pub fn decode_longitude(data: &str) -> Result<f64, AprsError> {
    let value = axis(data)?;
    Ok((-180.0 + f64::from(value) / LONGITUDE_DIVISOR).clamp(-180.0, 180.0))
}
