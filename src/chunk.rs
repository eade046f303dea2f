//! Left-to-right chunk parsing.
//!
//! Every decoder in this crate peels a known-shape prefix off the remaining
//! input and hands back the rest as a borrowed sub-slice, so a packet body is
//! consumed without copying and without backtracking.

use crate::AprsError;

/// A decoded value plus the input that is left after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk<'a, T> {
    pub result: T,
    pub remaining: &'a str,
}

impl<'a, T> Chunk<'a, T> {
    pub fn new(result: T, remaining: &'a str) -> Self {
        Self { result, remaining }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Chunk<'a, U> {
        Chunk {
            result: f(self.result),
            remaining: self.remaining,
        }
    }
}

pub trait Chunker {
    type Output;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, Self::Output>, AprsError>;
}

/// Split `width` characters off the front of `data`.
pub(crate) fn split_width<'a>(
    data: &'a str,
    width: usize,
    chunk: &'static str,
) -> Result<(&'a str, &'a str), AprsError> {
    let end = match data.char_indices().nth(width) {
        Some((index, _)) => index,
        None => {
            let available = data.chars().count();
            if available < width {
                return Err(AprsError::InsufficientData {
                    chunk,
                    needed: width,
                    available,
                    input: data.to_owned(),
                });
            }
            data.len()
        }
    };

    Ok(data.split_at(end))
}

/// Split `width` characters off the front of `data`, requiring all of them to
/// be ASCII so callers can index bytes directly.
pub(crate) fn split_ascii<'a>(
    data: &'a str,
    width: usize,
    chunk: &'static str,
) -> Result<(&'a str, &'a str), AprsError> {
    let (head, rest) = split_width(data, width, chunk)?;
    if let Some(offset) = head.bytes().position(|b| !b.is_ascii()) {
        return Err(AprsError::malformed(chunk, offset, head));
    }
    Ok((head, rest))
}

/// Parse an all-digit ASCII field, reporting the offending offset otherwise.
pub(crate) fn parse_digits(
    field: &str,
    base_offset: usize,
    chunk: &'static str,
    input: &str,
) -> Result<u32, AprsError> {
    field.bytes().enumerate().try_fold(0u32, |acc, (i, b)| {
        if b.is_ascii_digit() {
            Ok(acc * 10 + u32::from(b - b'0'))
        } else {
            Err(AprsError::malformed(chunk, base_offset + i, input))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_exact_width() {
        assert_eq!(split_width("abcdef", 3, "test"), Ok(("abc", "def")));
        assert_eq!(split_width("abc", 3, "test"), Ok(("abc", "")));
        assert_eq!(split_width("", 0, "test"), Ok(("", "")));
    }

    #[test]
    fn split_counts_characters_not_bytes() {
        assert_eq!(split_width("ééxyz", 2, "test"), Ok(("éé", "xyz")));
    }

    #[test]
    fn split_short_input() {
        assert_eq!(
            split_width("ab", 3, "test"),
            Err(AprsError::InsufficientData {
                chunk: "test",
                needed: 3,
                available: 2,
                input: "ab".to_owned(),
            })
        );
    }

    #[test]
    fn split_ascii_rejects_multibyte() {
        assert_eq!(
            split_ascii("aé", 2, "test"),
            Err(AprsError::malformed("test", 1, "aé"))
        );
    }

    #[test]
    fn digits() {
        assert_eq!(parse_digits("0042", 0, "test", "0042"), Ok(42));
        assert_eq!(
            parse_digits("4x", 3, "test", "___4x"),
            Err(AprsError::malformed("test", 4, "___4x"))
        );
    }

    #[test]
    fn chunk_map_keeps_remaining() {
        let chunk = Chunk::new(2, "rest").map(|n| n * 2);
        assert_eq!(chunk, Chunk::new(4, "rest"));
    }
}
