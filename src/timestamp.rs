use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::AprsError;
use crate::chunk::{Chunk, Chunker, parse_digits, split_ascii};

const WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Timestamp {
    /// Day, hour and minute in UTC (`DDHHMMz`)
    DDHHMM(u8, u8, u8),
    /// Day, hour and minute in the sender's local time (`DDHHMM/`)
    DDHHMMLocal(u8, u8, u8),
    /// Hour, minute and second in UTC (`HHMMSSh`)
    HHMMSS(u8, u8, u8),
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DDHHMM(d, h, m) => write!(f, "{d:02}{h:02}{m:02}z"),
            Self::DDHHMMLocal(d, h, m) => write!(f, "{d:02}{h:02}{m:02}/"),
            Self::HHMMSS(h, m, s) => write!(f, "{h:02}{m:02}{s:02}h"),
        }
    }
}

pub struct TimestampChunker;

impl Chunker for TimestampChunker {
    type Output = Timestamp;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, Timestamp>, AprsError> {
        let (field, remaining) = split_ascii(data, WIDTH, "timestamp")?;

        let mut parts = [0u8; 3];
        for (i, part) in parts.iter_mut().enumerate() {
            let offset = i * 2;
            *part = parse_digits(&field[offset..offset + 2], offset, "timestamp", field)? as u8;
        }
        let [a, b, c] = parts;

        let timestamp = match field.as_bytes()[6] {
            b'z' => Timestamp::DDHHMM(a, b, c),
            b'/' => Timestamp::DDHHMMLocal(a, b, c),
            b'h' => Timestamp::HHMMSS(a, b, c),
            _ => return Err(AprsError::malformed("timestamp", 6, field)),
        };

        Ok(Chunk::new(timestamp, remaining))
    }
}
