use thiserror::Error;

/// Every way decoding a single APRS line can fail.
///
/// Unrecognized data type identifiers are not errors; they decode to
/// [`crate::PacketData::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AprsError {
    /// The remaining input is shorter than the chunk being read.
    #[error("insufficient data for {chunk}: needed {needed} characters, found {available} in {input:?}")]
    InsufficientData {
        chunk: &'static str,
        needed: usize,
        available: usize,
        input: String,
    },

    /// A character does not belong to the class the chunk expects at `offset`.
    #[error("malformed {chunk} at offset {offset}: {input:?}")]
    MalformedChunk {
        chunk: &'static str,
        offset: usize,
        input: String,
    },

    /// A compressed coordinate character falls outside the base-91 alphabet.
    #[error("malformed compressed coordinate {input:?}: {character:?} at offset {offset}")]
    MalformedCoordinate {
        input: String,
        offset: usize,
        character: char,
    },

    /// A compressed extension byte is out of range.
    #[error("malformed compressed extension {input:?}: {character:?} at offset {offset}")]
    MalformedExtension {
        input: String,
        offset: usize,
        character: char,
    },

    #[error("invalid packet header: {0:?}")]
    InvalidHeader(String),

    #[error("empty callsign in {0:?}")]
    EmptyCallsign(String),
}

impl AprsError {
    pub(crate) fn malformed(chunk: &'static str, offset: usize, input: &str) -> Self {
        AprsError::MalformedChunk {
            chunk,
            offset,
            input: input.to_owned(),
        }
    }
}
