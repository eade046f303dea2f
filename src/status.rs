use serde::Serialize;

use crate::AprsError;
use crate::chunk::{Chunk, Chunker};
use crate::timestamp::{Timestamp, TimestampChunker};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AprsStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    pub text: String,
}

/// Status text with an optional leading `DDHHMMz` timestamp. Consumes the
/// whole input.
pub struct StatusChunker;

impl Chunker for StatusChunker {
    type Output = AprsStatus;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, AprsStatus>, AprsError> {
        // Only the zulu form is allowed in a status report; anything else is text.
        let (timestamp, text) = match TimestampChunker.pop_chunk(data) {
            Ok(Chunk {
                result: timestamp @ Timestamp::DDHHMM(..),
                remaining,
            }) => (Some(timestamp), remaining),
            _ => (None, data),
        };

        Ok(Chunk::new(
            AprsStatus {
                timestamp,
                text: text.to_owned(),
            },
            "",
        ))
    }
}
