use serde::Serialize;

use crate::AprsError;
use crate::chunk::{Chunk, Chunker, split_width};

const ADDRESSEE_WIDTH: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AprsMessage {
    pub addressee: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// `:ADDRESSEE:text{id` with the addressee padded to nine characters. Consumes
/// the whole input.
pub struct MessageChunker;

impl Chunker for MessageChunker {
    type Output = AprsMessage;

    fn pop_chunk<'a>(&self, data: &'a str) -> Result<Chunk<'a, AprsMessage>, AprsError> {
        let (addressee, rest) = split_width(data, ADDRESSEE_WIDTH, "message addressee")?;
        let Some(body) = rest.strip_prefix(':') else {
            return Err(AprsError::malformed("message", ADDRESSEE_WIDTH, data));
        };

        let (text, id) = match body.rfind('{') {
            Some(brace) => (&body[..brace], Some(body[brace + 1..].to_owned())),
            None => (body, None),
        };

        Ok(Chunk::new(
            AprsMessage {
                addressee: addressee.trim_end().to_owned(),
                text: text.to_owned(),
                id,
            },
            "",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_with_id() {
        let chunk = MessageChunker
            .pop_chunk("DEST     :Hello World! This msg has a : colon {32975")
            .unwrap();
        assert_eq!(
            chunk.result,
            AprsMessage {
                addressee: "DEST".to_owned(),
                text: "Hello World! This msg has a : colon ".to_owned(),
                id: Some("32975".to_owned()),
            }
        );
    }

    #[test]
    fn message_without_id() {
        let chunk = MessageChunker
            .pop_chunk("DESTINATI:Hello World! This msg has a : colon ")
            .unwrap();
        assert_eq!(chunk.result.addressee, "DESTINATI");
        assert_eq!(chunk.result.text, "Hello World! This msg has a : colon ");
        assert_eq!(chunk.result.id, None);
    }

    #[test]
    fn missing_separator() {
        assert_eq!(
            MessageChunker.pop_chunk("DEST      Hello"),
            Err(AprsError::malformed("message", 9, "DEST      Hello"))
        );
    }

    #[test]
    fn short_addressee() {
        assert!(matches!(
            MessageChunker.pop_chunk("DEST:"),
            Err(AprsError::InsufficientData { needed: 9, available: 5, .. })
        ));
    }
}
