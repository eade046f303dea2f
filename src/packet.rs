use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;

use crate::AprsError;
use crate::address::{Address, Digipeater};
use crate::chunk::{Chunk, Chunker};
use crate::message::{AprsMessage, MessageChunker};
use crate::position::{PositionChunker, PositionReport};
use crate::status::{AprsStatus, StatusChunker};
use crate::timestamp::{Timestamp, TimestampChunker};

/// Routing metadata in front of the `:` separator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingHeader {
    pub received: DateTime<Utc>,
    pub source: Address,
    pub destination: Address,
    pub digipeaters: Vec<Digipeater>,
}

impl RoutingHeader {
    /// Split `SOURCE>DEST,DIGI1,DIGI2*:BODY` into its header and body.
    pub fn parse(s: &str, received: DateTime<Utc>) -> Result<(Self, &str), AprsError> {
        let header_delimiter = s
            .find(':')
            .ok_or_else(|| AprsError::InvalidHeader(s.to_owned()))?;
        let (header, rest) = s.split_at(header_delimiter);
        let body = &rest[1..];

        let (source, path) = header
            .split_once('>')
            .ok_or_else(|| AprsError::InvalidHeader(s.to_owned()))?;
        let source = source.parse()?;

        let mut path = path.split(',');
        let destination = path
            .next()
            .ok_or_else(|| AprsError::InvalidHeader(s.to_owned()))?
            .parse()?;
        let digipeaters = path.map(Digipeater::from_str).collect::<Result<_, _>>()?;

        Ok((
            RoutingHeader {
                received,
                source,
                destination,
                digipeaters,
            },
            body,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AprsPosition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// The station can receive messages (`=` and `@` identifiers).
    pub messaging: bool,
    pub report: PositionReport,
    pub comment: String,
}

#[derive(PartialEq, Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketData {
    Position(AprsPosition),
    Status(AprsStatus),
    Message(AprsMessage),
    /// A data type this decoder does not interpret; `body` is the whole packet
    /// body including its identifier.
    Unknown { body: String },
}

/// A single decoded APRS line.
#[derive(PartialEq, Debug, Clone, Serialize)]
pub struct AprsPacket {
    pub received: DateTime<Utc>,
    pub data_type_identifier: char,
    pub source: Address,
    pub destination: Address,
    pub digipeaters: Vec<Digipeater>,
    pub data: PacketData,
}

impl AprsPacket {
    /// Parse one line of packet text received at `received`.
    pub fn decode(s: &str, received: DateTime<Utc>) -> Result<Self, AprsError> {
        let (header, body) = RoutingHeader::parse(s, received)?;
        decode_body(header, body)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.data, PacketData::Unknown { .. })
    }

    pub fn position(&self) -> Option<&AprsPosition> {
        match &self.data {
            PacketData::Position(position) => Some(position),
            _ => None,
        }
    }
}

impl FromStr for AprsPacket {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        AprsPacket::decode(s, Utc::now())
    }
}

/// Route `body` on its data type identifier and assemble the packet.
pub fn decode_body(header: RoutingHeader, body: &str) -> Result<AprsPacket, AprsError> {
    let data_type_identifier = body.chars().next().ok_or(AprsError::InsufficientData {
        chunk: "data type identifier",
        needed: 1,
        available: 0,
        input: String::new(),
    })?;
    let rest = &body[data_type_identifier.len_utf8()..];

    let data = match data_type_identifier {
        '!' | '=' => PacketData::Position(decode_position(
            Chunk::new(None, rest),
            data_type_identifier,
        )?),
        '/' | '@' => PacketData::Position(decode_position(
            TimestampChunker.pop_chunk(rest)?.map(Some),
            data_type_identifier,
        )?),
        '>' => PacketData::Status(StatusChunker.pop_chunk(rest)?.result),
        ':' => PacketData::Message(MessageChunker.pop_chunk(rest)?.result),
        _ => {
            trace!(identifier = %data_type_identifier, "unrecognized data type identifier");
            PacketData::Unknown {
                body: body.to_owned(),
            }
        }
    };

    Ok(AprsPacket {
        received: header.received,
        data_type_identifier,
        source: header.source,
        destination: header.destination,
        digipeaters: header.digipeaters,
        data,
    })
}

/// Read the position that follows an optional timestamp; the rest of the
/// body is the comment.
fn decode_position(
    timestamp: Chunk<'_, Option<Timestamp>>,
    data_type_identifier: char,
) -> Result<AprsPosition, AprsError> {
    let chunk = PositionChunker.pop_chunk(timestamp.remaining)?;

    Ok(AprsPosition {
        timestamp: timestamp.result,
        messaging: matches!(data_type_identifier, '=' | '@'),
        report: chunk.result,
        comment: chunk.remaining.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressed_extension::CompressedExtension;
    use chrono::TimeZone;

    fn received() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parse_uncompressed_with_timestamp() {
        let result = AprsPacket::decode(
            r"ICA3D17F2>APRS,qAS,dl4mea:/074849h4821.61N\01224.49E^322/103/A=003054",
            received(),
        )
        .unwrap();
        assert_eq!(result.source, Address::new("ICA3D17F2", 0));
        assert_eq!(result.destination, Address::new("APRS", 0));
        assert_eq!(
            result.digipeaters,
            vec!["qAS".parse().unwrap(), "dl4mea".parse::<Digipeater>().unwrap()]
        );
        assert_eq!(result.data_type_identifier, '/');
        assert_eq!(result.received, received());

        match result.data {
            PacketData::Position(position) => {
                assert_eq!(position.timestamp, Some(Timestamp::HHMMSS(7, 48, 49)));
                assert!(!position.messaging);
                let coordinates = position.report.coordinates();
                assert_relative_eq!(coordinates.latitude, 48.36016666666667, epsilon = 1e-9);
                assert_relative_eq!(coordinates.longitude, 12.408166666666666, epsilon = 1e-9);
                assert_eq!(position.report.symbol().code, '^');
                assert_eq!(position.comment, "322/103/A=003054");
            }
            _ => panic!("Unexpected data type"),
        }
    }

    #[test]
    fn parse_compressed_with_messaging() {
        let result =
            AprsPacket::decode("N0CALL-5>APRS,WIDE1-1*,WIDE2-1:=/5L!!<*e7>7P[", received())
                .unwrap();
        assert_eq!(result.source, Address::new("N0CALL", 5));
        assert_eq!(
            result.digipeaters,
            vec![
                Digipeater {
                    address: Address::new("WIDE1", 1),
                    repeated: true,
                },
                Digipeater {
                    address: Address::new("WIDE2", 1),
                    repeated: false,
                },
            ]
        );

        let position = result.position().expect("Expected Position data type");
        assert!(position.messaging);
        assert_eq!(position.timestamp, None);
        assert_eq!(position.comment, "");
        match &position.report {
            PositionReport::Compressed { extension, .. } => {
                assert!(matches!(
                    extension,
                    Some(CompressedExtension::CourseSpeed { course: 88, .. })
                ));
            }
            other => panic!("Expected compressed position, got {other:?}"),
        }
    }

    #[test]
    fn parse_status() {
        let result =
            AprsPacket::decode(r"ICA3D17F2>APRS,qAS,dl4mea:>312359zStatus seems okay!", received())
                .unwrap();
        assert_eq!(result.data_type_identifier, '>');
        match result.data {
            PacketData::Status(status) => {
                assert_eq!(status.timestamp, Some(Timestamp::DDHHMM(31, 23, 59)));
                assert_eq!(status.text, "Status seems okay!");
            }
            _ => panic!("Expected Status data type"),
        }
    }

    #[test]
    fn parse_message() {
        let result = AprsPacket::decode(
            r"ICA3D17F2>Aprs,qAS,dl4mea::DEST     :Hello World! This msg has a : colon {32975",
            received(),
        )
        .unwrap();
        assert_eq!(result.destination, Address::new("Aprs", 0));
        match result.data {
            PacketData::Message(msg) => {
                assert_eq!(msg.addressee, "DEST");
                assert_eq!(msg.text, "Hello World! This msg has a : colon ");
                assert_eq!(msg.id, Some("32975".to_owned()));
            }
            _ => panic!("Unexpected data type"),
        }
    }

    #[test]
    fn unknown_identifier_keeps_body_and_header() {
        let line = "N0CALL-5>APRS,TCPIP*:T#005,199,000,255,073,123,01101001";
        let result = AprsPacket::decode(line, received()).unwrap();
        assert!(result.is_unknown());
        assert_eq!(result.data_type_identifier, 'T');
        assert_eq!(
            result.data,
            PacketData::Unknown {
                body: "T#005,199,000,255,073,123,01101001".to_owned(),
            }
        );

        let (header, _) = RoutingHeader::parse(line, received()).unwrap();
        assert_eq!(result.source, header.source);
        assert_eq!(result.destination, header.destination);
        assert_eq!(result.digipeaters, header.digipeaters);
        assert_eq!(result.received, header.received);
    }

    #[test]
    fn malformed_position_is_an_error() {
        assert!(matches!(
            AprsPacket::decode("N0CALL>APRS:!4903.50N/0720", received()),
            Err(AprsError::InsufficientData { needed: 19, .. })
        ));
        assert!(matches!(
            AprsPacket::decode("N0CALL>APRS:@0923", received()),
            Err(AprsError::InsufficientData { needed: 7, .. })
        ));
    }

    #[test]
    fn empty_body() {
        assert!(matches!(
            AprsPacket::decode("N0CALL>APRS:", received()),
            Err(AprsError::InsufficientData { chunk: "data type identifier", .. })
        ));
    }

    #[test]
    fn invalid_headers() {
        assert_eq!(
            AprsPacket::decode("N0CALL>APRS", received()),
            Err(AprsError::InvalidHeader("N0CALL>APRS".to_owned()))
        );
        assert_eq!(
            AprsPacket::decode("N0CALL:>status", received()),
            Err(AprsError::InvalidHeader("N0CALL:>status".to_owned()))
        );
        assert_eq!(
            AprsPacket::decode(">APRS:>status", received()),
            Err(AprsError::EmptyCallsign("".to_owned()))
        );
        assert_eq!(
            AprsPacket::decode("N0CALL>:>status", received()),
            Err(AprsError::EmptyCallsign("".to_owned()))
        );
    }

    #[test]
    fn from_str_stamps_receipt_time() {
        let before = Utc::now();
        let result: AprsPacket = "N0CALL>APRS:>hello".parse().unwrap();
        assert!(result.received >= before);
    }

    #[test]
    fn serializes_to_json() {
        let result = AprsPacket::decode("N0CALL-5>APRS:!4903.50N/07201.75W-Test", received())
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"]["callsign"], "N0CALL");
        assert_eq!(json["source"]["ssid"], 5);
        assert_eq!(json["data_type_identifier"], "!");
        assert_eq!(json["data"]["position"]["report"]["format"], "uncompressed");
        assert_eq!(json["data"]["position"]["comment"], "Test");
        assert_eq!(
            json["data"]["position"]["report"]["symbol"]["kind"],
            "HouseQthVhf"
        );
    }
}
