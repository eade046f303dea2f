//! APRS packet decoding.
//!
//! Parses one line of APRS-IS text (`SOURCE>DEST,PATH:BODY`) into an
//! [`AprsPacket`]: routing header, data type identifier, and a typed payload
//! for positions (compressed and uncompressed), status reports and messages.
//! Other data types are kept verbatim as [`PacketData::Unknown`].

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod address;
pub mod base91;
pub mod chunk;
pub mod compressed_extension;
pub mod error;
pub mod geo;
pub mod log_format;
pub mod message;
pub mod packet;
pub mod position;
pub mod report;
pub mod status;
pub mod symbols;
pub mod timestamp;

use chrono::{DateTime, Utc};

pub use address::{Address, Digipeater};
pub use compressed_extension::{CompressedExtension, CompressionType};
pub use error::AprsError;
pub use geo::Coordinates;
pub use message::AprsMessage;
pub use packet::{AprsPacket, AprsPosition, PacketData};
pub use position::PositionReport;
pub use status::AprsStatus;
pub use symbols::{AprsSymbol, Symbol};
pub use timestamp::Timestamp;

/// Decode a packet, stamping it with the current time.
pub fn parse(line: &str) -> Result<AprsPacket, AprsError> {
    parse_at(line, Utc::now())
}

/// Decode a packet received at `received`.
pub fn parse_at(line: &str, received: DateTime<Utc>) -> Result<AprsPacket, AprsError> {
    AprsPacket::decode(line, received)
}
