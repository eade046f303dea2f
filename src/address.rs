use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::AprsError;

/// A station callsign and its numeric SSID.
///
/// An SSID of zero is not written out, so `N0CALL` and `N0CALL-0` are the same
/// address. Suffixes that are not a small number (`D-EKDF`, `qAS`) are kept as
/// part of the callsign.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    pub callsign: String,
    pub ssid: u8,
}

impl Address {
    pub fn new<T: Into<String>>(callsign: T, ssid: u8) -> Address {
        Address {
            callsign: callsign.into(),
            ssid,
        }
    }
}

impl FromStr for Address {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        if s.is_empty() {
            return Err(AprsError::EmptyCallsign(s.to_owned()));
        }

        if let Some((callsign, ssid)) = s.rsplit_once('-')
            && !callsign.is_empty()
            && (1..=2).contains(&ssid.len())
            && ssid.bytes().all(|b| b.is_ascii_digit())
            && let Ok(ssid) = ssid.parse::<u8>()
        {
            return Ok(Address::new(callsign, ssid));
        }

        Ok(Address::new(s, 0))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if self.ssid == 0 {
            write!(f, "{}", self.callsign)
        } else {
            write!(f, "{}-{}", self.callsign, self.ssid)
        }
    }
}

/// A relay station from the packet path. `repeated` is set when the path
/// entry carries the `*` has-been-digipeated marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digipeater {
    pub address: Address,
    pub repeated: bool,
}

impl FromStr for Digipeater {
    type Err = AprsError;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        let (address, repeated) = match s.strip_suffix('*') {
            Some(address) => (address, true),
            None => (s, false),
        };

        Ok(Digipeater {
            address: address.parse()?,
            repeated,
        })
    }
}

impl Display for Digipeater {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.address)?;
        if self.repeated {
            write!(f, "*")?;
        }
        Ok(())
    }
}
