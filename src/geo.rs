//! Latitude/longitude lines.
//!
//! A line can be expressed either as a signed decimal degree value or as
//! degrees/minutes/seconds plus a [`Cardinal`]. Neither form is range checked:
//! transmitters in the wild send out-of-range positions and they are kept as-is.

use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinal {
    North,
    South,
    East,
    West,
}

impl Cardinal {
    pub fn decimal_sign(self) -> f64 {
        match self {
            Cardinal::North | Cardinal::East => 1.0,
            Cardinal::South | Cardinal::West => -1.0,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cardinal::North => 'N',
            Cardinal::South => 'S',
            Cardinal::East => 'E',
            Cardinal::West => 'W',
        }
    }
}

/// Shared view over [`Latitude`] and [`Longitude`].
pub trait GeoLine {
    fn degrees(&self) -> u32;
    fn minutes(&self) -> u32;
    fn seconds(&self) -> f64;
    fn cardinal(&self) -> Cardinal;

    fn decimal(&self) -> f64 {
        (self.degrees() as f64 + self.minutes() as f64 / 60.0 + self.seconds() / 3600.0)
            * self.cardinal().decimal_sign()
    }
}

/// Degrees, minutes and seconds of an absolute decimal value, each step
/// truncated so the three parts never add up to more than the input.
fn split_decimal(decimal: f64) -> (u32, u32, f64) {
    let absolute = decimal.abs();
    let degrees = absolute.trunc();
    let minutes = ((absolute - degrees) * 60.0).trunc();
    let seconds = ((absolute - degrees - minutes / 60.0) * 3600.0).trunc();

    (degrees as u32, minutes as u32, seconds.max(0.0))
}

fn write_line(f: &mut Formatter<'_>, line: &impl GeoLine) -> std::fmt::Result {
    write!(
        f,
        "{}º{}'{}\"{}",
        line.degrees(),
        line.minutes(),
        line.seconds(),
        line.cardinal().symbol()
    )
}

macro_rules! geo_line {
    ($(#[$meta:meta])* $name:ident, $positive:expr, $negative:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
        pub struct $name {
            pub degrees: u32,
            pub minutes: u32,
            pub seconds: f64,
            pub cardinal: Cardinal,
        }

        impl $name {
            pub fn new(degrees: u32, minutes: u32, seconds: f64, cardinal: Cardinal) -> Self {
                Self {
                    degrees,
                    minutes,
                    seconds,
                    cardinal,
                }
            }

            pub fn from_decimal(decimal: f64) -> Self {
                let (degrees, minutes, seconds) = split_decimal(decimal);
                let cardinal = if decimal < 0.0 { $negative } else { $positive };
                Self::new(degrees, minutes, seconds, cardinal)
            }
        }

        impl GeoLine for $name {
            fn degrees(&self) -> u32 {
                self.degrees
            }

            fn minutes(&self) -> u32 {
                self.minutes
            }

            fn seconds(&self) -> f64 {
                self.seconds
            }

            fn cardinal(&self) -> Cardinal {
                self.cardinal
            }
        }

        impl From<f64> for $name {
            fn from(decimal: f64) -> Self {
                Self::from_decimal(decimal)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write_line(f, self)
            }
        }
    };
}

geo_line!(
    /// Parallel position of a coordinate.
    Latitude,
    Cardinal::North,
    Cardinal::South
);

geo_line!(
    /// Meridian position of a coordinate.
    Longitude,
    Cardinal::East,
    Cardinal::West
);

/// A decimal latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn from_lines(latitude: &Latitude, longitude: &Longitude) -> Self {
        Self::new(latitude.decimal(), longitude.decimal())
    }

    pub fn latitude_line(&self) -> Latitude {
        Latitude::from_decimal(self.latitude)
    }

    pub fn longitude_line(&self) -> Longitude {
        Longitude::from_decimal(self.longitude)
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.latitude_line(), self.longitude_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_from_components() {
        let latitude = Latitude::new(49, 3, 30.0, Cardinal::North);
        assert_relative_eq!(latitude.decimal(), 49.058333333333333, epsilon = 1e-9);

        let longitude = Longitude::new(72, 1, 45.0, Cardinal::West);
        assert_relative_eq!(longitude.decimal(), -72.029166666666667, epsilon = 1e-9);
    }

    #[test]
    fn components_from_decimal() {
        let latitude = Latitude::from_decimal(-33.8568);
        assert_eq!(latitude.degrees, 33);
        assert_eq!(latitude.minutes, 51);
        assert_eq!(latitude.seconds, 24.0);
        assert_eq!(latitude.cardinal, Cardinal::South);

        let longitude = Longitude::from_decimal(151.2153);
        assert_eq!(longitude.degrees, 151);
        assert_eq!(longitude.minutes, 12);
        assert_eq!(longitude.seconds, 55.0);
        assert_eq!(longitude.cardinal, Cardinal::East);
    }

    #[test]
    fn zero_is_north_and_east() {
        assert_eq!(Latitude::from_decimal(0.0).cardinal, Cardinal::North);
        assert_eq!(Longitude::from_decimal(0.0).cardinal, Cardinal::East);
    }

    #[test]
    fn out_of_range_is_accepted() {
        let longitude = Longitude::from_decimal(-200.5);
        assert_eq!(longitude.degrees, 200);
        assert_eq!(longitude.minutes, 30);
        assert_eq!(longitude.cardinal, Cardinal::West);

        let latitude = Latitude::new(95, 75, 80.0, Cardinal::South);
        assert_relative_eq!(
            latitude.decimal(),
            -(95.0 + 75.0 / 60.0 + 80.0 / 3600.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn decimal_roundtrip_within_a_second() {
        let mut value = -179.999;
        while value < 180.0 {
            let latitude = Latitude::from_decimal(value);
            let longitude = Longitude::from_decimal(value);
            assert!(
                (latitude.decimal() - value).abs() <= 1.0 / 3600.0,
                "latitude roundtrip drifted for {value}"
            );
            assert!(
                (longitude.decimal() - value).abs() <= 1.0 / 3600.0,
                "longitude roundtrip drifted for {value}"
            );
            assert!(latitude.minutes < 60);
            value += 0.0137;
        }
    }

    #[test]
    fn display() {
        let latitude = Latitude::new(49, 3, 30.0, Cardinal::North);
        assert_eq!(latitude.to_string(), "49º3'30\"N");

        let coordinates = Coordinates::new(-33.8568, 151.2153);
        assert_eq!(coordinates.to_string(), "33º51'24\"S 151º12'55\"E");

        let roundtrip = Coordinates::from_lines(
            &coordinates.latitude_line(),
            &coordinates.longitude_line(),
        );
        assert_relative_eq!(roundtrip.latitude, -33.85666666666667, epsilon = 1e-9);
    }
}
