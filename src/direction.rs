use std::fmt;

use serde::Serialize;

/// One of the 16 compass points, each covering a 22.5 degree bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CompassPoint {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
}

const POINTS: [CompassPoint; 16] = [
    CompassPoint::North,
    CompassPoint::NorthNorthEast,
    CompassPoint::NorthEast,
    CompassPoint::EastNorthEast,
    CompassPoint::East,
    CompassPoint::EastSouthEast,
    CompassPoint::SouthEast,
    CompassPoint::SouthSouthEast,
    CompassPoint::South,
    CompassPoint::SouthSouthWest,
    CompassPoint::SouthWest,
    CompassPoint::WestSouthWest,
    CompassPoint::West,
    CompassPoint::WestNorthWest,
    CompassPoint::NorthWest,
    CompassPoint::NorthNorthWest,
];

const BUCKET_DEGREES: f64 = 360.0 / 16.0;

impl CompassPoint {
    /// Nearest compass point for a bearing in degrees. Any finite value is
    /// normalized into [0, 360) first, so 360 maps to North like 0 does.
    pub fn from_degrees(degrees: f64) -> CompassPoint {
        if !degrees.is_finite() {
            return CompassPoint::North;
        }
        let normalized = degrees.rem_euclid(360.0);
        let index = (normalized / BUCKET_DEGREES).round() as usize % POINTS.len();
        POINTS[index]
    }

    /// Bearing at the center of the bucket
    pub fn to_degrees(self) -> f64 {
        POINTS
            .iter()
            .position(|p| *p == self)
            .map(|i| i as f64 * BUCKET_DEGREES)
            .unwrap_or_default()
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            CompassPoint::North => "N",
            CompassPoint::NorthNorthEast => "NNE",
            CompassPoint::NorthEast => "NE",
            CompassPoint::EastNorthEast => "ENE",
            CompassPoint::East => "E",
            CompassPoint::EastSouthEast => "ESE",
            CompassPoint::SouthEast => "SE",
            CompassPoint::SouthSouthEast => "SSE",
            CompassPoint::South => "S",
            CompassPoint::SouthSouthWest => "SSW",
            CompassPoint::SouthWest => "SW",
            CompassPoint::WestSouthWest => "WSW",
            CompassPoint::West => "W",
            CompassPoint::WestNorthWest => "WNW",
            CompassPoint::NorthWest => "NW",
            CompassPoint::NorthNorthWest => "NNW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Smallest angle between two bearings, in [0, 180]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
