//! Positions and compass headings.
//!
//! Coordinates are plain longitude/latitude degrees. Distances are Euclidean in
//! degree space, which is accurate enough for an operating area a few
//! kilometres across.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PlanError;

/// Angle reported for a hover step.
pub const HOVER_ANGLE: f64 = 999.0;

/// Angular width of one compass sector in degrees.
pub const SECTOR_DEGREES: f64 = 22.5;

const COMPASS_POINTS: u8 = 16;

/// A longitude/latitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
}

impl Position {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance in degrees.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let d_lng = other.lng - self.lng;
        let d_lat = other.lat - self.lat;
        (d_lng * d_lng + d_lat * d_lat).sqrt()
    }

    /// True when `other` lies within `threshold` degrees.
    pub fn is_close_to(&self, other: &Position, threshold: f64) -> bool {
        self.distance_to(other) <= threshold
    }

    /// Moves `distance` degrees along `heading`. Hovering leaves the position unchanged.
    pub fn step(self, heading: Heading, distance: f64) -> Position {
        match heading.radians() {
            None => self,
            Some(radians) => Position {
                lng: self.lng + distance * radians.cos(),
                lat: self.lat + distance * radians.sin(),
            },
        }
    }

    /// Like [`Position::step`] but takes a raw angle in degrees.
    ///
    /// Fails with [`PlanError::InvalidHeading`] unless the angle is a multiple
    /// of 22.5 in `[0, 360]` or [`HOVER_ANGLE`].
    pub fn next_position(self, angle: f64, distance: f64) -> Result<Position, PlanError> {
        let heading = Heading::from_degrees(angle)?;
        Ok(self.step(heading, distance))
    }

    /// Exact identity of the coordinates, usable as a hash key.
    ///
    /// `-0.0` and `0.0` map to the same key so that the key agrees with `==`.
    pub(crate) fn key(&self) -> PositionKey {
        PositionKey((self.lng + 0.0).to_bits(), (self.lat + 0.0).to_bits())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lng, self.lat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PositionKey(u64, u64);

/// One of the 16 compass headings, or hover.
///
/// Compass headings are counted anticlockwise from east in 22.5° sectors,
/// so 90° is north and 180° is west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heading(u8);

impl Heading {
    pub const EAST: Heading = Heading(0);
    pub const NORTH: Heading = Heading(4);
    pub const WEST: Heading = Heading(8);
    pub const SOUTH: Heading = Heading(12);
    pub const HOVER: Heading = Heading(COMPASS_POINTS);

    /// All compass headings in ascending angle order, starting at east.
    pub fn compass() -> impl Iterator<Item = Heading> {
        (0..COMPASS_POINTS).map(Heading)
    }

    /// Heading for an angle in degrees.
    ///
    /// Accepts multiples of 22.5 in `[0, 360]` and [`HOVER_ANGLE`].
    pub fn from_degrees(angle: f64) -> Result<Heading, PlanError> {
        if angle == HOVER_ANGLE {
            return Ok(Heading::HOVER);
        }
        if !(0.0..=360.0).contains(&angle) || angle % SECTOR_DEGREES != 0.0 {
            return Err(PlanError::InvalidHeading(angle));
        }
        // 360 folds onto east.
        Ok(Heading((angle / SECTOR_DEGREES) as u8 % COMPASS_POINTS))
    }

    pub fn is_hover(self) -> bool {
        self == Heading::HOVER
    }

    /// Angle in degrees; [`HOVER_ANGLE`] for hover.
    pub fn degrees(self) -> f64 {
        if self.is_hover() {
            HOVER_ANGLE
        } else {
            f64::from(self.0) * SECTOR_DEGREES
        }
    }

    fn radians(self) -> Option<f64> {
        (!self.is_hover()).then(|| self.degrees().to_radians())
    }

    /// The heading rotated by 180°. Hover stays hover.
    pub fn opposite(self) -> Heading {
        if self.is_hover() {
            self
        } else {
            Heading((self.0 + COMPASS_POINTS / 2) % COMPASS_POINTS)
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hover() {
            write!(f, "hover")
        } else {
            write!(f, "{}°", self.degrees())
        }
    }
}

impl Serialize for Heading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Heading {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let angle = f64::deserialize(deserializer)?;
        Heading::from_degrees(angle).map_err(serde::de::Error::custom)
    }
}
