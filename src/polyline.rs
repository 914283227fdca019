//! Flown track of the drone as a polyline.
//!
//! Consecutive duplicate points (hover steps) are kept, so the polyline has
//! one point per movement plus the final arrival point.

use serde::{Deserialize, Serialize};

use crate::movement::Movement;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Position>,
}

impl Polyline {
    pub fn new(points: Vec<Position>) -> Self {
        Self { points }
    }

    /// Start of every movement, then the end of the last one.
    pub fn from_movements(movements: &[Movement]) -> Self {
        let mut points: Vec<Position> = movements.iter().map(Movement::start).collect();
        if let Some(last) = movements.last() {
            points.push(last.end());
        }
        Self { points }
    }

    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Position> {
        self.points
    }

    /// Points as GeoJSON `[lng, lat]` pairs.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.lng, p.lat]).collect()
    }
}
