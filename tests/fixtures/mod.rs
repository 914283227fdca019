//! Test fixtures for drone-planner.
//!
//! Provides:
//! - Edinburgh map data (central area, no-fly zones, restaurants)
//! - Builders for synthetic airspaces laid out in units of one drone step

#![allow(dead_code)]

pub mod edinburgh;

use drone_planner::config::{APPLETON_TOWER, DRONE_MOVE_DISTANCE};
use drone_planner::constraints::Airspace;
use drone_planner::geometry::NamedRegion;
use drone_planner::movement::Movement;
use drone_planner::position::Position;

/// Position `east` and `north` drone steps away from Appleton Tower.
pub fn steps(east: f64, north: f64) -> Position {
    Position::new(
        APPLETON_TOWER.lng + east * DRONE_MOVE_DISTANCE,
        APPLETON_TOWER.lat + north * DRONE_MOVE_DISTANCE,
    )
}

/// Rectangle between two corners given in steps from Appleton Tower.
pub fn block(name: &str, min: (f64, f64), max: (f64, f64)) -> NamedRegion {
    NamedRegion::rectangle(name, steps(min.0, min.1), steps(max.0, max.1))
}

/// Central area large enough that no test leaves it.
pub fn everywhere() -> NamedRegion {
    block("everywhere", (-1000.0, -1000.0), (1000.0, 1000.0))
}

pub fn open_airspace() -> Airspace {
    Airspace::new(Vec::new(), everywhere())
}

pub fn hover_count(movements: &[Movement]) -> usize {
    movements.iter().filter(|m| m.is_hover()).count()
}

/// The position after every movement, starting with the first start.
pub fn track(movements: &[Movement]) -> Vec<Position> {
    let mut points: Vec<Position> = movements.first().map(Movement::start).into_iter().collect();
    points.extend(movements.iter().map(Movement::end));
    points
}
