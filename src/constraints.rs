//! Flight constraints: no-fly zones and the central-area rule.

use crate::geometry::NamedRegion;
use crate::position::Position;

/// The fixed regions a planning session flies through.
#[derive(Debug, Clone)]
pub struct Airspace {
    pub no_fly_zones: Vec<NamedRegion>,
    pub central_area: NamedRegion,
}

impl Airspace {
    /// Airspace with the given no-fly zones and central area.
    pub fn new(no_fly_zones: Vec<NamedRegion>, central_area: NamedRegion) -> Self {
        Self {
            no_fly_zones,
            central_area,
        }
    }

    /// The first no-fly zone containing `position`, if any.
    pub fn no_fly_zone_at(&self, position: Position) -> Option<&NamedRegion> {
        self.no_fly_zones.iter().find(|zone| zone.contains(position))
    }

    /// Inside or on the boundary of the central area.
    pub fn in_central_area(&self, position: Position) -> bool {
        self.central_area.contains(position)
    }

    /// Whether the drone may fly from `current` to `next`.
    ///
    /// `next` must be outside every no-fly zone, and the move must not enter the
    /// central area from outside it.
    pub fn is_move_allowed(&self, current: Position, next: Position) -> bool {
        if self.no_fly_zone_at(next).is_some() {
            return false;
        }
        self.in_central_area(current) || !self.in_central_area(next)
    }
}
