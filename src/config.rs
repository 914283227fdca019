//! Planner constants and options.

use crate::position::Position;

/// Length of one drone move in degrees.
pub const DRONE_MOVE_DISTANCE: f64 = 0.00015;

/// Distance in degrees at which two positions count as the same place.
pub const DRONE_IS_CLOSE_DISTANCE: f64 = 0.00015;

/// Most pizzas a single order may contain.
pub const MAX_PIZZAS_PER_ORDER: usize = 4;

/// Flat delivery charge added to every order total.
pub const ORDER_CHARGE_IN_PENCE: u32 = 100;

/// Format of delivery dates on the command line and in result file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Appleton Tower, where every round trip starts and ends.
pub const APPLETON_TOWER: Position = Position::new(-3.186874, 55.944494);

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Step length in degrees.
    pub move_distance: f64,
    /// Arrival tolerance in degrees. Should not be smaller than `move_distance`,
    /// otherwise the search can orbit the destination without arriving.
    pub close_threshold: f64,
    /// Upper bound on movements in a single leg before giving up.
    pub max_steps: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            move_distance: DRONE_MOVE_DISTANCE,
            close_threshold: DRONE_IS_CLOSE_DISTANCE,
            max_steps: 20_000,
        }
    }
}
