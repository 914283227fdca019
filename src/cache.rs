//! Round-trip cache keyed by exact endpoint coordinates.

use std::collections::HashMap;

use crate::movement::{Movement, Step};
use crate::position::{Position, PositionKey};

/// Identifies a round trip by its base and destination.
///
/// The key is ordered: a trip from `a` to `b` and back is a different trip from
/// one based at `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    base: PositionKey,
    destination: PositionKey,
}

impl RouteKey {
    pub fn new(base: Position, destination: Position) -> Self {
        Self {
            base: base.key(),
            destination: destination.key(),
        }
    }
}

/// Computed round trips for one planning session.
///
/// The cache owns only geometry. Callers always receive freshly built
/// movements tagged with their own order number.
#[derive(Debug, Default)]
pub struct RouteCache {
    templates: HashMap<RouteKey, Vec<Step>>,
}

impl RouteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached round trips.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Whether a round trip for `key` has been computed.
    pub fn contains(&self, key: &RouteKey) -> bool {
        self.templates.contains_key(key)
    }

    /// Stores a template unless one already exists for `key`.
    pub fn insert(&mut self, key: RouteKey, trip: Vec<Step>) {
        self.templates.entry(key).or_insert(trip);
    }

    /// A copy of the cached trip tagged with `order_no`.
    pub fn tagged(&self, key: &RouteKey, order_no: &str) -> Option<Vec<Movement>> {
        self.templates
            .get(key)
            .map(|trip| trip.iter().map(|step| step.tagged(order_no)).collect())
    }
}
