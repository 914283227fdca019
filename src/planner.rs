//! Greedy flight path planner with a per-session round-trip cache.

use std::collections::HashSet;

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::cache::{RouteCache, RouteKey};
use crate::config::PlannerConfig;
use crate::constraints::Airspace;
use crate::error::PlanError;
use crate::movement::{Movement, Step, round_trip};
use crate::position::{Heading, Position};

/// Plans round trips through a fixed airspace.
///
/// Each leg is found by greedy descent: from the current position take the
/// allowed, not yet visited compass step that lands closest to the target.
/// Ties go to the heading that comes first in [`Heading::compass`] order.
/// Paths are not shortest paths.
#[derive(Debug)]
pub struct PathPlanner {
    airspace: Airspace,
    config: PlannerConfig,
    cache: RouteCache,
}

impl PathPlanner {
    pub fn new(airspace: Airspace, config: PlannerConfig) -> Self {
        Self {
            airspace,
            config,
            cache: RouteCache::new(),
        }
    }

    pub fn airspace(&self) -> &Airspace {
        &self.airspace
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }

    /// Plans a single leg from `start` until close to `end`.
    ///
    /// The returned steps end with a hover at the arrival position.
    pub fn compute_one_way(&self, start: Position, end: Position) -> Result<Vec<Step>, PlanError> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        let mut current = start;

        while !current.is_close_to(&end, self.config.close_threshold) {
            if path.len() >= self.config.max_steps {
                return Err(PlanError::StepLimitExceeded {
                    destination: end,
                    max_steps: self.config.max_steps,
                });
            }

            let mut best: Option<(Heading, Position, f64)> = None;
            for heading in Heading::compass() {
                let candidate = current.step(heading, self.config.move_distance);
                if visited.contains(&candidate.key()) {
                    continue;
                }
                if !self.airspace.is_move_allowed(current, candidate) {
                    continue;
                }
                let remaining = candidate.distance_to(&end);
                if best.map_or(true, |(_, _, closest)| remaining < closest) {
                    best = Some((heading, candidate, remaining));
                }
            }

            let Some((heading, next, remaining)) = best else {
                return Err(PlanError::Stuck {
                    position: current,
                    steps: path.len(),
                });
            };
            trace!(%heading, remaining, "step");

            path.push(Step::new(current, heading, next));
            visited.insert(next.key());
            current = next;
        }

        path.push(Step::hover(current));
        debug!(from = %start, to = %end, moves = path.len(), "planned leg");
        Ok(path)
    }

    /// Round trip from `base` to `destination` and back, tagged with `order_no`.
    ///
    /// Trips are computed once per (base, destination) pair and replayed from
    /// the cache afterwards. The drone hovers once, at the destination.
    pub fn find_round_trip(
        &mut self,
        base: Position,
        destination: Position,
        order_no: &str,
    ) -> Result<Vec<Movement>, PlanError> {
        let key = RouteKey::new(base, destination);
        if let Some(movements) = self.cache.tagged(&key, order_no) {
            debug!(order_no, "route cache hit");
            return Ok(movements);
        }

        let trip = round_trip(self.compute_one_way(base, destination)?);
        let movements = trip.iter().map(|step| step.tagged(order_no)).collect();
        self.cache.insert(key, trip);
        Ok(movements)
    }

    /// Computes and caches round trips for every destination not cached yet.
    ///
    /// Legs are searched in parallel; each distinct destination is planned at
    /// most once. Returns the number of new cache entries.
    ///
    /// If any leg fails, nothing is cached and the error returned is the one
    /// for the earliest failing destination in `destinations`, the same error
    /// sequential planning would hit first.
    pub fn warm(&mut self, base: Position, destinations: &[Position]) -> Result<usize, PlanError> {
        let mut pending_keys = HashSet::new();
        let pending: Vec<(RouteKey, Position)> = destinations
            .iter()
            .map(|&destination| (RouteKey::new(base, destination), destination))
            .filter(|(key, _)| !self.cache.contains(key) && pending_keys.insert(*key))
            .collect();

        let planner = &*self;
        let results: Vec<Result<(RouteKey, Vec<Step>), PlanError>> = pending
            .par_iter()
            .map(|&(key, destination)| {
                planner
                    .compute_one_way(base, destination)
                    .map(|outbound| (key, round_trip(outbound)))
            })
            .collect();
        let computed = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        let added = computed.len();
        for (key, trip) in computed {
            self.cache.insert(key, trip);
        }
        debug!(added, cached = self.cache.len(), "warmed route cache");
        Ok(added)
    }
}
