//! Drone movements and round-trip assembly.

use crate::position::{Heading, Position};

/// The geometry of one move, without an order attached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub from: Position,
    pub heading: Heading,
    pub to: Position,
}

impl Step {
    pub fn new(from: Position, heading: Heading, to: Position) -> Self {
        Self { from, heading, to }
    }

    pub fn hover(at: Position) -> Self {
        Self::new(at, Heading::HOVER, at)
    }

    pub fn is_hover(&self) -> bool {
        self.heading.is_hover()
    }

    /// The same move flown backwards.
    pub fn reversed(&self) -> Step {
        Step::new(self.to, self.heading.opposite(), self.from)
    }

    pub fn tagged(&self, order_no: &str) -> Movement {
        Movement {
            order_no: order_no.to_string(),
            step: *self,
        }
    }
}

/// One move of the drone while serving an order.
///
/// Movements are immutable; [`Movement::with_order_no`] builds a relabelled copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    order_no: String,
    step: Step,
}

impl Movement {
    pub fn new(order_no: impl Into<String>, from: Position, heading: Heading, to: Position) -> Self {
        Self {
            order_no: order_no.into(),
            step: Step::new(from, heading, to),
        }
    }

    /// Order this movement is flown for.
    pub fn order_no(&self) -> &str {
        &self.order_no
    }

    /// Position before the move.
    pub fn start(&self) -> Position {
        self.step.from
    }

    /// Position after the move. Equal to [`Movement::start`] for a hover.
    pub fn end(&self) -> Position {
        self.step.to
    }

    pub fn heading(&self) -> Heading {
        self.step.heading
    }

    /// The untagged geometry of the move.
    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn is_hover(&self) -> bool {
        self.step.is_hover()
    }

    pub fn with_order_no(&self, order_no: impl Into<String>) -> Movement {
        Movement {
            order_no: order_no.into(),
            step: self.step,
        }
    }
}

/// Return leg for an outbound leg that ends in a hover.
///
/// The outbound hover is not repeated; every other step is flown backwards in
/// reverse order.
pub fn return_leg(outbound: &[Step]) -> Vec<Step> {
    let Some((_, flown)) = outbound.split_last() else {
        return Vec::new();
    };
    flown.iter().rev().map(Step::reversed).collect()
}

/// Outbound leg followed by its mirrored return leg.
pub fn round_trip(outbound: Vec<Step>) -> Vec<Step> {
    let back = return_leg(&outbound);
    let mut trip = outbound;
    trip.extend(back);
    trip
}
