//! Turns a day's validated orders into one movement log.

use std::collections::HashSet;

use tracing::info;

use crate::error::PlanError;
use crate::movement::Movement;
use crate::planner::PathPlanner;
use crate::position::Position;
use crate::traits::{DeliveryOrder, Kitchen};

#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// Plan every distinct restaurant in parallel before walking the orders.
    pub warm_cache: bool,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self { warm_cache: true }
    }
}

#[derive(Debug, Clone)]
pub struct OrderRoute {
    pub order_no: String,
    pub restaurant: String,
    /// Index range of this order's movements in [`DayPlan::movements`].
    pub movements: std::ops::Range<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct DayPlan {
    /// Every movement of the day, order by order.
    pub movements: Vec<Movement>,
    /// Routed orders in input order.
    pub routes: Vec<OrderRoute>,
}

impl DayPlan {
    pub fn delivered(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.order_no.as_str())
    }

    pub fn movements_for(&self, order_no: &str) -> &[Movement] {
        self.routes
            .iter()
            .find(|route| route.order_no == order_no)
            .map(|route| &self.movements[route.movements.clone()])
            .unwrap_or_default()
    }
}

/// Routes every order from `base` to its restaurant and back.
///
/// Orders are flown in input order. Fails with
/// [`PlanError::RestaurantNotFound`] before planning anything if some order
/// cannot be served by a single restaurant.
pub fn assemble<O, K>(
    planner: &mut PathPlanner,
    base: Position,
    orders: &[O],
    kitchens: &[K],
    options: &AssembleOptions,
) -> Result<DayPlan, PlanError>
where
    O: DeliveryOrder,
    K: Kitchen,
{
    let assignments = orders
        .iter()
        .map(|order| {
            find_kitchen(order, kitchens)
                .map(|kitchen| (order, kitchen))
                .ok_or_else(|| PlanError::RestaurantNotFound {
                    order_no: order.order_no().to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if options.warm_cache {
        let destinations: Vec<Position> = assignments
            .iter()
            .map(|(_, kitchen)| kitchen.location())
            .collect();
        planner.warm(base, &destinations)?;
    }

    let mut plan = DayPlan::default();
    for (order, kitchen) in assignments {
        let trip = planner.find_round_trip(base, kitchen.location(), order.order_no())?;
        let start = plan.movements.len();
        plan.movements.extend(trip);

        info!(
            order_no = order.order_no(),
            restaurant = kitchen.name(),
            moves = plan.movements.len() - start,
            "routed order"
        );
        plan.routes.push(OrderRoute {
            order_no: order.order_no().to_string(),
            restaurant: kitchen.name().to_string(),
            movements: start..plan.movements.len(),
        });
    }

    Ok(plan)
}

/// The first kitchen whose menu covers every pizza in the order.
///
/// Names are compared after trimming surrounding whitespace.
pub fn find_kitchen<'a, O, K>(order: &O, kitchens: &'a [K]) -> Option<&'a K>
where
    O: DeliveryOrder,
    K: Kitchen,
{
    let wanted: HashSet<&str> = order.pizza_names().into_iter().map(str::trim).collect();
    kitchens.iter().find(|kitchen| {
        let menu: HashSet<&str> = kitchen.menu_names().into_iter().map(str::trim).collect();
        wanted.is_subset(&menu)
    })
}
