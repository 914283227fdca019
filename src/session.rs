//! One planning day, from fetched data to routed orders.

use std::collections::HashSet;

use chrono::NaiveDate;

use tracing::info;

use crate::assembler::{AssembleOptions, DayPlan, assemble};
use crate::config::{APPLETON_TOWER, DATE_FORMAT, PlannerConfig};
use crate::constraints::Airspace;
use crate::error::AppError;
use crate::model::{Order, OrderStatus};
use crate::planner::PathPlanner;
use crate::traits::DeliveryDataSource;
use crate::validation::valid_orders;

/// Everything produced for a day.
#[derive(Debug, Clone)]
pub struct DayOutcome {
    /// All orders of the day with their final status and validation code.
    pub orders: Vec<Order>,
    pub plan: DayPlan,
}

/// Parses a `YYYY-MM-DD` delivery date.
///
/// Unpadded months and days are accepted; downstream code only ever sees the
/// parsed date, so `2023-9-1` plans the same day as `2023-09-01`.
pub fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidArgument(format!("date must be YYYY-MM-DD, got {}", raw)))
}

/// Fetches the day's data from `source`, validates the orders and routes the
/// valid ones from Appleton Tower.
pub fn plan_day<S>(
    source: &S,
    date: NaiveDate,
    config: PlannerConfig,
    options: &AssembleOptions,
) -> Result<DayOutcome, AppError>
where
    S: DeliveryDataSource,
    AppError: From<S::Error>,
{
    if !source.is_alive()? {
        return Err(AppError::ServiceDown);
    }

    let restaurants = source.restaurants()?;
    let mut orders = source.orders_on(date)?;
    let airspace = Airspace::new(source.no_fly_zones()?, source.central_area()?);

    let valid = valid_orders(&mut orders, &restaurants);
    info!(%date, orders = orders.len(), valid = valid.len(), "validated orders");

    let mut planner = PathPlanner::new(airspace, config);
    let plan = assemble(&mut planner, APPLETON_TOWER, &valid, &restaurants, options)?;

    let delivered: HashSet<&str> = plan.delivered().collect();
    for order in orders.iter_mut() {
        if delivered.contains(order.order_no.as_str()) {
            order.order_status = OrderStatus::Delivered;
        }
    }
    info!(
        %date,
        delivered = delivered.len(),
        moves = plan.movements.len(),
        cached_routes = planner.cache().len(),
        "planned day"
    );

    Ok(DayOutcome { orders, plan })
}
