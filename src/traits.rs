//! Interfaces between the planner and the data it routes.
//!
//! The assembler only needs to know which pizzas an order contains and which
//! pizzas a restaurant sells. Concrete data types implement these traits.

use chrono::NaiveDate;

use crate::geometry::NamedRegion;
use crate::model::{Order, Restaurant};
use crate::position::Position;

/// An order to be flown.
pub trait DeliveryOrder {
    fn order_no(&self) -> &str;

    /// Names of the pizzas in the order, as given.
    fn pizza_names(&self) -> Vec<&str>;
}

/// A pickup point offering a menu.
pub trait Kitchen {
    fn name(&self) -> &str;

    fn location(&self) -> Position;

    /// Names of the pizzas on the menu, as given.
    fn menu_names(&self) -> Vec<&str>;
}

/// Provides the data for a planning day.
pub trait DeliveryDataSource {
    type Error;

    fn is_alive(&self) -> Result<bool, Self::Error>;

    fn restaurants(&self) -> Result<Vec<Restaurant>, Self::Error>;

    /// Orders placed on `date`.
    fn orders_on(&self, date: NaiveDate) -> Result<Vec<Order>, Self::Error>;

    fn central_area(&self) -> Result<NamedRegion, Self::Error>;

    fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, Self::Error>;
}
