//! Order validation against the restaurant catalogue.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::warn;

use crate::config::{MAX_PIZZAS_PER_ORDER, ORDER_CHARGE_IN_PENCE};
use crate::model::{CreditCardInformation, Order, OrderStatus, OrderValidationCode, Pizza, Restaurant};

/// First problem found with `order`, or [`OrderValidationCode::NoError`].
pub fn check_order(order: &Order, restaurants: &[Restaurant]) -> OrderValidationCode {
    if order.pizzas_in_order.is_empty() {
        return OrderValidationCode::EmptyOrder;
    }

    let mut offered: HashMap<&str, (&Restaurant, &Pizza)> = HashMap::new();
    for restaurant in restaurants {
        for pizza in &restaurant.menu {
            offered.insert(pizza.name.as_str(), (restaurant, pizza));
        }
    }

    let mut supplier: Option<&Restaurant> = None;
    for (index, pizza) in order.pizzas_in_order.iter().enumerate() {
        let Some(&(restaurant, listed)) = offered.get(pizza.name.as_str()) else {
            return OrderValidationCode::PizzaNotDefined;
        };
        match supplier {
            None => supplier = Some(restaurant),
            Some(first) if first.name != restaurant.name => {
                return OrderValidationCode::PizzaFromMultipleRestaurants;
            }
            Some(_) => {}
        }
        if pizza.price_in_pence != listed.price_in_pence {
            return OrderValidationCode::PriceForPizzaInvalid;
        }
        if index >= MAX_PIZZAS_PER_ORDER {
            return OrderValidationCode::MaxPizzaCountExceeded;
        }
    }

    if let Some(restaurant) = supplier {
        if !restaurant.is_open_on(order.order_date) {
            return OrderValidationCode::RestaurantClosed;
        }
    }

    if let Some(code) = check_card(&order.credit_card_information, order.order_date) {
        return code;
    }

    let expected: u32 = order
        .pizzas_in_order
        .iter()
        .map(|pizza| pizza.price_in_pence)
        .sum::<u32>()
        + ORDER_CHARGE_IN_PENCE;
    if expected != order.price_total_in_pence {
        return OrderValidationCode::TotalIncorrect;
    }

    OrderValidationCode::NoError
}

/// Validates `order` in place, setting its status and validation code.
pub fn validate_order(order: &mut Order, restaurants: &[Restaurant]) -> OrderValidationCode {
    let code = check_order(order, restaurants);
    order.order_validation_code = code;
    order.order_status = if code == OrderValidationCode::NoError {
        OrderStatus::ValidButNotDelivered
    } else {
        warn!(order_no = %order.order_no, ?code, "invalid order");
        OrderStatus::Invalid
    };
    code
}

/// Validates every order and returns clones of the valid ones, in order.
pub fn valid_orders(orders: &mut [Order], restaurants: &[Restaurant]) -> Vec<Order> {
    orders
        .iter_mut()
        .filter_map(|order| {
            (validate_order(order, restaurants) == OrderValidationCode::NoError).then(|| order.clone())
        })
        .collect()
}

fn check_card(card: &CreditCardInformation, order_date: NaiveDate) -> Option<OrderValidationCode> {
    if !is_digits(&card.credit_card_number, 16) {
        return Some(OrderValidationCode::CardNumberInvalid);
    }
    if !is_digits(&card.cvv, 3) {
        return Some(OrderValidationCode::CvvInvalid);
    }
    match card_valid_until(&card.credit_card_expiry) {
        Some(first_invalid_day) if order_date < first_invalid_day => None,
        _ => Some(OrderValidationCode::ExpiryDateInvalid),
    }
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

/// First day on which a card expiring `MM/YY` is no longer valid.
fn card_valid_until(expiry: &str) -> Option<NaiveDate> {
    let (month, year) = expiry.split_once('/')?;
    if month.len() != 2 || year.len() != 2 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = 2000 + year.parse::<i32>().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}
