//! Restaurants and orders as served by the ILP REST service.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::traits::{DeliveryOrder, Kitchen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub name: String,
    pub price_in_pence: u32,
}

impl Pizza {
    pub fn new(name: impl Into<String>, price_in_pence: u32) -> Self {
        Self {
            name: name.into(),
            price_in_pence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: Position,
    pub opening_days: Vec<DayOfWeek>,
    pub menu: Vec<Pizza>,
}

impl Restaurant {
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.opening_days.contains(&DayOfWeek::from(date.weekday()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Undefined,
    ValidButNotDelivered,
    Delivered,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderValidationCode {
    #[default]
    Undefined,
    NoError,
    CardNumberInvalid,
    ExpiryDateInvalid,
    CvvInvalid,
    TotalIncorrect,
    PriceForPizzaInvalid,
    EmptyOrder,
    MaxPizzaCountExceeded,
    PizzaNotDefined,
    PizzaFromMultipleRestaurants,
    RestaurantClosed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInformation {
    pub credit_card_number: String,
    /// `MM/YY`
    pub credit_card_expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_no: String,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub order_validation_code: OrderValidationCode,
    pub price_total_in_pence: u32,
    pub pizzas_in_order: Vec<Pizza>,
    pub credit_card_information: CreditCardInformation,
}

impl DeliveryOrder for Order {
    fn order_no(&self) -> &str {
        &self.order_no
    }

    fn pizza_names(&self) -> Vec<&str> {
        self.pizzas_in_order.iter().map(|p| p.name.as_str()).collect()
    }
}

impl Kitchen for Restaurant {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Position {
        self.location
    }

    fn menu_names(&self) -> Vec<&str> {
        self.menu.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_from_api_json() {
        let json = r#"{
            "name": "Civerinos Slice",
            "location": {"lng": -3.1912869215011597, "lat": 55.945535152517735},
            "openingDays": ["MONDAY", "TUESDAY", "FRIDAY", "SATURDAY", "SUNDAY"],
            "menu": [
                {"name": "R1: Margarita", "priceInPence": 1000},
                {"name": "R1: Calzone", "priceInPence": 1400}
            ]
        }"#;
        let restaurant: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(restaurant.menu.len(), 2);
        assert_eq!(restaurant.opening_days[0], DayOfWeek::Monday);
        assert_eq!(restaurant.menu_names(), vec!["R1: Margarita", "R1: Calzone"]);
    }

    #[test]
    fn test_order_from_api_json_defaults_status() {
        let json = r#"{
            "orderNo": "19514FE0",
            "orderDate": "2023-09-01",
            "priceTotalInPence": 2500,
            "pizzasInOrder": [
                {"name": "R1: Margarita", "priceInPence": 1000},
                {"name": "R1: Calzone", "priceInPence": 1400}
            ],
            "creditCardInformation": {
                "creditCardNumber": "4485959141852684",
                "creditCardExpiry": "10/25",
                "cvv": "816"
            }
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_status, OrderStatus::Undefined);
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
        assert_eq!(order.pizza_names().len(), 2);
    }

    #[test]
    fn test_status_names_match_api() {
        let json = serde_json::to_string(&OrderStatus::ValidButNotDelivered).unwrap();
        assert_eq!(json, "\"VALID_BUT_NOT_DELIVERED\"");
        let code: OrderValidationCode = serde_json::from_str("\"PIZZA_FROM_MULTIPLE_RESTAURANTS\"").unwrap();
        assert_eq!(code, OrderValidationCode::PizzaFromMultipleRestaurants);
    }

    #[test]
    fn test_is_open_on() {
        let restaurant = Restaurant {
            name: "Sora Lella Vegan Restaurant".to_string(),
            location: Position::new(-3.202541470527649, 55.943284737579376),
            opening_days: vec![DayOfWeek::Monday],
            menu: Vec::new(),
        };
        // 2023-09-04 was a Monday
        assert!(restaurant.is_open_on(NaiveDate::from_ymd_opt(2023, 9, 4).unwrap()));
        assert!(!restaurant.is_open_on(NaiveDate::from_ymd_opt(2023, 9, 5).unwrap()));
    }
}
