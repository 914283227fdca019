//! ILP REST service client.

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::geometry::NamedRegion;
use crate::model::{Order, Restaurant};
use crate::traits::DeliveryDataSource;

#[derive(Debug, Clone)]
pub struct IlpConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for IlpConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ilp-rest-2024.azurewebsites.net".to_string(),
            timeout_secs: 10,
        }
    }
}

impl IlpConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct IlpClient {
    config: IlpConfig,
    client: reqwest::blocking::Client,
}

impl IlpClient {
    /// Create a new client. No request is made until data is fetched.
    pub fn new(config: IlpConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, reqwest::Error> {
        self.client
            .get(self.url(path))
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())
    }
}

impl DeliveryDataSource for IlpClient {
    type Error = reqwest::Error;

    fn is_alive(&self) -> Result<bool, Self::Error> {
        let health: Health = self.fetch("actuator/health/livenessState")?;
        Ok(health.status.eq_ignore_ascii_case("UP"))
    }

    fn restaurants(&self) -> Result<Vec<Restaurant>, Self::Error> {
        let restaurants: Vec<Restaurant> = self.fetch("restaurants")?;
        info!(count = restaurants.len(), "fetched restaurants");
        Ok(restaurants)
    }

    fn orders_on(&self, date: NaiveDate) -> Result<Vec<Order>, Self::Error> {
        let orders: Vec<Order> = self.fetch("orders")?;
        let total = orders.len();
        let on_date: Vec<Order> = orders
            .into_iter()
            .filter(|order| order.order_date == date)
            .collect();
        info!(%date, total, on_date = on_date.len(), "fetched orders");
        Ok(on_date)
    }

    fn central_area(&self) -> Result<NamedRegion, Self::Error> {
        self.fetch("centralArea")
    }

    fn no_fly_zones(&self) -> Result<Vec<NamedRegion>, Self::Error> {
        let zones: Vec<NamedRegion> = self.fetch("noFlyZones")?;
        info!(count = zones.len(), "fetched no-fly zones");
        Ok(zones)
    }
}

#[derive(Debug, Deserialize)]
struct Health {
    status: String,
}
