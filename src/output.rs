//! Result files for a planned day.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use crate::config::DATE_FORMAT;
use crate::error::AppError;
use crate::model::{Order, OrderStatus, OrderValidationCode};
use crate::movement::Movement;
use crate::polyline::Polyline;

/// One line of `flightpath-*.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightMove {
    pub order_no: String,
    pub from_longitude: f64,
    pub from_latitude: f64,
    pub angle: f64,
    pub to_longitude: f64,
    pub to_latitude: f64,
}

impl From<&Movement> for FlightMove {
    fn from(movement: &Movement) -> Self {
        Self {
            order_no: movement.order_no().to_string(),
            from_longitude: movement.start().lng,
            from_latitude: movement.start().lat,
            angle: movement.heading().degrees(),
            to_longitude: movement.end().lng,
            to_latitude: movement.end().lat,
        }
    }
}

/// One line of `deliveries-*.json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub order_no: String,
    pub order_status: OrderStatus,
    pub order_validation_code: OrderValidationCode,
    pub cost_in_pence: u32,
}

impl From<&Order> for Delivery {
    fn from(order: &Order) -> Self {
        Self {
            order_no: order.order_no.clone(),
            order_status: order.order_status,
            order_validation_code: order.order_validation_code,
            cost_in_pence: order.price_total_in_pence,
        }
    }
}

pub fn flight_moves(movements: &[Movement]) -> Vec<FlightMove> {
    movements.iter().map(FlightMove::from).collect()
}

pub fn deliveries(orders: &[Order]) -> Vec<Delivery> {
    orders.iter().map(Delivery::from).collect()
}

/// A FeatureCollection holding the flown track as one LineString.
pub fn geojson(track: &Polyline) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": track.coordinates(),
            },
        }],
    })
}

/// Paths of the three result files for `date`.
#[derive(Debug, Clone)]
pub struct ResultFiles {
    pub deliveries: PathBuf,
    pub flightpath: PathBuf,
    pub drone: PathBuf,
}

impl ResultFiles {
    pub fn new(dir: &Path, date: NaiveDate) -> Self {
        let date = date.format(DATE_FORMAT);
        Self {
            deliveries: dir.join(format!("deliveries-{}.json", date)),
            flightpath: dir.join(format!("flightpath-{}.json", date)),
            drone: dir.join(format!("drone-{}.geojson", date)),
        }
    }
}

/// Writes the deliveries, flight path and GeoJSON files into `dir`.
pub fn write_results(
    dir: &Path,
    date: NaiveDate,
    orders: &[Order],
    movements: &[Movement],
) -> Result<ResultFiles, AppError> {
    fs::create_dir_all(dir)?;
    let files = ResultFiles::new(dir, date);

    write_json(&files.deliveries, &deliveries(orders))?;
    write_json(&files.flightpath, &flight_moves(movements))?;
    write_json(&files.drone, &geojson(&Polyline::from_movements(movements)))?;

    info!(dir = %dir.display(), %date, "wrote result files");
    Ok(files)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
