//! Error types for planning and for the outer run pipeline.

use thiserror::Error;

use crate::position::Position;

/// Failures raised by the planning core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Angle is not one of the 16 compass headings or the hover sentinel.
    #[error("angle {0} is not a multiple of 22.5 in [0, 360] or the hover angle")]
    InvalidHeading(f64),

    /// No single restaurant offers every pizza in the order.
    #[error("no restaurant serves every pizza in order {order_no}")]
    RestaurantNotFound { order_no: String },

    /// Every heading out of `position` is visited or forbidden.
    #[error("search stuck at ({}, {}) after {steps} steps", .position.lng, .position.lat)]
    Stuck { position: Position, steps: usize },

    /// The leg did not reach `destination` within the step cap.
    #[error("no arrival at ({}, {}) within {max_steps} steps", .destination.lng, .destination.lat)]
    StepLimitExceeded { destination: Position, max_steps: usize },
}

/// Failures raised while fetching data, planning a day and writing results.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("REST service is not responding")]
    ServiceDown,

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Plan(#[from] PlanError),
}
