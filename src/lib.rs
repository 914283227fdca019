//! drone-planner core
//!
//! Plans round-trip delivery flights for a single drone through an airspace
//! of no-fly zones and a central area it may not re-enter.

pub mod config;
pub mod error;
pub mod position;
pub mod geometry;
pub mod constraints;
pub mod movement;
pub mod cache;
pub mod planner;
pub mod traits;
pub mod model;
pub mod assembler;
pub mod validation;
pub mod ilp;
pub mod polyline;
pub mod output;
pub mod session;
