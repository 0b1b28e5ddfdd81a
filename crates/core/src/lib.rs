//! Psychrometric Chart Core Library
//!
//! Computes the curve families of a psychrometric chart (dew point vs.
//! dry-bulb temperature) for a given altitude: constant relative humidity,
//! constant enthalpy, constant wet-bulb temperature and constant moist-air
//! density iso-lines, plus the saturation boundary.
//!
//! The library produces an explicit [`Chart`] value; rendering is left to
//! the caller (the `demo-headless` binary draws it with plotters).
//!
//! ## Structure
//!
//! - [`physics`]: barometric pressure estimator and the closed-form
//!   humid-air property model behind the [`HumidAirModel`] trait
//! - [`sweep`]: the chart sweep engine that builds the curve families
//! - [`core_types`]: chart data model and unit newtypes

// Core types and utilities
pub mod core_types;

// Error taxonomy
pub mod error;

// Moist-air physics and the pressure estimator
pub mod physics;

// Chart sweep engine
pub mod sweep;

// Re-export core types
pub use core_types::{Celsius, Chart, Curve, CurveFamily, Kelvin, LineStyle, Pascals};

// Re-export physics entry points
pub use physics::{altitude_to_pressure, HumidAirModel, MagnusModel};

// Re-export sweep engine
pub use sweep::{generate_chart, ChartConfig};

// Re-export errors
pub use error::{ChartError, PropertyError};
