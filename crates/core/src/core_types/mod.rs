//! Core data types shared across the library

pub mod chart;
pub mod units;

pub use chart::{Chart, Curve, CurveFamily, LineStyle};
pub use units::{Celsius, Kelvin, Pascals};
