//! Moist-air physics
//!
//! Two independent pieces: the barometric pressure estimator
//! ([`atmosphere`]) and the closed-form humid-air property model
//! ([`humid_air`]). Neither holds state; everything is a pure function of
//! its inputs.

pub mod atmosphere;
pub mod humid_air;

pub use atmosphere::altitude_to_pressure;
pub use humid_air::{HumidAirModel, MagnusModel};
