//! Barometric altitude-to-pressure estimation
//!
//! Implements the international barometric formula for the troposphere
//! with ICAO standard-atmosphere constants.
//!
//! # Scientific References
//!
//! - ICAO Standard Atmosphere (1993)
//! - Holton, J.R. (2004). "An Introduction to Dynamic Meteorology"

use crate::core_types::units::Pascals;

/// Sea level standard atmospheric pressure (Pa)
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0;

/// Standard temperature at sea level (K)
pub const STANDARD_TEMPERATURE: f64 = 288.15;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.80665;

/// Tropospheric temperature lapse rate (K/m)
pub const LAPSE_RATE: f64 = 0.0065;

/// Specific gas constant for dry air (J/(kg·K))
pub const R_DRY_AIR: f64 = 287.05;

/// Convert altitude in meters to atmospheric pressure
///
/// International barometric formula:
///
/// P = P₀ · (1 − L·h / T₀) ^ (g / (R·L))
///
/// Valid for the troposphere (h < T₀/L ≈ 44.3 km); no range check is
/// applied, matching the physical model's domain. Negative altitudes
/// (below sea level) are legitimate inputs and yield pressures above
/// 101325 Pa.
#[must_use]
pub fn altitude_to_pressure(altitude_m: f64) -> Pascals {
    let base = 1.0 - LAPSE_RATE * altitude_m / STANDARD_TEMPERATURE;
    let exponent = GRAVITY / (R_DRY_AIR * LAPSE_RATE);
    Pascals::new(SEA_LEVEL_PRESSURE * base.powf(exponent))
}
