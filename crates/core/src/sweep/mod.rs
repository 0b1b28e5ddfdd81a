//! Chart sweep engine
//!
//! Builds the five curve families of a psychrometric chart by sweeping a
//! dry-bulb temperature grid against a [`HumidAirModel`]:
//!
//! 1. constant-RH iso-lines plus the saturation boundary
//! 2. constant specific-enthalpy lines
//! 3. constant wet-bulb-temperature lines
//! 4. constant moist-air-density lines
//!
//! Pressure is computed once per chart from the altitude and reused for
//! every query. Property-model failures never escape: a point the model
//! cannot resolve is dropped, and a parametric curve that resolves no
//! points at all is omitted from the chart. Only a degenerate
//! configuration fails the call.
//!
//! The sweep is pure: identical inputs yield bit-identical charts.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::core_types::chart::{Chart, Curve, CurveFamily};
use crate::core_types::units::{Celsius, Kelvin, Pascals};
use crate::error::ChartError;
use crate::physics::atmosphere::altitude_to_pressure;
use crate::physics::humid_air::HumidAirModel;

/// Dry-bulb grid resolution per curve
pub const GRID_POINTS: usize = 100;

/// Number of constant-enthalpy lines
const ENTHALPY_LINES: usize = 6;

/// Constant-enthalpy sweep bounds (J/kg dry air)
const ENTHALPY_RANGE: (f64, f64) = (20e3, 100e3);

/// Number of constant-wet-bulb lines
const WET_BULB_LINES: usize = 5;

/// Constant-wet-bulb sweep bounds (°C)
const WET_BULB_RANGE: (f64, f64) = (10.0, 30.0);

/// Number of constant-density lines
const DENSITY_LINES: usize = 6;

/// Constant-density sweep bounds (kg/m³)
const DENSITY_RANGE: (f64, f64) = (0.8, 1.3);

/// Chart sweep configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Altitude above sea level (m); feeds the pressure estimator
    pub altitude_m: f64,
    /// Lower dry-bulb bound (°C)
    pub t_min_c: f64,
    /// Upper dry-bulb bound (°C)
    pub t_max_c: f64,
    /// Number of RH iso-lines between 10% and 100% inclusive
    pub rh_steps: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            altitude_m: 0.0,
            t_min_c: 0.0,
            t_max_c: 50.0,
            rh_steps: 10,
        }
    }
}

impl ChartConfig {
    /// Reject degenerate configurations before any sweep work starts
    ///
    /// # Errors
    /// `InvalidConfig` when the temperature bounds are inverted or equal,
    /// or when no RH iso-lines are requested.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.t_min_c.is_finite() || !self.t_max_c.is_finite() || self.t_min_c >= self.t_max_c {
            return Err(ChartError::InvalidConfig(format!(
                "t_min ({}) must be strictly below t_max ({})",
                self.t_min_c, self.t_max_c
            )));
        }
        if self.rh_steps == 0 {
            return Err(ChartError::InvalidConfig(
                "rh_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Evenly spaced samples over [start, stop], both ends inclusive
///
/// Uses the ratio form so the last sample lands on `stop` exactly; a
/// cumulative-step overshoot of one ULP past 1.0 would invalidate the
/// 100% RH query.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }
    let span = stop - start;
    let last = n as f64 - 1.0;
    (0..n).map(|i| start + span * (i as f64) / last).collect()
}

/// Generate a psychrometric chart for the configured altitude and range
///
/// The returned [`Chart`] is a plain value with no rendering state;
/// hand it to a frontend (the demo binary uses plotters) or serialize it.
///
/// # Errors
/// `InvalidConfig` for degenerate input (see [`ChartConfig::validate`]);
/// property-model failures are handled internally by point omission and
/// never surface here.
pub fn generate_chart<M: HumidAirModel>(
    config: &ChartConfig,
    model: &M,
) -> Result<Chart, ChartError> {
    config.validate()?;

    let pressure = altitude_to_pressure(config.altitude_m);
    debug!(
        "Sweeping {} to {} °C at {} m ({pressure})",
        config.t_min_c, config.t_max_c, config.altitude_m
    );

    let grid: Vec<Kelvin> = linspace(config.t_min_c, config.t_max_c, GRID_POINTS)
        .into_iter()
        .map(|t_c| Celsius::new(t_c).to_kelvin())
        .collect();

    let mut curves: Vec<Curve> = Vec::new();

    // Constant-RH iso-lines, 10%..100%
    for rh in linspace(0.1, 1.0, config.rh_steps) {
        let label = format!("{}% RH", (rh * 100.0).round());
        curves.push(rh_curve(model, &grid, pressure, rh, label, CurveFamily::RelativeHumidity));
    }

    // Saturation boundary, always drawn on top of the RH family
    curves.push(rh_curve(
        model,
        &grid,
        pressure,
        1.0,
        "100% RH".to_string(),
        CurveFamily::Saturation,
    ));

    // Constant-enthalpy lines; unresolvable points are dropped
    let (h_lo, h_hi) = ENTHALPY_RANGE;
    for h in linspace(h_lo, h_hi, ENTHALPY_LINES) {
        let mut curve = Curve::new(
            format!("h={:.0} kJ/kg", h / 1000.0),
            CurveFamily::Enthalpy,
        );
        for &t in &grid {
            if let Ok(rh) = model.relative_humidity_from_enthalpy(t, pressure, h) {
                if let Ok(dew) = model.dew_point(t, pressure, rh) {
                    curve.push(t.to_celsius().value(), dew.to_celsius().value());
                }
            }
        }
        push_if_resolved(&mut curves, curve);
    }

    // Constant-wet-bulb lines; accept only RH within [0, 1]
    let (wb_lo, wb_hi) = WET_BULB_RANGE;
    for wb_c in linspace(wb_lo, wb_hi, WET_BULB_LINES) {
        let t_wb = Celsius::new(wb_c).to_kelvin();
        let mut curve = Curve::new(format!("Twb={wb_c:.0}°C"), CurveFamily::WetBulb);
        for &t in &grid {
            if let Ok(rh) = model.relative_humidity_from_wet_bulb(t, pressure, t_wb) {
                if (0.0..=1.0).contains(&rh) {
                    if let Ok(dew) = model.dew_point(t, pressure, rh) {
                        curve.push(t.to_celsius().value(), dew.to_celsius().value());
                    }
                }
            }
        }
        push_if_resolved(&mut curves, curve);
    }

    // Constant-density lines; same accept/skip pattern as wet bulb
    let (rho_lo, rho_hi) = DENSITY_RANGE;
    for rho in linspace(rho_lo, rho_hi, DENSITY_LINES) {
        let mut curve = Curve::new(format!("Density={rho:.2} kg/m3"), CurveFamily::Density);
        for &t in &grid {
            if let Ok(rh) = model.relative_humidity_from_density(t, pressure, rho) {
                if (0.0..=1.0).contains(&rh) {
                    if let Ok(dew) = model.dew_point(t, pressure, rh) {
                        curve.push(t.to_celsius().value(), dew.to_celsius().value());
                    }
                }
            }
        }
        push_if_resolved(&mut curves, curve);
    }

    info!(
        "Assembled chart with {} curves at {} m",
        curves.len(),
        config.altitude_m
    );

    Ok(Chart {
        title: format!(
            "Psychrometric Chart (Y: Dew Point) at Altitude {} m",
            config.altitude_m
        ),
        x_label: "Dry Bulb Temperature [°C]".to_string(),
        y_label: "Dew Point Temperature [°C]".to_string(),
        curves,
    })
}

/// Sweep one constant-RH curve across the full grid
///
/// RH-family queries cannot fail for RH in (0, 1], so the curve always
/// covers the whole grid.
fn rh_curve<M: HumidAirModel>(
    model: &M,
    grid: &[Kelvin],
    pressure: Pascals,
    rh: f64,
    label: String,
    family: CurveFamily,
) -> Curve {
    let mut curve = Curve::new(label, family);
    for &t in grid {
        if let Ok(dew) = model.dew_point(t, pressure, rh) {
            curve.push(t.to_celsius().value(), dew.to_celsius().value());
        }
    }
    curve
}

/// Keep a parametric curve only when it resolved at least one point
fn push_if_resolved(curves: &mut Vec<Curve>, curve: Curve) {
    if curve.is_empty() {
        trace!("Omitting '{}': no resolvable points", curve.label);
    } else {
        curves.push(curve);
    }
}
