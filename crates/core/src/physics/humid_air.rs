//! Closed-form humid-air property model
//!
//! Provides the four state-point queries the chart sweep needs, behind the
//! [`HumidAirModel`] trait so the sweep engine never depends on a concrete
//! equation set. The bundled [`MagnusModel`] uses the Magnus/Tetens
//! saturation-pressure approximation together with the ASHRAE perfect-gas
//! moist-air relations (humidity ratio, specific enthalpy, wet-bulb
//! balance, moist-air density).
//!
//! Accuracy is in the sub-percent range against full equation-of-state
//! solvers over 0-50 °C, which is adequate for chart drawing.
//!
//! # Scientific References
//!
//! - ASHRAE Handbook Fundamentals (2017), Ch. 1 "Psychrometrics"
//! - Magnus/Tetens saturation vapor pressure approximation
//!   (Alduchov & Eskridge, 1996)

use crate::core_types::units::{Kelvin, Pascals};
use crate::error::PropertyError;

/// Magnus formula coefficient (dimensionless)
const MAGNUS_A: f64 = 17.27;

/// Magnus formula coefficient (°C)
const MAGNUS_B: f64 = 237.3;

/// Saturation vapor pressure at 0°C (Pa)
const P_SAT_TRIPLE: f64 = 610.78;

/// Molecular weight ratio of water vapor to dry air
const MW_RATIO: f64 = 0.621945;

/// Specific heat of dry air (J/(kg·K))
const CP_AIR: f64 = 1006.0;

/// Specific heat of water vapor (J/(kg·K))
const CP_VAPOR: f64 = 1860.0;

/// Latent heat of vaporization at 0°C (J/kg)
const LATENT_HEAT: f64 = 2_501_000.0;

/// Specific gas constant for dry air (J/(kg·K))
const R_DRY_AIR: f64 = 287.05;

/// Specific gas constant for water vapor (J/(kg·K))
const R_VAPOR: f64 = 461.5;

/// Humid-air state-point queries used by the chart sweep
///
/// Every method resolves one target property from two independent state
/// variables plus total pressure. A query fails with
/// [`PropertyError::OutOfDomain`] when the combination has no physical
/// solution; callers decide whether to skip or surface the failure.
pub trait HumidAirModel {
    /// Dew-point temperature from dry bulb, total pressure and RH (0-1)
    ///
    /// # Errors
    /// `OutOfDomain` when RH lies outside (0, 1] (no finite dew point at
    /// zero vapor pressure, no subsaturated state above RH 1).
    fn dew_point(&self, t: Kelvin, p: Pascals, rh: f64) -> Result<Kelvin, PropertyError>;

    /// Relative humidity from dry bulb, total pressure and specific
    /// enthalpy of moist air (J/kg dry air)
    ///
    /// # Errors
    /// `OutOfDomain` when the enthalpy is below that of dry air at the
    /// given temperature (implies negative moisture content).
    fn relative_humidity_from_enthalpy(
        &self,
        t: Kelvin,
        p: Pascals,
        h: f64,
    ) -> Result<f64, PropertyError>;

    /// Relative humidity from dry bulb, total pressure and wet-bulb
    /// temperature
    ///
    /// The result is not clamped: thermodynamically impossible inputs
    /// (wet bulb above dry bulb, or drier than achievable) produce values
    /// outside [0, 1] that callers must reject.
    ///
    /// # Errors
    /// `OutOfDomain` when saturation pressure at the wet bulb reaches the
    /// total pressure (boiling), leaving the balance unsolvable.
    fn relative_humidity_from_wet_bulb(
        &self,
        t: Kelvin,
        p: Pascals,
        t_wb: Kelvin,
    ) -> Result<f64, PropertyError>;

    /// Relative humidity from dry bulb, total pressure and moist-air
    /// density (kg/m³)
    ///
    /// Like the wet-bulb query, out-of-range densities yield RH outside
    /// [0, 1] for the caller to reject.
    ///
    /// # Errors
    /// `OutOfDomain` when temperature or pressure is non-positive.
    fn relative_humidity_from_density(
        &self,
        t: Kelvin,
        p: Pascals,
        rho: f64,
    ) -> Result<f64, PropertyError>;
}

/// Magnus/ASHRAE closed-form model
///
/// Stateless; one instance serves any number of concurrent sweeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnusModel;

/// Saturation vapor pressure over liquid water (Pa)
///
/// Tetens/Magnus: Psat = 610.78 · exp(17.27·t / (t + 237.3)), t in °C
fn saturation_pressure(t_c: f64) -> f64 {
    P_SAT_TRIPLE * (MAGNUS_A * t_c / (t_c + MAGNUS_B)).exp()
}

/// Vapor pressure (Pa) implied by a humidity ratio at total pressure P
fn vapor_pressure_from_ratio(w: f64, p: f64) -> f64 {
    w * p / (MW_RATIO + w)
}

impl HumidAirModel for MagnusModel {
    fn dew_point(&self, t: Kelvin, _p: Pascals, rh: f64) -> Result<Kelvin, PropertyError> {
        if rh.is_nan() || rh <= 0.0 || rh > 1.0 {
            return Err(PropertyError::OutOfDomain(format!(
                "relative humidity {rh} not in (0, 1]"
            )));
        }
        let t_c = t.to_celsius().value();
        // Invert Magnus: pv = RH·Psat(t), then solve Psat(Tdp) = pv
        let pv = rh * saturation_pressure(t_c);
        let alpha = (pv / P_SAT_TRIPLE).ln();
        let dew_c = MAGNUS_B * alpha / (MAGNUS_A - alpha);
        Ok(Kelvin::new(dew_c + 273.15))
    }

    fn relative_humidity_from_enthalpy(
        &self,
        t: Kelvin,
        p: Pascals,
        h: f64,
    ) -> Result<f64, PropertyError> {
        let t_c = t.to_celsius().value();
        // h = cp_a·t + W·(h_fg + cp_v·t), solved for the humidity ratio W
        let w = (h - CP_AIR * t_c) / (LATENT_HEAT + CP_VAPOR * t_c);
        if w < 0.0 {
            return Err(PropertyError::OutOfDomain(format!(
                "enthalpy {h} J/kg below dry-air enthalpy at {t_c} °C"
            )));
        }
        let pv = vapor_pressure_from_ratio(w, p.value());
        Ok(pv / saturation_pressure(t_c))
    }

    fn relative_humidity_from_wet_bulb(
        &self,
        t: Kelvin,
        p: Pascals,
        t_wb: Kelvin,
    ) -> Result<f64, PropertyError> {
        let t_c = t.to_celsius().value();
        let wb_c = t_wb.to_celsius().value();

        let p_sat_wb = saturation_pressure(wb_c);
        if p_sat_wb >= p.value() {
            return Err(PropertyError::OutOfDomain(format!(
                "saturation pressure at wet bulb {wb_c} °C reaches total pressure"
            )));
        }
        // Saturated humidity ratio at the wet-bulb temperature
        let w_s_wb = MW_RATIO * p_sat_wb / (p.value() - p_sat_wb);

        // ASHRAE Fundamentals (2017) Eq. 33, coefficients in kJ/kg
        let w = ((2501.0 - 2.326 * wb_c) * w_s_wb - 1.006 * (t_c - wb_c))
            / (2501.0 + 1.86 * t_c - 4.186 * wb_c);
        if w <= -MW_RATIO {
            return Err(PropertyError::OutOfDomain(format!(
                "wet-bulb balance has no vapor-pressure solution at {t_c} °C"
            )));
        }

        let pv = vapor_pressure_from_ratio(w, p.value());
        Ok(pv / saturation_pressure(t_c))
    }

    fn relative_humidity_from_density(
        &self,
        t: Kelvin,
        p: Pascals,
        rho: f64,
    ) -> Result<f64, PropertyError> {
        if t.value() <= 0.0 || p.value() <= 0.0 {
            return Err(PropertyError::OutOfDomain(format!(
                "non-positive temperature ({t}) or pressure ({p})"
            )));
        }
        // rho = (P - pv)/(R_da·T) + pv/(R_v·T), linear in pv
        let pv = (p.value() / R_DRY_AIR - rho * t.value()) / (1.0 / R_DRY_AIR - 1.0 / R_VAPOR);
        Ok(pv / saturation_pressure(t.to_celsius().value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SEA_LEVEL: Pascals = Pascals::new(101325.0);

    fn kelvin(t_c: f64) -> Kelvin {
        Kelvin::new(t_c + 273.15)
    }

    /// Forward moist-air enthalpy (J/kg dry air) for round-trip checks
    fn enthalpy(t_c: f64, w: f64) -> f64 {
        CP_AIR * t_c + w * (LATENT_HEAT + CP_VAPOR * t_c)
    }

    #[test]
    fn test_saturated_dew_point_equals_dry_bulb() {
        let model = MagnusModel;
        for t_c in [0.0, 10.0, 25.0, 50.0] {
            let dew = model.dew_point(kelvin(t_c), SEA_LEVEL, 1.0).unwrap();
            assert_relative_eq!(dew.to_celsius().value(), t_c, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_dew_point_below_dry_bulb_when_subsaturated() {
        let model = MagnusModel;
        let dew = model.dew_point(kelvin(25.0), SEA_LEVEL, 0.5).unwrap();
        assert!(dew < kelvin(25.0));
        // Known psychrometric reference: ~13.9 °C dew point at 25 °C / 50% RH
        assert_relative_eq!(dew.to_celsius().value(), 13.86, epsilon = 0.2);
    }

    #[test]
    fn test_dew_point_monotonic_in_rh() {
        let model = MagnusModel;
        let mut last = f64::NEG_INFINITY;
        for i in 1..=10 {
            let rh = f64::from(i) / 10.0;
            let dew = model.dew_point(kelvin(30.0), SEA_LEVEL, rh).unwrap();
            assert!(dew.value() > last, "dew point should rise with RH");
            last = dew.value();
        }
    }

    #[test]
    fn test_dew_point_rejects_out_of_range_rh() {
        let model = MagnusModel;
        assert!(model.dew_point(kelvin(25.0), SEA_LEVEL, 0.0).is_err());
        assert!(model.dew_point(kelvin(25.0), SEA_LEVEL, -0.1).is_err());
        assert!(model.dew_point(kelvin(25.0), SEA_LEVEL, 1.2).is_err());
    }

    #[test]
    fn test_enthalpy_round_trip() {
        let model = MagnusModel;
        let t_c = 30.0;
        let w = 0.010; // 10 g water per kg dry air
        let h = enthalpy(t_c, w);

        let rh = model
            .relative_humidity_from_enthalpy(kelvin(t_c), SEA_LEVEL, h)
            .unwrap();
        // Recover the humidity ratio from the resolved RH
        let pv = rh * saturation_pressure(t_c);
        let w_back = MW_RATIO * pv / (101325.0 - pv);
        assert_relative_eq!(w_back, w, max_relative = 1e-9);
    }

    #[test]
    fn test_enthalpy_below_dry_air_is_out_of_domain() {
        let model = MagnusModel;
        // Dry air at 40 °C already holds ~40 kJ/kg; 20 kJ/kg is unreachable
        let result = model.relative_humidity_from_enthalpy(kelvin(40.0), SEA_LEVEL, 20e3);
        assert!(result.is_err());
    }

    #[test]
    fn test_wet_bulb_equal_to_dry_bulb_is_saturation() {
        let model = MagnusModel;
        let rh = model
            .relative_humidity_from_wet_bulb(kelvin(20.0), SEA_LEVEL, kelvin(20.0))
            .unwrap();
        assert_relative_eq!(rh, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_wet_bulb_depression_lowers_rh() {
        let model = MagnusModel;
        let rh_small = model
            .relative_humidity_from_wet_bulb(kelvin(25.0), SEA_LEVEL, kelvin(22.0))
            .unwrap();
        let rh_large = model
            .relative_humidity_from_wet_bulb(kelvin(25.0), SEA_LEVEL, kelvin(15.0))
            .unwrap();
        assert!(rh_small > rh_large);
        assert!((0.0..=1.0).contains(&rh_small));
        assert!((0.0..=1.0).contains(&rh_large));
    }

    #[test]
    fn test_infeasible_wet_bulb_falls_outside_unit_range() {
        let model = MagnusModel;
        // Wet bulb far above dry bulb is thermodynamically impossible;
        // the sweep rejects such points by the RH in [0, 1] check
        let rh = model
            .relative_humidity_from_wet_bulb(kelvin(5.0), SEA_LEVEL, kelvin(30.0))
            .unwrap();
        assert!(rh > 1.0);
    }

    #[test]
    fn test_density_of_standard_dry_air() {
        let model = MagnusModel;
        // ISA sea-level density 1.225 kg/m³ at 15 °C corresponds to dry air
        let rh = model
            .relative_humidity_from_density(kelvin(15.0), SEA_LEVEL, 1.225)
            .unwrap();
        assert_relative_eq!(rh, 0.0, epsilon = 0.02);
    }

    #[test]
    fn test_density_decreasing_with_moisture() {
        let model = MagnusModel;
        // Moist air is lighter: lower density at fixed T/P means more vapor
        let rh_dense = model
            .relative_humidity_from_density(kelvin(30.0), SEA_LEVEL, 1.164)
            .unwrap();
        let rh_light = model
            .relative_humidity_from_density(kelvin(30.0), SEA_LEVEL, 1.155)
            .unwrap();
        assert!(rh_light > rh_dense);
    }
}
