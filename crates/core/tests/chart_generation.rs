//! End-to-end chart generation scenarios
use approx::assert_relative_eq;
use psychro_core::{
    altitude_to_pressure, generate_chart, ChartConfig, CurveFamily, HumidAirModel, Kelvin,
    MagnusModel, Pascals,
};

#[test]
fn test_sea_level_default_chart() {
    let config = ChartConfig::default();
    let chart = generate_chart(&config, &MagnusModel).unwrap();

    // Pressure at sea level is standard pressure exactly
    assert_relative_eq!(*altitude_to_pressure(config.altitude_m), 101325.0);

    // 10 RH iso-lines plus the saturation boundary
    let rh_family = chart.family(CurveFamily::RelativeHumidity).count();
    let saturation = chart.family(CurveFamily::Saturation).count();
    assert_eq!(rh_family + saturation, 11);

    // Parametric families attempt 6/5/6 curves, possibly fewer
    assert!(chart.family(CurveFamily::Enthalpy).count() <= 6);
    assert!(chart.family(CurveFamily::WetBulb).count() <= 5);
    assert!(chart.family(CurveFamily::Density).count() <= 6);

    // In the 0-50 °C sea-level window every family resolves something
    assert!(chart.family(CurveFamily::Enthalpy).count() >= 1);
    assert!(chart.family(CurveFamily::WetBulb).count() >= 1);
    assert!(chart.family(CurveFamily::Density).count() >= 1);

    assert_eq!(
        chart.title,
        "Psychrometric Chart (Y: Dew Point) at Altitude 0 m"
    );
    assert_eq!(chart.x_label, "Dry Bulb Temperature [°C]");
    assert_eq!(chart.y_label, "Dew Point Temperature [°C]");
}

#[test]
fn test_grid_spans_requested_range() {
    let chart = generate_chart(&ChartConfig::default(), &MagnusModel).unwrap();
    let saturation = chart.family(CurveFamily::Saturation).next().unwrap();

    // 100 points from 0 °C (273.15 K) to 50 °C (323.15 K)
    assert_eq!(saturation.len(), 100);
    assert_relative_eq!(saturation.dry_bulb_c[0], 0.0, epsilon = 1e-9);
    assert_relative_eq!(saturation.dry_bulb_c[99], 50.0, epsilon = 1e-9);
}

#[test]
fn test_all_curves_index_aligned_and_bounded() {
    let chart = generate_chart(&ChartConfig::default(), &MagnusModel).unwrap();
    assert!(!chart.curves.is_empty());
    for curve in &chart.curves {
        assert_eq!(curve.dry_bulb_c.len(), curve.dew_point_c.len());
        assert!(curve.len() <= 100);
        assert!(!curve.is_empty());
    }
}

#[test]
fn test_saturation_present_at_altitude() {
    for altitude_m in [0.0, 1000.0, 3000.0] {
        let config = ChartConfig {
            altitude_m,
            ..ChartConfig::default()
        };
        let chart = generate_chart(&config, &MagnusModel).unwrap();
        let saturation = chart.family(CurveFamily::Saturation).next();
        assert!(
            saturation.is_some_and(|c| !c.is_empty()),
            "no saturation curve at {altitude_m} m"
        );
    }
}

#[test]
fn test_degenerate_range_is_rejected() {
    let config = ChartConfig {
        t_min_c: 25.0,
        t_max_c: 25.0,
        ..ChartConfig::default()
    };
    let err = generate_chart(&config, &MagnusModel).unwrap_err();
    assert!(err.to_string().contains("t_min"));
}

#[test]
fn test_dew_point_never_above_dry_bulb() {
    // Subsaturated air condenses at or below its dry-bulb temperature
    let chart = generate_chart(&ChartConfig::default(), &MagnusModel).unwrap();
    for curve in &chart.curves {
        for (db, dp) in curve.points() {
            assert!(
                dp <= db + 1e-6,
                "'{}' has dew point {dp} above dry bulb {db}",
                curve.label
            );
        }
    }
}

#[test]
fn test_custom_rh_steps() {
    let config = ChartConfig {
        rh_steps: 4,
        ..ChartConfig::default()
    };
    let chart = generate_chart(&config, &MagnusModel).unwrap();
    let rh_labels: Vec<&str> = chart
        .family(CurveFamily::RelativeHumidity)
        .map(|c| c.label.as_str())
        .collect();
    // 4 steps from 10% to 100%: 10, 40, 70, 100
    assert_eq!(rh_labels, ["10% RH", "40% RH", "70% RH", "100% RH"]);
    assert_eq!(chart.family(CurveFamily::Saturation).count(), 1);
}

#[test]
fn test_wet_bulb_points_respect_rh_bounds() {
    // The sweep only accepts wet-bulb/density points with RH in [0, 1];
    // verify through the model that accepted grid points resolve in range
    let model = MagnusModel;
    let pressure = Pascals::new(101325.0);
    let t_wb = Kelvin::new(293.15); // 20 °C wet bulb

    let mut accepted = 0;
    for i in 0..100 {
        let t = Kelvin::new(273.15 + 50.0 * f64::from(i) / 99.0);
        if let Ok(rh) = model.relative_humidity_from_wet_bulb(t, pressure, t_wb) {
            if (0.0..=1.0).contains(&rh) {
                accepted += 1;
                assert!(model.dew_point(t, pressure, rh).is_ok() || rh == 0.0);
            }
        }
    }
    // A 20 °C wet bulb is reachable from part of the 0-50 °C window only
    assert!(accepted > 0 && accepted < 100);
}

#[test]
fn test_altitude_shrinks_density_family() {
    // At 3000 m the 1.2-1.3 kg/m³ lines fall outside the reachable range,
    // so the density family should lose curves relative to sea level
    let sea = generate_chart(&ChartConfig::default(), &MagnusModel).unwrap();
    let high = generate_chart(
        &ChartConfig {
            altitude_m: 3000.0,
            ..ChartConfig::default()
        },
        &MagnusModel,
    )
    .unwrap();
    assert!(
        high.family(CurveFamily::Density).count() <= sea.family(CurveFamily::Density).count()
    );
}

#[test]
fn test_chart_serializes_to_json() {
    let chart = generate_chart(&ChartConfig::default(), &MagnusModel).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    let back: psychro_core::Chart = serde_json::from_str(&json).unwrap();

    // serde_json float parsing can land one ULP off the written value,
    // so coordinates are compared with tolerance rather than bitwise
    assert_eq!(chart.title, back.title);
    assert_eq!(chart.x_label, back.x_label);
    assert_eq!(chart.y_label, back.y_label);
    assert_eq!(chart.curves.len(), back.curves.len());
    for (orig, parsed) in chart.curves.iter().zip(&back.curves) {
        assert_eq!(orig.label, parsed.label);
        assert_eq!(orig.family, parsed.family);
        assert_eq!(orig.len(), parsed.len());
        for ((db_a, dp_a), (db_b, dp_b)) in orig.points().zip(parsed.points()) {
            assert_relative_eq!(db_a, db_b, max_relative = 1e-12);
            assert_relative_eq!(dp_a, dp_b, max_relative = 1e-12);
        }
    }
}
