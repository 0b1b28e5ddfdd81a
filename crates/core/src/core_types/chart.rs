//! Chart data model
//!
//! A [`Chart`] is a plain value: the full set of iso-line curves plus title
//! and axis labels, with no rendering state attached. The demo binary (or
//! any other frontend) turns it into pixels; the sweep engine only ever
//! appends validated points to [`Curve`]s.

use serde::{Deserialize, Serialize};

/// Which iso-line family a curve belongs to
///
/// Each family carries a fixed line-style convention so every frontend
/// renders the same chart the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveFamily {
    /// Constant relative-humidity iso-lines (10%..90%)
    RelativeHumidity,
    /// The 100% RH saturation boundary, drawn solid and thicker
    Saturation,
    /// Constant specific-enthalpy iso-lines (J/kg)
    Enthalpy,
    /// Constant wet-bulb-temperature iso-lines (°C)
    WetBulb,
    /// Constant moist-air-density iso-lines (kg/m³)
    Density,
}

/// Line style hint for rendering frontends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    /// Thick solid line (saturation boundary)
    SolidThick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Dash-dot line
    DashDot,
}

impl CurveFamily {
    /// Line style convention for this family
    #[must_use]
    pub fn line_style(self) -> LineStyle {
        match self {
            CurveFamily::RelativeHumidity | CurveFamily::Density => LineStyle::Dashed,
            CurveFamily::Saturation => LineStyle::SolidThick,
            CurveFamily::Enthalpy => LineStyle::Dotted,
            CurveFamily::WetBulb => LineStyle::DashDot,
        }
    }
}

/// One plotted iso-line: index-aligned dry-bulb and dew-point sequences
///
/// The two coordinate vectors always have identical length; points are only
/// added through [`Curve::push`], so the invariant cannot be broken by
/// construction. A curve may hold fewer points than the nominal sweep grid
/// because non-physical points are dropped, never interpolated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Legend label, e.g. `"40% RH"` or `"h=60 kJ/kg"`
    pub label: String,
    /// Iso-line family (determines line style)
    pub family: CurveFamily,
    /// Dry-bulb temperatures (°C), X axis
    pub dry_bulb_c: Vec<f64>,
    /// Dew-point temperatures (°C), Y axis
    pub dew_point_c: Vec<f64>,
}

impl Curve {
    /// Create an empty curve for the given family
    #[must_use]
    pub fn new(label: impl Into<String>, family: CurveFamily) -> Self {
        Self {
            label: label.into(),
            family,
            dry_bulb_c: Vec::new(),
            dew_point_c: Vec::new(),
        }
    }

    /// Append one (dry bulb, dew point) pair, keeping the sequences aligned
    pub fn push(&mut self, dry_bulb_c: f64, dew_point_c: f64) {
        self.dry_bulb_c.push(dry_bulb_c);
        self.dew_point_c.push(dew_point_c);
    }

    /// Number of valid points on this curve
    #[must_use]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.dry_bulb_c.len(), self.dew_point_c.len());
        self.dry_bulb_c.len()
    }

    /// Whether the curve has no valid points (such curves are omitted)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dry_bulb_c.is_empty()
    }

    /// Iterate over (dry bulb, dew point) pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.dry_bulb_c
            .iter()
            .copied()
            .zip(self.dew_point_c.iter().copied())
    }
}

/// The complete chart artifact handed to a rendering frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Chart title (embeds the altitude)
    pub title: String,
    /// X axis label
    pub x_label: String,
    /// Y axis label
    pub y_label: String,
    /// All non-empty curves, in drawing order
    pub curves: Vec<Curve>,
}

impl Chart {
    /// Curves belonging to one family
    pub fn family(&self, family: CurveFamily) -> impl Iterator<Item = &Curve> {
        self.curves.iter().filter(move |c| c.family == family)
    }

    /// Overall (min, max) dew point across all curves, if any point exists
    ///
    /// Frontends use this to size the Y axis; the X axis is the sweep range.
    #[must_use]
    pub fn dew_point_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for curve in &self.curves {
            for &dp in &curve.dew_point_c {
                bounds = Some(match bounds {
                    Some((lo, hi)) => (lo.min(dp), hi.max(dp)),
                    None => (dp, dp),
                });
            }
        }
        bounds
    }
}
