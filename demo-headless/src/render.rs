//! Plotters frontend for the chart value
//!
//! Turns a [`Chart`] into a PNG or SVG image. All layout decisions live
//! here; the core library never touches a drawing backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use psychro_core::{Chart, CurveFamily, LineStyle};
use std::error::Error;
use std::path::Path;

/// Default canvas size in pixels
const CANVAS_SIZE: (u32, u32) = (1200, 800);

/// Render a chart to disk, choosing the backend from the file extension
///
/// `.svg` produces vector output; anything else goes through the bitmap
/// backend (PNG and friends).
///
/// # Errors
/// Propagates backend drawing failures (unwritable path, font issues).
pub fn render_to_file(chart: &Chart, path: &Path) -> Result<(), Box<dyn Error>> {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw(&root, chart)?;
    } else {
        let root = BitMapBackend::new(path, CANVAS_SIZE).into_drawing_area();
        draw(&root, chart)?;
    }
    Ok(())
}

/// Line color: blue for the saturation boundary, palette otherwise
fn curve_color(family: CurveFamily, idx: usize) -> RGBAColor {
    match family {
        CurveFamily::Saturation => BLUE.to_rgba(),
        _ => Palette99::pick(idx).to_rgba(),
    }
}

fn draw<DB>(root: &DrawingArea<DB, Shift>, data: &Chart) -> Result<(), Box<dyn Error>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    for curve in &data.curves {
        for &db in &curve.dry_bulb_c {
            x_min = x_min.min(db);
            x_max = x_max.max(db);
        }
    }
    if !x_min.is_finite() || !x_max.is_finite() {
        // Nothing to draw; leave an empty white canvas
        root.present()?;
        return Ok(());
    }
    let (y_min, y_max) = data.dew_point_bounds().unwrap_or((0.0, 1.0));
    let y_pad = (y_max - y_min).max(1.0) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(
            &data.title,
            FontDesc::new(FontFamily::SansSerif, 24.0, FontStyle::Normal),
        )
        .margin(25)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 45)
        .build_cartesian_2d(x_min..x_max, (y_min - y_pad)..(y_max + y_pad))?;

    chart
        .configure_mesh()
        .x_desc(&data.x_label)
        .y_desc(&data.y_label)
        .x_label_formatter(&|v| format!("{v:.0}"))
        .y_label_formatter(&|v| format!("{v:.0}"))
        .label_style(FontDesc::new(
            FontFamily::SansSerif,
            16.0,
            FontStyle::Normal,
        ))
        .draw()?;

    for (idx, curve) in data.curves.iter().enumerate() {
        let width = if curve.family.line_style() == LineStyle::SolidThick {
            3
        } else {
            1
        };
        let style = curve_color(curve.family, idx).stroke_width(width);

        let anno = match curve.family.line_style() {
            LineStyle::SolidThick => {
                chart.draw_series(LineSeries::new(curve.points(), style))?
            }
            LineStyle::Dashed => {
                chart.draw_series(DashedLineSeries::new(curve.points(), 8, 4, style))?
            }
            LineStyle::Dotted => {
                chart.draw_series(DashedLineSeries::new(curve.points(), 2, 5, style))?
            }
            LineStyle::DashDot => {
                chart.draw_series(DashedLineSeries::new(curve.points(), 12, 6, style))?
            }
        };
        anno.label(&curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.7))
        .border_style(&BLACK.mix(0.3))
        .label_font(FontDesc::new(
            FontFamily::SansSerif,
            14.0,
            FontStyle::Normal,
        ))
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}
