//! Line chart of the projected series
//!
//! Draws the three asset series and the dashed aggregate with `plotters`
//! into an in-memory SVG document.

use crate::allocation::Asset;
use crate::error::ProjectionError;
use crate::format::format_thousands;
use crate::projection::MonthlySeries;
use base64::Engine as _;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontStyle;
use serde::Serialize;

/// Pixels per inch of requested plot height; the chart is 12 inches wide
const PIXELS_PER_INCH: f64 = 100.0;
const CHART_WIDTH: u32 = 1200;
const MIN_CHART_HEIGHT: u32 = 100;

const FONT: &str = "sans-serif";

/// Rendered chart, ready to embed in a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartImage {
    svg: String,
    width: u32,
    height: u32,
}

impl ChartImage {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `data:` URI for an `<img src>` attribute
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.svg.as_bytes());
        format!("data:image/svg+xml;base64,{}", encoded)
    }
}

/// Chart size in pixels for a height given in inches
pub fn chart_size(plot_height: f64) -> (u32, u32) {
    let height = (plot_height * PIXELS_PER_INCH).round().max(MIN_CHART_HEIGHT as f64) as u32;
    (CHART_WIDTH, height)
}

fn asset_color(asset: Asset) -> RGBColor {
    match asset {
        Asset::A => RGBColor(31, 119, 180),
        Asset::B => RGBColor(255, 127, 14),
        Asset::C => RGBColor(44, 160, 44),
    }
}

fn points(values: &[f64]) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ((i + 1) as f64, *v))
}

fn render_error<E: std::fmt::Display>(err: E) -> ProjectionError {
    ProjectionError::Chart(err.to_string())
}

/// Render `series` as an SVG line chart titled with the horizon in years
pub fn render(
    series: &MonthlySeries,
    years: u32,
    plot_height: f64,
) -> Result<ChartImage, ProjectionError> {
    let (width, height) = chart_size(plot_height);
    let mut svg = String::new();

    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let x_max = series.months().max(1) as f64;
        let peak = series.peak_total();
        let y_max = if peak > 0.0 { peak * 1.05 } else { 1.0 };

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("{}-Year Cumulative Asset Growth", years),
                (FONT, 28).into_font().style(FontStyle::Bold),
            )
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(110)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc("Month")
            .y_desc("Cumulative Assets (NTD)")
            .axis_desc_style((FONT, 18))
            .label_style((FONT, 14))
            .y_label_formatter(&|v| format_thousands(*v))
            .x_label_formatter(&|v| format!("{:.0}", v))
            .bold_line_style(BLACK.mix(0.3))
            .light_line_style(BLACK.mix(0.08))
            .draw()
            .map_err(render_error)?;

        for asset in Asset::ALL {
            let color = asset_color(asset);
            chart
                .draw_series(LineSeries::new(points(series.asset(asset)), color.stroke_width(3)))
                .map_err(render_error)?
                .label(asset.label())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                });
        }

        chart
            .draw_series(DashedLineSeries::new(
                points(&series.total),
                10,
                6,
                BLACK.stroke_width(3),
            ))
            .map_err(render_error)?
            .label("Total Assets")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(3)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT, 16))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    Ok(ChartImage { svg, width, height })
}
