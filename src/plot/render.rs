use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;

// ---------------------------------------------------------------------------
// Shared chart rendering
// ---------------------------------------------------------------------------

/// One dot series. An empty label keeps the series out of the legend.
pub struct Series<'a> {
    pub label: &'a str,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

impl<'a> Series<'a> {
    pub fn new(label: &'a str, color: RGBColor, points: Vec<(f64, f64)>) -> Self {
        Self { label, color, points }
    }
}

/// Axis configuration for one figure.
pub struct Axes<'a> {
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

/// Render dot series into a PNG at the given path. Points outside the axis
/// ranges are clipped, not an error.
pub fn scatter_chart(path: &Path, axes: &Axes, series: &[Series]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(55)
        .build_cartesian_2d(axes.x_range.clone(), axes.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(axes.x_desc)
        .y_desc(axes.y_desc)
        .draw()?;

    let mut labeled = false;
    for s in series {
        let color = s.color;
        let drawn = chart.draw_series(
            s.points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 2, color.filled())),
        )?;
        if !s.label.is_empty() {
            labeled = true;
            drawn
                .label(s.label)
                .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
        }
    }

    if labeled {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperMiddle)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
