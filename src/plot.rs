//! Sampling and rendering of stored functions onto a plot surface.

use ndarray::Array1;

use crate::error::{DescartesError, Result};
use crate::range::XRange;
use crate::store::FunctionList;

/// Number of sample points per curve.
pub const SAMPLE_POINTS: usize = 400;

/// Title shown above the plot.
pub const GRAPH_TITLE: &str = "Function Graphs with 4 Quadrants";

/// Fractional y-axis headroom added beyond the sampled extent.
const Y_PADDING: f64 = 0.15;

/// A sampled curve ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Legend label.
    pub label: String,
    /// Position in the stored function list; keys the series color.
    pub index: usize,
    /// Samples in x order; y is non-finite where the function is undefined.
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    /// Split into runs of finite points.
    ///
    /// Non-finite samples separate the runs, so the drawn polyline shows a
    /// gap instead of a segment through undefined territory.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.points
            .split(|&(_, y)| !y.is_finite())
            .filter(|run| !run.is_empty())
            .collect()
    }

    /// Extent of the finite y samples, if any.
    pub fn finite_y_extent(&self) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for &(_, y) in &self.points {
            if y.is_finite() {
                extent = Some(match extent {
                    None => (y, y),
                    Some((min, max)) => (min.min(y), max.max(y)),
                });
            }
        }
        extent
    }
}

/// Titles, labels, bounds, and flags applied to the plot after drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDecorations {
    /// Plot title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Horizontal axis bounds.
    pub x_bounds: [f64; 2],
    /// Vertical axis bounds.
    pub y_bounds: [f64; 2],
    /// Whether to draw a grid.
    pub show_grid: bool,
    /// Whether to draw the legend.
    pub show_legend: bool,
}

/// Rendering capability the plot pipeline draws onto.
pub trait PlotSurface {
    /// Drop all drawn curves and decorations.
    fn clear(&mut self);
    /// Add one labeled curve.
    fn draw_curve(&mut self, curve: Curve);
    /// Apply title, axis labels, bounds, grid, and legend settings.
    fn set_decorations(&mut self, decorations: PlotDecorations);
    /// Present the accumulated scene.
    fn redraw(&mut self);
}

/// Outcome of one render pass.
#[derive(Debug, Default)]
pub struct PlotReport {
    /// Curves drawn onto the surface.
    pub drawn: usize,
    /// Per-function evaluation failures; rendering continued past each.
    pub errors: Vec<DescartesError>,
}

/// Build the sample grid spanning the range, endpoints included.
pub fn sample_grid(range: XRange) -> Array1<f64> {
    Array1::linspace(range.min as f64, range.max as f64, SAMPLE_POINTS)
}

/// Render every stored function onto the surface.
///
/// The surface is cleared first; curves land in list order. A function that
/// cannot be evaluated is reported in the returned [`PlotReport`] and does
/// not stop the rest from plotting. Fails only when the list is empty.
pub fn render_graphs(
    functions: &FunctionList,
    range: XRange,
    surface: &mut dyn PlotSurface,
) -> Result<PlotReport> {
    if functions.is_empty() {
        return Err(DescartesError::EmptyInput);
    }

    let grid = sample_grid(range);
    surface.clear();

    let mut report = PlotReport::default();
    let mut y_extent: Option<(f64, f64)> = None;

    for (index, function) in functions.iter().enumerate() {
        let samples = match function.expr().sample(&grid) {
            Ok(samples) => samples,
            Err(DescartesError::Evaluation { message, .. }) => {
                tracing::error!("Could not plot {}: {}", function.label(), message);
                report
                    .errors
                    .push(DescartesError::evaluation(function.label(), message));
                continue;
            },
            Err(other) => {
                tracing::error!("Could not plot {}: {}", function.label(), other);
                report.errors.push(other);
                continue;
            },
        };

        let curve = Curve {
            label: function.label().to_string(),
            index,
            points: grid.iter().copied().zip(samples).collect(),
        };

        if let Some((curve_min, curve_max)) = curve.finite_y_extent() {
            y_extent = Some(match y_extent {
                None => (curve_min, curve_max),
                Some((min, max)) => (min.min(curve_min), max.max(curve_max)),
            });
        }

        surface.draw_curve(curve);
        report.drawn += 1;
    }

    surface.set_decorations(PlotDecorations {
        title: GRAPH_TITLE.to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
        x_bounds: range.bounds(),
        y_bounds: padded_y_bounds(y_extent),
        show_grid: true,
        show_legend: true,
    });
    surface.redraw();

    tracing::info!(
        "Rendered {} of {} functions over [{}, {}]",
        report.drawn,
        functions.len(),
        range.min,
        range.max
    );
    Ok(report)
}

/// Y bounds padded beyond the sampled extent to avoid edge clipping.
/// Degenerate extents widen to a unit band so the axis never collapses.
fn padded_y_bounds(extent: Option<(f64, f64)>) -> [f64; 2] {
    let Some((min, max)) = extent else {
        return [-1.0, 1.0];
    };

    let padding = (max - min).abs() * Y_PADDING;
    if padding == 0.0 {
        return [min - 1.0, max + 1.0];
    }
    [min - padding, max + padding]
}
