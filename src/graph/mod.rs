//! Graph feature: the retained plot scene and its chart rendering.
//!
//! [`GraphScene`] is the [`PlotSurface`] the application draws onto; the
//! `ui` submodule turns the accumulated scene into a ratatui chart.

pub mod ui;

use crate::plot::{Curve, PlotDecorations, PlotSurface, GRAPH_TITLE};
use crate::range::XRange;

/// Retained plot state between render passes.
#[derive(Debug, Clone)]
pub struct GraphScene {
    /// Drawn curves in plot order.
    pub curves: Vec<Curve>,
    /// Current titles, labels, bounds, and flags.
    pub decorations: PlotDecorations,
    /// Whether a render pass has completed since the last clear.
    pub visible: bool,
}

impl GraphScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            curves: Vec::new(),
            decorations: default_decorations(),
            visible: false,
        }
    }
}

impl Default for GraphScene {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotSurface for GraphScene {
    fn clear(&mut self) {
        self.curves.clear();
        self.decorations = default_decorations();
        self.visible = false;
    }

    fn draw_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    fn set_decorations(&mut self, decorations: PlotDecorations) {
        self.decorations = decorations;
    }

    fn redraw(&mut self) {
        self.visible = true;
    }
}

fn default_decorations() -> PlotDecorations {
    PlotDecorations {
        title: GRAPH_TITLE.to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
        x_bounds: XRange::default().bounds(),
        y_bounds: [-1.0, 1.0],
        show_grid: true,
        show_legend: true,
    }
}
