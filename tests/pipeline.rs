//! End-to-end pipeline tests: statements in, sampled curves on a surface out.

use descartes::error::DescartesError;
use descartes::expr::parse_statement;
use descartes::plot::{render_graphs, Curve, PlotDecorations, PlotSurface, SAMPLE_POINTS};
use descartes::range::XRange;
use descartes::store::FunctionList;

/// Records every surface call for inspection.
#[derive(Debug, Default)]
struct RecordingSurface {
    cleared: usize,
    curves: Vec<Curve>,
    decorations: Option<PlotDecorations>,
    redrawn: usize,
}

impl PlotSurface for RecordingSurface {
    fn clear(&mut self) {
        self.cleared += 1;
        self.curves.clear();
        self.decorations = None;
    }

    fn draw_curve(&mut self, curve: Curve) {
        self.curves.push(curve);
    }

    fn set_decorations(&mut self, decorations: PlotDecorations) {
        self.decorations = Some(decorations);
    }

    fn redraw(&mut self) {
        self.redrawn += 1;
    }
}

fn function_list(statements: &[&str]) -> FunctionList {
    let mut functions = FunctionList::new();
    for statement in statements {
        functions.add(parse_statement(statement).expect("statement should parse"));
    }
    functions
}

#[test]
fn plots_every_stored_function_in_order() {
    let functions = function_list(&["y = x^2", "y = sin(x)"]);
    let mut surface = RecordingSurface::default();

    let report = render_graphs(&functions, XRange { min: -5, max: 5 }, &mut surface)
        .expect("render should succeed");

    assert_eq!(report.drawn, 2);
    assert!(report.errors.is_empty());
    assert_eq!(surface.cleared, 1);
    assert_eq!(surface.redrawn, 1);

    let labels: Vec<&str> = surface.curves.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["y = x**2", "y = sin(x)"]);
    let indices: Vec<usize> = surface.curves.iter().map(|c| c.index).collect();
    assert_eq!(indices, [0, 1]);
    for curve in &surface.curves {
        assert_eq!(curve.points.len(), SAMPLE_POINTS);
    }

    let parabola = &surface.curves[0];
    assert_eq!(parabola.points[0], (-5.0, 25.0));
    assert_eq!(parabola.points[SAMPLE_POINTS - 1], (5.0, 25.0));
}

#[test]
fn decorations_cover_the_sampled_extent() {
    let functions = function_list(&["y = x^2", "y = sin(x)"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange { min: -5, max: 5 }, &mut surface)
        .expect("render should succeed");

    let decorations = surface.decorations.expect("decorations should be set");
    assert_eq!(decorations.title, "Function Graphs with 4 Quadrants");
    assert_eq!(decorations.x_label, "x");
    assert_eq!(decorations.y_label, "y");
    assert_eq!(decorations.x_bounds, [-5.0, 5.0]);
    assert!(decorations.show_grid);
    assert!(decorations.show_legend);

    // Extent is roughly [-1, 25] plus 15% headroom on both sides.
    assert!((decorations.y_bounds[0] + 4.9).abs() < 0.1);
    assert!((decorations.y_bounds[1] - 28.9).abs() < 0.1);
}

#[test]
fn straight_line_bounds_get_exact_headroom() {
    let functions = function_list(&["y = x"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange { min: -10, max: 10 }, &mut surface)
        .expect("render should succeed");

    let decorations = surface.decorations.expect("decorations should be set");
    assert_eq!(decorations.y_bounds, [-13.0, 13.0]);
}

#[test]
fn empty_list_is_an_error_and_surface_is_untouched() {
    let functions = FunctionList::new();
    let mut surface = RecordingSurface::default();

    let err = render_graphs(&functions, XRange::default(), &mut surface)
        .expect_err("empty list should not render");

    assert!(matches!(err, DescartesError::EmptyInput));
    assert_eq!(surface.cleared, 0);
    assert_eq!(surface.redrawn, 0);
    assert!(surface.curves.is_empty());
    assert!(surface.decorations.is_none());
}

#[test]
fn one_bad_function_does_not_block_the_rest() {
    let functions = function_list(&["y = q + 1", "y = x"]);
    let mut surface = RecordingSurface::default();

    let report = render_graphs(&functions, XRange::default(), &mut surface)
        .expect("render should succeed");

    assert_eq!(report.drawn, 1);
    assert_eq!(report.errors.len(), 1);
    let message = report.errors[0].to_string();
    assert!(message.contains("Could not plot function 'y = q + 1'"));
    assert!(message.contains("variable 'q' is not defined"));

    let labels: Vec<&str> = surface.curves.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["y = x"]);
    assert_eq!(surface.redrawn, 1);
}

#[test]
fn curves_keep_their_list_position_past_a_skipped_function() {
    let functions = function_list(&["y = q + 1", "y = x"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange::default(), &mut surface)
        .expect("render should succeed");

    // The surviving curve stays keyed to slot 1, matching its list entry.
    assert_eq!(surface.curves.len(), 1);
    assert_eq!(surface.curves[0].index, 1);
    assert_eq!(surface.curves[0].label, "y = x");
}

#[test]
fn log_outside_its_domain_becomes_a_gap() {
    let functions = function_list(&["y = log(x)"]);
    let mut surface = RecordingSurface::default();

    let report = render_graphs(&functions, XRange { min: -5, max: 5 }, &mut surface)
        .expect("render should succeed");

    assert_eq!(report.drawn, 1);
    assert!(report.errors.is_empty());

    let curve = &surface.curves[0];
    assert_eq!(curve.points.len(), SAMPLE_POINTS);
    let finite = curve.points.iter().filter(|(_, y)| y.is_finite()).count();
    assert_eq!(finite, 200);
    assert_eq!(curve.segments().len(), 1);
}

#[test]
fn square_root_gap_splits_the_curve() {
    let functions = function_list(&["y = sqrt(x^2 - 1)"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange { min: -5, max: 5 }, &mut surface)
        .expect("render should succeed");

    let segments = surface.curves[0].segments();
    assert_eq!(segments.len(), 2);
    for segment in &segments {
        assert!(!segment.is_empty());
        assert!(segment.iter().all(|(_, y)| y.is_finite()));
    }
}

#[test]
fn pole_at_a_grid_point_is_dropped_from_segments() {
    let functions = function_list(&["y = 1/x"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange { min: 0, max: 10 }, &mut surface)
        .expect("render should succeed");

    let curve = &surface.curves[0];
    assert_eq!(curve.points[0].0, 0.0);
    assert!(!curve.points[0].1.is_finite());

    let segments = curve.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].len(), SAMPLE_POINTS - 1);
}

#[test]
fn replot_replaces_previous_curves() {
    let functions = function_list(&["y = x"]);
    let mut surface = RecordingSurface::default();

    render_graphs(&functions, XRange { min: -10, max: 10 }, &mut surface)
        .expect("first render should succeed");
    render_graphs(&functions, XRange { min: -2, max: 2 }, &mut surface)
        .expect("second render should succeed");

    assert_eq!(surface.cleared, 2);
    assert_eq!(surface.curves.len(), 1);
    let decorations = surface.decorations.expect("decorations should be set");
    assert_eq!(decorations.x_bounds, [-2.0, 2.0]);
}
