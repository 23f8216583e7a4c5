//! Chart rendering for the graph scene.

use super::GraphScene;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the graph area: a welcome screen before the first plot, the chart
/// afterwards.
pub fn draw_graph(f: &mut Frame<'_>, scene: &GraphScene, area: Rect, colors: &ThemeColors) {
    if !scene.visible {
        draw_welcome(f, area, colors);
        return;
    }

    let [x_min, x_max] = scene.decorations.x_bounds;
    let [y_min, y_max] = scene.decorations.y_bounds;

    // Origin axis lines, drawn first so curves render over them.
    let mut horizontal_axis: Option<Vec<(f64, f64)>> = None;
    if y_min <= 0.0 && y_max >= 0.0 {
        horizontal_axis = Some(vec![(x_min, 0.0), (x_max, 0.0)]);
    }
    let mut vertical_axis: Option<Vec<(f64, f64)>> = None;
    if x_min <= 0.0 && x_max >= 0.0 {
        vertical_axis = Some(vec![(0.0, y_min), (0.0, y_max)]);
    }

    let mut datasets: Vec<Dataset<'_>> = Vec::new();
    if let Some(ref line) = horizontal_axis {
        datasets.push(
            Dataset::default()
                .marker(ratatui::symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.axis))
                .data(line),
        );
    }
    if let Some(ref line) = vertical_axis {
        datasets.push(
            Dataset::default()
                .marker(ratatui::symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.axis))
                .data(line),
        );
    }

    for curve in &scene.curves {
        let color = colors.series_color(curve.index);
        // Only the first segment carries the label so each curve gets a
        // single legend entry.
        for (segment_index, segment) in curve.segments().into_iter().enumerate() {
            let mut dataset = Dataset::default()
                .marker(ratatui::symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(segment);
            if segment_index == 0 && scene.decorations.show_legend {
                dataset = dataset.name(curve.label.as_str());
            }
            datasets.push(dataset);
        }
    }

    let x_labels = vec![
        format_axis_label(x_min),
        format_axis_label((x_min + x_max) / 2.0),
        format_axis_label(x_max),
    ];
    let x_axis = Axis::default()
        .title(scene.decorations.x_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds([x_min, x_max])
        .labels(x_labels);

    let y_labels = vec![
        format_axis_label(y_min),
        format_axis_label((y_min + y_max) / 2.0),
        format_axis_label(y_max),
    ];
    let y_axis = Axis::default()
        .title(scene.decorations.y_label.as_str())
        .style(Style::default().fg(colors.text))
        .bounds([y_min, y_max])
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", scene.decorations.title))
                .title_style(Style::default().fg(colors.heading))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_welcome(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome to Descartes!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Add a function, then plot to get started"),
        Line::from(""),
        Line::from("Examples:"),
        Line::from("  y = 2*x + 3"),
        Line::from("  y = sin(x)"),
        Line::from("  y = exp(x)"),
        Line::from(""),
        Line::from("Keyboard shortcuts:"),
        Line::from("  Tab or ↓/↑  - Switch input field"),
        Line::from("  Enter       - Add function / plot"),
        Line::from("  Ctrl+P      - Plot graphs"),
        Line::from("  Ctrl+X      - Clear functions"),
        Line::from("  Ctrl+T      - Cycle theme"),
        Line::from("  Esc         - Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Graph ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}
