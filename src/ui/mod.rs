//! User interface rendering.

mod dialog;
mod form;
mod function_list;
mod keymap_bar;
mod status_bar;
mod theme;

use crate::app::App;
use crate::graph;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout: input form, content, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    form::draw_form(f, app, chunks[0], &colors);

    // Content area: function list on the left, graph on the right
    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    function_list::draw_function_list(f, app, content[0], &colors);
    graph::ui::draw_graph(f, &app.scene, content[1], &colors);

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.dialog.is_some(), &colors);

    // Modal dialog renders over everything
    if let Some(ref modal) = app.dialog {
        dialog::draw_dialog(f, modal, &colors);
    }
}
