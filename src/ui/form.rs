//! Input form UI component.

use crate::app::{App, Focus};
use crate::input::InputField;
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the function and x-range entry fields.
pub(super) fn draw_form(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    // The cursor hides while a dialog is waiting for dismissal.
    let show_cursor = app.dialog.is_none();

    draw_field(
        f,
        &app.expression_input,
        chunks[0],
        " Function (e.g., y = 2*x + 3, y = sin(x), y = exp(x)) ",
        app.focus == Focus::Expression,
        show_cursor,
        colors,
    );
    draw_field(
        f,
        &app.range_input,
        chunks[1],
        " X Range (e.g., -10, 10) ",
        app.focus == Focus::Range,
        show_cursor,
        colors,
    );
}

fn draw_field(
    f: &mut Frame<'_>,
    field: &InputField,
    area: Rect,
    title: &str,
    focused: bool,
    show_cursor: bool,
    colors: &ThemeColors,
) {
    let border_style = if focused {
        Style::default().fg(colors.heading)
    } else {
        Style::default().fg(colors.border)
    };

    let inner_width = area.width.saturating_sub(2);
    let scroll = field.scroll_offset(inner_width);

    let paragraph = Paragraph::new(field.value())
        .style(Style::default().fg(colors.text))
        .scroll((0, scroll))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(colors.bg)),
        );

    f.render_widget(paragraph, area);

    if focused && show_cursor && inner_width > 0 {
        let column = (field.cursor_column() - scroll).min(inner_width - 1);
        f.set_cursor_position((area.x + 1 + column, area.y + 1));
    }
}
