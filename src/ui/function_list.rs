//! Stored function list UI component.

use crate::app::App;
use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the stored function list, one entry per function in series color.
pub(super) fn draw_function_list(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" Functions ({}) ", app.functions.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    if app.functions.is_empty() {
        let hint = Paragraph::new("Type a function and press Enter")
            .style(Style::default().fg(colors.label))
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem<'_>> = app
        .functions
        .iter()
        .enumerate()
        .map(|(idx, function)| {
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", idx + 1), Style::default().fg(colors.label)),
                Span::styled(
                    function.label().to_string(),
                    Style::default().fg(colors.series_color(idx)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);

    f.render_widget(list, area);
}
