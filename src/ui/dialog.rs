//! Modal dialog rendering.

use crate::app::{Dialog, DialogKind};
use crate::ui::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw a modal dialog centered over the UI.
pub(super) fn draw_dialog(f: &mut Frame<'_>, dialog: &Dialog, colors: &ThemeColors) {
    let area = centered_rect(60, 40, f.area());

    // Clear the background
    f.render_widget(Clear, area);

    let accent = match dialog.kind {
        DialogKind::Info => colors.value,
        DialogKind::Error => colors.error,
    };

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(colors.bg));

    let mut lines: Vec<Line<'_>> = dialog
        .message
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to continue",
        Style::default().fg(colors.label),
    )));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
