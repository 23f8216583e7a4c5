//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, dialog_open: bool, colors: &ThemeColors) {
    let keymap_text = if dialog_open {
        "Enter/Esc:dismiss"
    } else {
        "Enter:submit | Tab:switch field | ^P:plot | ^X:clear | ^T:theme | ^Y:copy list | ^E:copy data | Esc/^Q:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.status_fg).bg(colors.bg));

    f.render_widget(paragraph, area);
}
