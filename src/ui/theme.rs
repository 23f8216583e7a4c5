//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Emphasized origin axis color.
    pub axis: Color,
    /// Curve colors, cycled in plot order.
    pub series: [Color; 6],
    /// Warning color (reserved for future use).
    #[allow(dead_code)]
    pub warning: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                axis: Color::Rgb(168, 153, 132),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(254, 128, 25),
                    Color::Rgb(142, 192, 124),
                ],
                warning: Color::Rgb(250, 189, 47),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                axis: Color::Rgb(60, 56, 54),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(175, 58, 3),
                    Color::Rgb(66, 123, 88),
                ],
                warning: Color::Rgb(181, 118, 20),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Color for the curve at the given plot position; cycles past the
    /// palette length.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}
