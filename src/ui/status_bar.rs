//! Status bar UI component.

use super::Palette;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, palette: &Palette) {
    let paragraph =
        Paragraph::new(status.to_string()).style(Style::default().fg(palette.background).bg(palette.accent));

    f.render_widget(paragraph, area);
}
