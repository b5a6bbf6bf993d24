//! Keymap help bar UI component.

use super::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, palette: &Palette) {
    let keymap_text = "q:quit | jk/↑↓:scroll | T:cycle system appearance";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(palette.text).bg(palette.background));

    f.render_widget(paragraph, area);
}
