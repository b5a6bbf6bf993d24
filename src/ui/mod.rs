//! User interface rendering.

mod keymap_bar;
mod status_bar;
mod theme;
mod welcome;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::{hex, Palette, ACCENT};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let palette = app.palette();

    // Content, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    app.max_scroll = welcome::draw_welcome(f, chunks[0], app.scroll, &palette);
    app.scroll = app.scroll.min(app.max_scroll);

    status_bar::draw_status(f, chunks[1], &app.status, &palette);
    keymap_bar::draw_keymap(f, chunks[2], &palette);
}
