//! Welcome view rendering.
//!
//! The view is laid out on a virtual column taller than the screen; each
//! piece is placed at its row and clipped against the scroll window.

use super::Palette;
use crate::screen::{BODY, TITLE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Columns kept free on each side of the body and the accent bar.
const SIDE_PADDING: u16 = 2;
/// Blank rows above the title.
const HEADER_TOP: u16 = 2;
/// Height of the decorative bar.
const BAR_HEIGHT: u16 = 1;

/// Row positions of the view pieces for one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WelcomeLayout {
    pub(super) title: u16,
    pub(super) body: u16,
    pub(super) body_rows: u16,
    pub(super) bar: u16,
    pub(super) height: u16,
}

impl WelcomeLayout {
    pub(super) fn for_width(width: u16) -> Self {
        let body_rows = u16::try_from(body(Style::default()).line_count(inset(width).max(1)))
            .unwrap_or(u16::MAX);

        let title = HEADER_TOP;
        let body = title + 2;
        let bar = body.saturating_add(body_rows).saturating_add(1);
        let height = bar.saturating_add(BAR_HEIGHT).saturating_add(1);

        Self {
            title,
            body,
            body_rows,
            bar,
            height,
        }
    }
}

fn body(style: Style) -> Paragraph<'static> {
    Paragraph::new(BODY)
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn inset(width: u16) -> u16 {
    width.saturating_sub(SIDE_PADDING * 2)
}

/// Visible part of a piece spanning `top..top + height` in content rows.
///
/// Returns the screen rect and how many of the piece's rows are scrolled off.
fn place(area: Rect, scroll: u16, top: u16, height: u16) -> Option<(Rect, u16)> {
    if top.saturating_add(height) <= scroll {
        return None;
    }
    let hidden = scroll.saturating_sub(top);
    let screen_top = top.saturating_sub(scroll);
    if screen_top >= area.height {
        return None;
    }
    let visible = (height - hidden).min(area.height - screen_top);

    Some((
        Rect {
            x: area.x,
            y: area.y + screen_top,
            width: area.width,
            height: visible,
        },
        hidden,
    ))
}

fn padded(rect: Rect) -> Rect {
    Rect {
        x: rect.x + SIDE_PADDING.min(rect.width / 2),
        width: inset(rect.width),
        ..rect
    }
}

/// Draw the scrollable welcome content. Returns the largest useful scroll offset.
pub(super) fn draw_welcome(f: &mut Frame<'_>, area: Rect, scroll: u16, palette: &Palette) -> u16 {
    let layout = WelcomeLayout::for_width(area.width);
    let max_scroll = layout.height.saturating_sub(area.height);
    let scroll = scroll.min(max_scroll);
    let text = Style::default().fg(palette.text);

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    if let Some((rect, _)) = place(area, scroll, layout.title, 1) {
        let title = Paragraph::new(TITLE)
            .style(text.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, rect);
    }

    if let Some((rect, hidden)) = place(area, scroll, layout.body, layout.body_rows) {
        f.render_widget(body(text).scroll((hidden, 0)), padded(rect));
    }

    if let Some((rect, _)) = place(area, scroll, layout.bar, BAR_HEIGHT) {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.accent)),
            padded(rect),
        );
    }

    max_scroll
}
