//! Application state and logic.

use crate::appearance::{Appearance, AppearanceSignal};
use crate::screen::WelcomeScreen;
use crate::ui::Palette;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Host appearance signal.
    pub signal: AppearanceSignal,
    /// Mounted welcome screen.
    pub screen: WelcomeScreen,
    /// Vertical scroll offset of the content, in rows.
    pub scroll: u16,
    /// Largest useful scroll offset, updated on every draw.
    pub max_scroll: u16,
    /// Status message.
    pub status: String,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(initial: Appearance) -> Self {
        let signal = AppearanceSignal::new(initial);
        let screen = WelcomeScreen::mount(&signal);

        Self {
            signal,
            screen,
            scroll: 0,
            max_scroll: 0,
            status: format!("Appearance: {}", initial),
            should_quit: false,
        }
    }

    /// Palette the screen currently renders with.
    pub fn palette(&self) -> Palette {
        self.screen.palette()
    }

    /// Deliver a host appearance notification.
    pub fn notify_appearance(&mut self, appearance: Appearance) {
        if !self.signal.set(appearance) {
            return;
        }

        self.status = format!(
            "Appearance: {} ({} palette)",
            appearance,
            self.palette().name()
        );

        if self.screen.take_changed() {
            tracing::debug!("Palette switched to {}", self.palette().name());
        }
    }

    /// Cycle the host appearance light -> dark -> unknown.
    pub fn cycle_appearance(&mut self) {
        let next = self.signal.get().next();
        self.notify_appearance(next);
    }

    /// Scroll content down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1).min(self.max_scroll);
    }

    /// Scroll content up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Request exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
