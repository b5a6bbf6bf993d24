//! Welcome screen state.
//!
//! The screen keeps the latest appearance in local state, fed by a
//! subscription that lives exactly as long as the screen.

use std::cell::Cell;
use std::rc::Rc;

use crate::appearance::{Appearance, AppearanceSignal, Subscription};
use crate::ui::{hex, Palette, ACCENT};

/// Title shown in the header.
pub const TITLE: &str = "My Bistro";

/// Descriptive body paragraph.
pub const BODY: &str = "My Bistro is a demo application for exploring automatic \
light/dark theme adaptation. The colors on this screen follow your system \
appearance and update as soon as it changes.";

/// Accessibility label of the decorative bar.
pub const ACCENT_LABEL: &str = "Accent bar";

#[derive(Debug)]
struct LocalState {
    appearance: Cell<Appearance>,
    palette_changed: Cell<bool>,
}

/// Mounted welcome screen.
#[derive(Debug)]
pub struct WelcomeScreen {
    state: Rc<LocalState>,
    _subscription: Subscription,
}

impl WelcomeScreen {
    /// Mount the screen and start following the signal.
    pub fn mount(signal: &AppearanceSignal) -> Self {
        let state = Rc::new(LocalState {
            appearance: Cell::new(signal.get()),
            palette_changed: Cell::new(false),
        });

        let listener_state = Rc::clone(&state);
        let subscription = signal.subscribe(move |appearance| {
            let before = Palette::resolve(listener_state.appearance.get());
            listener_state.appearance.set(appearance);
            if Palette::resolve(appearance) != before {
                listener_state.palette_changed.set(true);
            }
        });

        tracing::debug!(
            "Welcome screen mounted ({}), {} in {}",
            signal.get(),
            ACCENT_LABEL,
            hex(ACCENT)
        );

        Self {
            state,
            _subscription: subscription,
        }
    }

    /// Tear the screen down, releasing its subscription.
    pub fn unmount(self) {
        tracing::debug!("Welcome screen unmounted");
    }

    /// Latest appearance seen by the screen.
    pub fn appearance(&self) -> Appearance {
        self.state.appearance.get()
    }

    /// Palette for the latest appearance.
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.appearance())
    }

    /// Returns true once after the resolved palette changed.
    pub fn take_changed(&self) -> bool {
        self.state.palette_changed.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_seeds_from_signal() {
        let signal = AppearanceSignal::new(Appearance::Light);
        let screen = WelcomeScreen::mount(&signal);
        assert_eq!(screen.appearance(), Appearance::Light);
        assert_eq!(screen.palette(), Palette::LIGHT);
        assert!(!screen.take_changed());
    }

    #[test]
    fn test_follows_signal() {
        let signal = AppearanceSignal::new(Appearance::Light);
        let screen = WelcomeScreen::mount(&signal);

        signal.set(Appearance::Dark);
        assert_eq!(screen.palette(), Palette::DARK);
        assert!(screen.take_changed());
        assert!(!screen.take_changed());
    }

    #[test]
    fn test_dark_to_unknown_keeps_palette() {
        let signal = AppearanceSignal::new(Appearance::Dark);
        let screen = WelcomeScreen::mount(&signal);

        signal.set(Appearance::Unknown);
        assert_eq!(screen.appearance(), Appearance::Unknown);
        assert!(!screen.take_changed());
    }

    #[test]
    fn test_unmount_from_appearance_listener() {
        use std::cell::RefCell;

        let signal = AppearanceSignal::new(Appearance::Light);
        let slot = Rc::new(RefCell::new(Some(WelcomeScreen::mount(&signal))));

        let _teardown = {
            let slot = Rc::clone(&slot);
            signal.subscribe(move |appearance| {
                if appearance == Appearance::Dark {
                    if let Some(screen) = slot.borrow_mut().take() {
                        screen.unmount();
                    }
                }
            })
        };

        assert!(signal.set(Appearance::Dark));
        assert!(slot.borrow().is_none());
        assert_eq!(signal.subscriber_count(), 1);

        assert!(signal.set(Appearance::Light));
        assert_eq!(signal.subscriber_count(), 1);
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let signal = AppearanceSignal::new(Appearance::Dark);
        let screen = WelcomeScreen::mount(&signal);
        assert_eq!(signal.subscriber_count(), 1);

        screen.unmount();
        assert_eq!(signal.subscriber_count(), 0);
    }
}
