//! Bistro - a terminal welcome screen that follows the system appearance.
//!
//! The host reports a light, dark or unknown appearance. Bistro resolves it
//! to a [`Palette`] and re-renders the welcome view whenever the resolved
//! palette changes.
//!
//! # Example
//!
//! ```
//! use bistro::appearance::{Appearance, AppearanceSignal};
//! use bistro::screen::WelcomeScreen;
//! use bistro::Palette;
//!
//! let signal = AppearanceSignal::new(Appearance::Light);
//! let screen = WelcomeScreen::mount(&signal);
//! assert_eq!(screen.palette(), Palette::LIGHT);
//!
//! signal.set(Appearance::Unknown);
//! assert_eq!(screen.palette(), Palette::DARK);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod appearance;
pub mod error;
pub mod screen;
pub mod ui;

pub use error::{BistroError, Result};
pub use ui::Palette;
