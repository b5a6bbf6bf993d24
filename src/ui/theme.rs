//! Color palettes for the welcome screen.

use crate::appearance::Appearance;
use ratatui::style::Color;

/// Brand accent, identical in every palette.
pub const ACCENT: Color = Color::Rgb(0xEE, 0x99, 0x72);

const LIGHT_SURFACE: Color = Color::Rgb(0xED, 0xEF, 0xEE);
const DARK_SURFACE: Color = Color::Rgb(0x33, 0x33, 0x33);

/// Resolved colors for one appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Container background.
    pub background: Color,
    /// Title and body text.
    pub text: Color,
    /// Decorative bar.
    pub accent: Color,
}

impl Palette {
    /// Light variant: light surface, dark text.
    pub const LIGHT: Palette = Palette {
        background: LIGHT_SURFACE,
        text: DARK_SURFACE,
        accent: ACCENT,
    };

    /// Dark variant: dark surface, light text.
    pub const DARK: Palette = Palette {
        background: DARK_SURFACE,
        text: LIGHT_SURFACE,
        accent: ACCENT,
    };

    /// Resolve the palette for an appearance.
    ///
    /// An unknown appearance gets the dark palette.
    pub fn resolve(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark | Appearance::Unknown => Self::DARK,
        }
    }

    /// Whether this is the light variant.
    pub fn is_light(&self) -> bool {
        *self == Self::LIGHT
    }

    /// Variant name for the status bar.
    pub fn name(&self) -> &'static str {
        if self.is_light() {
            "light"
        } else {
            "dark"
        }
    }
}

/// Format a color as `#RRGGBB`.
///
/// Only RGB colors have a hex form; others fall back to their debug name.
pub fn hex(color: Color) -> String {
    match color {
        Color::Rgb(r, g, b) => format!("#{:02X}{:02X}{:02X}", r, g, b),
        other => format!("{:?}", other),
    }
}
