//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Card states
    pub enabled_on: Color,
    pub enabled_off: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled_on: Color::Green,
            enabled_off: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            border: Color::Rgb {
                r: 100,
                g: 100,
                b: 100,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Color for the on/off glyph in the enabled column
    pub fn enabled_color(&self, enabled: bool) -> Color {
        if enabled {
            self.enabled_on
        } else {
            self.enabled_off
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get the current theme
pub fn theme() -> &'static Theme {
    &THEME
}
