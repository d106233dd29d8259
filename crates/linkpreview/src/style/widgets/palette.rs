//! Color palette with light and dark theme support.
//!
//! Border and text tones follow the messenger's bubble colors: the preview
//! body border is a near-neutral gray in light mode and almost black in
//! dark mode.

use iced::Color;

/// Application theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub background: Color,

    // Bubbles
    pub bubble_incoming: Color,
    pub bubble_outgoing: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_red: Color,

    // State colors
    pub hover: Color,
    pub pressed: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,
    pub preview_border: Color,

    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.17, 0.42, 0.93),
            primary_dark: Color::from_rgb(0.11, 0.33, 0.78),

            surface: Color::WHITE,
            background: Color::from_rgb(0.98, 0.985, 0.99),

            bubble_incoming: Color::from_rgb(0.91, 0.91, 0.92),
            bubble_outgoing: Color::from_rgb(0.84, 0.89, 0.99),

            text_primary: Color::from_rgb(0.08, 0.10, 0.14),
            text_secondary: Color::from_rgb(0.42, 0.46, 0.54),
            text_muted: Color::from_rgb(0.60, 0.64, 0.70),
            text_on_primary: Color::WHITE,

            accent_red: Color::from_rgb(0.98, 0.28, 0.35),

            hover: Color::from_rgb(0.95, 0.96, 0.97),
            pressed: Color::from_rgb(0.90, 0.92, 0.95),

            border_subtle: Color::from_rgb(0.92, 0.93, 0.95),
            border_medium: Color::from_rgb(0.86, 0.88, 0.91),
            // #D5D6D6
            preview_border: Color::from_rgb(0.835, 0.839, 0.839),


            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.06),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.30, 0.56, 1.0),
            primary_dark: Color::from_rgb(0.20, 0.45, 0.90),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            bubble_incoming: Color::from_rgb(0.17, 0.18, 0.20),
            bubble_outgoing: Color::from_rgb(0.14, 0.25, 0.48),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::WHITE,

            accent_red: Color::from_rgb(1.0, 0.35, 0.4),

            hover: Color::from_rgb(0.16, 0.17, 0.19),
            pressed: Color::from_rgb(0.20, 0.21, 0.24),

            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),
            // #0F1012
            preview_border: Color::from_rgb(0.059, 0.063, 0.071),


            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Gets the palette for a given theme mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to light mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::light()));

/// Sets the current global palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::light(), |p| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }

    #[test]
    fn set_theme_swaps_current_palette() {
        set_theme(ThemeMode::Dark);
        assert_eq!(current().background, Palette::dark().background);
        set_theme(ThemeMode::Light);
        assert_eq!(current().background, Palette::light().background);
    }
}
