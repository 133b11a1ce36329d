//! Color themes
//!
//! Four named palettes matching the settings contract; only the theme name
//! is ever persisted, the colors are rebuilt from these tables on load.

use ratatui::style::Color;

/// Selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Blue,
    Dark,
    Light,
    Green,
}

/// Role-based colors a theme provides to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title lines and screen headers
    pub title: Color,
    /// Selected items and the active input
    pub highlight: Color,
    /// Hint counters and emphasized values
    pub accent: Color,
    /// Regular text
    pub text: Color,
    /// Footers and secondary labels
    pub dim: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Blue, Theme::Dark, Theme::Light, Theme::Green]
    }

    /// Stable identifier used in the settings table
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Green => "green",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "blue" => Some(Theme::Blue),
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            "green" => Some(Theme::Green),
            _ => None,
        }
    }

    /// Translation key for the theme's display name
    pub fn name_key(&self) -> &'static str {
        match self {
            Theme::Blue => "blue_theme",
            Theme::Dark => "dark_theme",
            Theme::Light => "light_theme",
            Theme::Green => "green_theme",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Blue => Palette {
                title: Color::Cyan,
                highlight: Color::Yellow,
                accent: Color::LightBlue,
                text: Color::White,
                dim: Color::DarkGray,
            },
            Theme::Dark => Palette {
                title: Color::White,
                highlight: Color::LightYellow,
                accent: Color::Magenta,
                text: Color::Gray,
                dim: Color::DarkGray,
            },
            Theme::Light => Palette {
                title: Color::LightYellow,
                highlight: Color::LightCyan,
                accent: Color::Blue,
                text: Color::White,
                dim: Color::Gray,
            },
            Theme::Green => Palette {
                title: Color::Green,
                highlight: Color::Yellow,
                accent: Color::LightGreen,
                text: Color::White,
                dim: Color::DarkGray,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_key_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_key(theme.key()), Some(*theme));
        }
        assert_eq!(Theme::from_key("plaid"), None);
    }

    #[test]
    fn test_palettes_are_distinct() {
        let palettes: Vec<Palette> = Theme::all().iter().map(|t| t.palette()).collect();
        for (i, a) in palettes.iter().enumerate() {
            for b in &palettes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
