// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use std::fmt;
use std::str::FromStr;

/// Surface and text colors that follow the active theme.
///
/// Brand surfaces (primary card, call to action, boarding pass header) look
/// the same in both modes and are not part of this scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub card_surface: Color,
    pub card_divider: Color,
    pub tile_surface: Color,
    pub tile_border: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::SLATE_50,
            card_surface: Color {
                a: 0.7,
                ..palette::WHITE
            },
            card_divider: Color {
                a: 0.5,
                ..palette::SLATE_200
            },
            tile_surface: palette::WHITE,
            tile_border: palette::SLATE_100,

            text_primary: palette::SLATE_800,
            text_secondary: palette::SLATE_500,
            text_muted: palette::SLATE_400,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::SLATE_950,
            card_surface: Color {
                a: 0.7,
                ..palette::SLATE_800
            },
            card_divider: Color {
                a: 0.5,
                ..palette::SLATE_600
            },
            tile_surface: palette::SLATE_900,
            tile_border: palette::SLATE_800,

            text_primary: palette::SLATE_100,
            text_secondary: palette::SLATE_400,
            text_muted: palette::SLATE_500,
        }
    }

    /// Picks the scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detection errors fall back to dark
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(format!("invalid theme_mode: {}", other)),
        }
    }
}
