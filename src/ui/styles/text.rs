// SPDX-License-Identifier: MPL-2.0
//! Theme-aware text styles for content on theme-following surfaces.

use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Headline values (airport names, times).
pub fn primary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

/// Supporting values (terminal and gate numbers, amenity names).
pub fn secondary(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

/// Uppercase captions.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_muted),
    }
}
