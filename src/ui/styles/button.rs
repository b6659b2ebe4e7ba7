// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Full-width brand button opening the boarding pass.
pub fn call_to_action(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::SKY_700,
        button::Status::Pressed => palette::SKY_900,
        _ => palette::SKY_600,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::BRAND,
        ..button::Style::default()
    }
}

/// Round translucent button in the header.
///
/// The button has no action; its disabled look matches the active one.
pub fn header_icon(theme: &Theme, status: button::Status) -> button::Style {
    let scheme = ColorScheme::for_theme(theme);
    let text_color = match status {
        button::Status::Hovered => palette::SKY_600,
        _ => scheme.text_secondary,
    };

    button::Style {
        background: Some(Background::Color(scheme.card_surface)),
        text_color,
        border: Border {
            color: Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::MD,
        ..button::Style::default()
    }
}

/// Text-only brand link ("Edit").
pub fn link(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: palette::SKY_600,
        ..button::Style::default()
    }
}

/// Round close button on the boarding pass header.
pub fn close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.3,
        _ => opacity::SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_to_action_darkens_on_hover() {
        let active = call_to_action(&Theme::Light, button::Status::Active);
        let hovered = call_to_action(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn disabled_header_icon_looks_active() {
        let active = header_icon(&Theme::Light, button::Status::Active);
        let disabled = header_icon(&Theme::Light, button::Status::Disabled);
        assert_eq!(active.background, disabled.background);
        assert_eq!(active.text_color, disabled.text_color);
    }

    #[test]
    fn close_highlights_on_hover() {
        let active = close(&Theme::Light, button::Status::Active);
        let hovered = close(&Theme::Light, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }
}
