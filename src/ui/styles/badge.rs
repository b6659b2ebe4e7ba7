// SPDX-License-Identifier: MPL-2.0
//! Status badge styles.

use crate::domain::flight::BadgeVariant;
use crate::ui::design_tokens::{palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Background and text colors of a badge variant.
#[must_use]
pub fn colors(variant: BadgeVariant) -> (Color, Color) {
    match variant {
        BadgeVariant::Default => (palette::SLATE_100, palette::SLATE_600),
        BadgeVariant::Success => (palette::EMERALD_100, palette::EMERALD_700),
        BadgeVariant::Warning => (palette::AMBER_100, palette::AMBER_700),
    }
}

/// Pill-shaped badge container.
pub fn pill(variant: BadgeVariant) -> impl Fn(&Theme) -> container::Style {
    let (background, text_color) = colors(variant);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_have_distinct_backgrounds() {
        let default = colors(BadgeVariant::Default).0;
        let success = colors(BadgeVariant::Success).0;
        let warning = colors(BadgeVariant::Warning).0;
        assert_ne!(default, success);
        assert_ne!(success, warning);
        assert_ne!(default, warning);
    }

    #[test]
    fn success_badge_is_green() {
        let (_, text) = colors(BadgeVariant::Success);
        assert!(text.g > text.r && text.g > text.b);
    }
}
