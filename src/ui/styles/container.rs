// SPDX-License-Identifier: MPL-2.0
//! Container styles.
//!
//! Page and detail surfaces derive their colors from the active `Theme` via
//! [`ColorScheme`]; brand surfaces use fixed palette colors.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            ColorScheme::for_theme(theme).page_background,
        )),
        ..Default::default()
    }
}

/// Dark brand card holding the flight summary.
pub fn primary_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Translucent card for the departure and arrival details.
pub fn detail_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.card_surface)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Small outlined tile in the amenities row.
pub fn amenity_tile(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.tile_surface)),
        border: Border {
            color: scheme.tile_border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Rounded square behind an icon.
pub fn icon_tile(background: Color, rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: rad.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Circular plane marker sitting on the route line.
pub fn route_marker(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SKY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette::SKY_400
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// One-pixel line drawn as a filled container.
pub fn rule(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Divider on theme-following cards.
pub fn card_divider(theme: &Theme) -> container::Style {
    rule(ColorScheme::for_theme(theme).card_divider)(theme)
}

/// Dimmed layer behind the boarding pass.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::SLATE_900
        })),
        ..Default::default()
    }
}

/// White boarding pass sheet.
pub fn boarding_pass_sheet(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::SLATE_800),
        border: Border {
            radius: radius::XXL.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Brand band at the top of the boarding pass.
pub fn boarding_pass_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SKY_600)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: iced::border::Radius {
                top_left: radius::XXL,
                top_right: radius::XXL,
                bottom_right: radius::NONE,
                bottom_left: radius::NONE,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined panel framing the barcode.
pub fn barcode_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_100)),
        border: Border {
            color: palette::SLATE_200,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// A single barcode bar.
pub fn barcode_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SLATE_800)),
        ..Default::default()
    }
}
