// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use flightscry::domain::flight::BadgeVariant;
    use flightscry::ui::design_tokens::{opacity, palette, sizing, spacing};
    use flightscry::ui::styles::{badge, button, container, text};
    use flightscry::ui::theming::{ColorScheme, ThemeMode};
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    const THEMES: [Theme; 2] = [Theme::Light, Theme::Dark];

    #[test]
    fn all_button_styles_compile() {
        for theme in &THEMES {
            for status in [
                Status::Active,
                Status::Hovered,
                Status::Pressed,
                Status::Disabled,
            ] {
                let _ = button::call_to_action(theme, status);
                let _ = button::header_icon(theme, status);
                let _ = button::link(theme, status);
                let _ = button::close(theme, status);
            }
        }
    }

    #[test]
    fn all_container_styles_compile() {
        for theme in &THEMES {
            let _ = container::page(theme);
            let _ = container::primary_card(theme);
            let _ = container::detail_card(theme);
            let _ = container::amenity_tile(theme);
            let _ = container::icon_tile(palette::SKY_100, 12.0)(theme);
            let _ = container::route_marker(theme);
            let _ = container::rule(palette::SLATE_200)(theme);
            let _ = container::card_divider(theme);
            let _ = container::backdrop(theme);
            let _ = container::boarding_pass_sheet(theme);
            let _ = container::boarding_pass_header(theme);
            let _ = container::barcode_panel(theme);
            let _ = container::barcode_bar(theme);
            let _ = text::primary(theme);
            let _ = text::secondary(theme);
            let _ = text::muted(theme);
        }
    }

    #[test]
    fn badge_pill_uses_variant_colors() {
        for variant in [
            BadgeVariant::Default,
            BadgeVariant::Success,
            BadgeVariant::Warning,
        ] {
            let (background, text_color) = badge::colors(variant);
            let style = badge::pill(variant)(&Theme::Light);
            assert_eq!(style.background, Some(Background::Color(background)));
            assert_eq!(style.text_color, Some(text_color));
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::SKY_600;
        let _ = palette::WHITE;
        let _ = spacing::MD;
        let _ = opacity::BACKDROP;
        let _ = sizing::ICON_LG;
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_theme(&ThemeMode::Light.theme());
        let dark = ColorScheme::for_theme(&ThemeMode::Dark.theme());

        // Page colors should be visually opposite between light and dark
        assert!(light.page_background.r > dark.page_background.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }
}
