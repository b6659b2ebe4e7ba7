// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized design tokens for the flight status screen.

## Organization

- **Palette**: Base colors (slate neutrals, sky brand, emerald/amber accents)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use flightscry::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::SLATE_900
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Neutrals (slate scale)
    pub const SLATE_50: Color = Color::from_rgb(0.973, 0.980, 0.988);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const SLATE_300: Color = Color::from_rgb(0.796, 0.835, 0.882);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_600: Color = Color::from_rgb(0.278, 0.333, 0.412);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_800: Color = Color::from_rgb(0.118, 0.161, 0.231);
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_950: Color = Color::from_rgb(0.008, 0.024, 0.090);

    // Brand colors (sky scale)
    pub const SKY_100: Color = Color::from_rgb(0.878, 0.949, 0.996);
    pub const SKY_200: Color = Color::from_rgb(0.729, 0.902, 0.992);
    pub const SKY_300: Color = Color::from_rgb(0.490, 0.827, 0.988);
    pub const SKY_400: Color = Color::from_rgb(0.220, 0.741, 0.973);
    pub const SKY_600: Color = Color::from_rgb(0.008, 0.518, 0.780);
    pub const SKY_700: Color = Color::from_rgb(0.012, 0.412, 0.631);
    pub const SKY_900: Color = Color::from_rgb(0.047, 0.290, 0.431);

    // Accents
    pub const EMERALD_100: Color = Color::from_rgb(0.820, 0.980, 0.898);
    pub const EMERALD_600: Color = Color::from_rgb(0.020, 0.588, 0.412);
    pub const EMERALD_700: Color = Color::from_rgb(0.016, 0.471, 0.341);
    pub const AMBER_100: Color = Color::from_rgb(0.996, 0.953, 0.780);
    pub const AMBER_700: Color = Color::from_rgb(0.706, 0.325, 0.035);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HAIRLINE: f32 = 0.1;
    pub const SUBTLE: f32 = 0.2;
    pub const MUTED: f32 = 0.6;
    pub const SOFT: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed page behind the boarding pass.
    pub const BACKDROP: f32 = 0.6;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 1 unit
    pub const XS: f32 = 8.0; // 2 units
    pub const SM: f32 = 12.0; // 3 units
    pub const MD: f32 = 16.0; // 4 units
    pub const LG: f32 = 24.0; // 6 units
    pub const XL: f32 = 32.0; // 8 units
    pub const XXL: f32 = 40.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_XS: f32 = 12.0;
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const ICON_LG: f32 = 24.0;

    /// Square tiles holding an icon (logo, leg icon, info button).
    pub const TILE_SM: f32 = 32.0;
    pub const TILE_MD: f32 = 40.0;
    pub const TILE_LG: f32 = 48.0;

    /// Width of the content column.
    pub const CONTENT_WIDTH: f32 = 448.0;
    /// Width of the boarding pass sheet.
    pub const BOARDING_PASS_WIDTH: f32 = 384.0;

    // Barcode
    pub const BARCODE_BAR_WIDTH: f32 = 2.0;
    pub const BARCODE_PANEL_HEIGHT: f32 = 104.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: airport codes and the flight number
    //! - Title/Body: names, times, values
    //! - Label/Micro: uppercase captions above values

    /// Flight number on the primary card.
    pub const DISPLAY_LG: f32 = 36.0;

    /// Airport codes on the primary card.
    pub const DISPLAY_MD: f32 = 30.0;

    /// Page title, boarding pass codes.
    pub const TITLE_LG: f32 = 24.0;

    /// Detail card values.
    pub const TITLE_SM: f32 = 18.0;

    /// Call to action and section headings.
    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 12.0;

    /// Uppercase captions.
    pub const LABEL: f32 = 10.0;

    pub const MICRO: f32 = 9.0;

    /// Bold weight used for values, codes, and captions.
    pub const BOLD: iced::Font = iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    };
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, tiles
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Barcode panel outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
    pub const XL: f32 = 24.0;
    pub const XXL: f32 = 40.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.12,
            ..palette::SLATE_400
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const XL: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::SLATE_400
        },
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };

    /// Glow under brand-colored elements.
    pub const BRAND: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::SKY_400
        },
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::TILE_LG > sizing::TILE_MD);
    assert!(sizing::TILE_MD > sizing::TILE_SM);
    assert!(sizing::BOARDING_PASS_WIDTH < sizing::CONTENT_WIDTH);

    // Typography validation
    assert!(typography::DISPLAY_LG > typography::DISPLAY_MD);
    assert!(typography::DISPLAY_MD > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::LABEL > typography::MICRO);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
