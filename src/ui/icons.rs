// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are stroke-only SVGs embedded at compile time via `include_bytes!`.
//! Handles are cached in a `OnceLock` so each file is parsed once. Every icon
//! is drawn in a single color chosen at the call site with [`tinted`].
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let plane = icons::tinted(icons::plane(), sizing::ICON_LG, palette::WHITE);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_boarding_pass`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a fresh widget over a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Brand and Route Icons
// =============================================================================

define_icon!(plane, "plane.svg", "Plane icon: airliner pointing up-right.");
define_icon!(
    plane_route,
    "plane_route.svg",
    "Plane icon turned a quarter clockwise, used on route lines."
);
define_icon!(
    navigation,
    "navigation.svg",
    "Navigation icon: arrowhead pointing up-right."
);
define_icon!(
    navigation_reverse,
    "navigation_reverse.svg",
    "Navigation icon turned half a turn: arrowhead pointing down-left."
);

// =============================================================================
// Amenity Icons
// =============================================================================

define_icon!(wifi, "wifi.svg", "Wifi icon: signal arcs.");
define_icon!(coffee, "coffee.svg", "Coffee icon: steaming cup.");
define_icon!(monitor, "monitor.svg", "Monitor icon: screen on a stand.");

// =============================================================================
// Action and Status Icons
// =============================================================================

define_icon!(info, "info.svg", "Info icon: letter i in a circle.");
define_icon!(ticket, "ticket.svg", "Ticket icon: stub with perforation.");
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Chevron icon pointing right."
);
define_icon!(
    shield_check,
    "shield_check.svg",
    "Shield icon with a checkmark."
);
define_icon!(cross, "cross.svg", "Cross icon: two diagonal strokes.");

// =============================================================================
// Helpers
// =============================================================================

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes an icon and draws it in `color`.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}
