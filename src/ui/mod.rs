// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! screens expose a `Message` type and a `view`, the application routes
//! messages back into screen state.
//!
//! # Screens
//!
//! - [`flight_status`] - The flight summary, journey details, and amenities
//! - [`boarding_pass`] - Overlay simulating a boarding pass
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, badges, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod boarding_pass;
pub mod design_tokens;
pub mod flight_status;
pub mod icons;
pub mod styles;
pub mod theming;
