// SPDX-License-Identifier: MPL-2.0
//! `flightscry` is a single-screen flight status display built with the Iced
//! GUI framework.
//!
//! It renders one compiled-in flight record as a summary card, journey
//! details, and amenities, and can show a simulated boarding pass on top.
//! Text is localized with Fluent and the theme follows user preference.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
