// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so it can be tested without
//! a window or a renderer.
//!
//! # Modules
//!
//! - [`flight`]: The displayed flight ([`FlightRecord`](flight::FlightRecord),
//!   [`Leg`](flight::Leg), [`FlightStatus`](flight::FlightStatus))
//! - [`ui`]: UI value objects ([`BoardingPass`](ui::BoardingPass),
//!   [`BarHeight`](ui::BarHeight))

pub mod flight;
pub mod ui;
