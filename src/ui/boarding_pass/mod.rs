// SPDX-License-Identifier: MPL-2.0
//! Boarding pass overlay.
//!
//! [`BoardingPassCard`] resolves every string the pass shows from the flight
//! record; [`view`] turns it into widgets stacked above the flight screen.

mod model;
mod view;

pub use model::{BoardingPassCard, PassEndpoint};
pub use view::view;
