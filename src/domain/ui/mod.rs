// SPDX-License-Identifier: MPL-2.0
//! UI value objects.
//!
//! - [`BoardingPass`]: visibility of the boarding-pass overlay
//! - [`BarHeight`]: height class of a decorative barcode bar

mod barcode;
mod boarding_pass;

pub use barcode::{barcode, BarHeight, BARCODE_BAR_COUNT};
pub use boarding_pass::BoardingPass;
