// SPDX-License-Identifier: MPL-2.0
//! Flight domain types.
//!
//! A [`FlightRecord`] is literal display data: every field is a pre-formatted
//! string and nothing is parsed, computed, or validated.

mod record;
mod status;

pub use record::{FlightRecord, Leg, PASSENGER_NAME};
pub use status::{BadgeVariant, FlightStatus};
