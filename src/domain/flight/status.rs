// SPDX-License-Identifier: MPL-2.0
//! Flight status and its badge presentation.

/// Operational status of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightStatus {
    #[default]
    OnTime,
    Boarding,
    Delayed,
    Departed,
    Landed,
    Cancelled,
}

/// Visual variant of the status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Warning,
}

impl FlightStatus {
    /// All statuses, in declaration order.
    pub const ALL: [FlightStatus; 6] = [
        FlightStatus::OnTime,
        FlightStatus::Boarding,
        FlightStatus::Delayed,
        FlightStatus::Departed,
        FlightStatus::Landed,
        FlightStatus::Cancelled,
    ];

    /// Returns the i18n key of the status label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            FlightStatus::OnTime => "status-on-time",
            FlightStatus::Boarding => "status-boarding",
            FlightStatus::Delayed => "status-delayed",
            FlightStatus::Departed => "status-departed",
            FlightStatus::Landed => "status-landed",
            FlightStatus::Cancelled => "status-cancelled",
        }
    }

    /// Badge variant used when the status is displayed.
    #[must_use]
    pub fn badge_variant(self) -> BadgeVariant {
        match self {
            FlightStatus::OnTime | FlightStatus::Boarding => BadgeVariant::Success,
            FlightStatus::Delayed | FlightStatus::Cancelled => BadgeVariant::Warning,
            FlightStatus::Departed | FlightStatus::Landed => BadgeVariant::Default,
        }
    }
}
