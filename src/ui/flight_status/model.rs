// SPDX-License-Identifier: MPL-2.0
//! Render model of the flight status screen.
//!
//! [`FlightScreen::build`] is a pure function of the flight record, the
//! boarding pass cell, and the active locale. Widgets are produced from the
//! model afterwards, so everything the screen shows can be asserted on here.

use crate::domain::flight::{BadgeVariant, FlightRecord, Leg};
use crate::domain::ui::BoardingPass;
use crate::i18n::fluent::I18n;
use crate::ui::boarding_pass::BoardingPassCard;

/// Product mark and title block at the top of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub tagline: String,
    pub info_tooltip: String,
}

/// Status pill shown on the summary card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub variant: BadgeVariant,
}

/// Airport code with its city, one on each side of the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEnd {
    pub code: String,
    pub city: String,
}

/// Caption and value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

/// Dark card summarizing the flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub caption: String,
    pub flight_number: String,
    pub airline: String,
    pub badge: Badge,
    pub origin: RouteEnd,
    pub duration: String,
    pub destination: RouteEnd,
    /// Gate, seat, boarding time; in that order.
    pub facts: [Fact; 3],
}

/// Which half of the journey a detail card describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegKind {
    Departure,
    Arrival,
}

/// Detail card for one leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegCard {
    pub kind: LegKind,
    pub label: String,
    pub airport: String,
    pub time: String,
    pub date: String,
    /// Terminal then gate.
    pub facts: [Fact; 2],
}

/// Amenity indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Wifi,
    Meals,
    Movies,
}

impl Amenity {
    /// Indicators shown on every flight, whatever the record lists.
    pub const FIXED: [Amenity; 3] = [Amenity::Wifi, Amenity::Meals, Amenity::Movies];

    fn i18n_key(self) -> &'static str {
        match self {
            Amenity::Wifi => "amenity-wifi",
            Amenity::Meals => "amenity-meals",
            Amenity::Movies => "amenity-movies",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityTile {
    pub amenity: Amenity,
    pub label: String,
}

/// Section heading with an inline action label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeading {
    pub title: String,
    pub action: String,
}

/// The whole screen, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightScreen {
    pub header: Header,
    pub summary: SummaryCard,
    pub journey: SectionHeading,
    /// Departure then arrival.
    pub legs: [LegCard; 2],
    pub amenities: [AmenityTile; 3],
    pub call_to_action: String,
    pub footer: String,
    /// Present only while the boarding pass cell is `Visible`.
    pub boarding_pass: Option<BoardingPassCard>,
}

impl FlightScreen {
    #[must_use]
    pub fn build(record: &FlightRecord, state: BoardingPass, i18n: &I18n) -> Self {
        Self {
            header: Header {
                title: i18n.tr("app-name"),
                tagline: i18n.tr("app-tagline"),
                info_tooltip: i18n.tr("header-info-tooltip"),
            },
            summary: build_summary(record, i18n),
            journey: SectionHeading {
                title: i18n.tr("journey-title"),
                action: i18n.tr("journey-edit"),
            },
            legs: [
                build_leg(LegKind::Departure, &record.departure, i18n),
                build_leg(LegKind::Arrival, &record.arrival, i18n),
            ],
            amenities: Amenity::FIXED.map(|amenity| AmenityTile {
                amenity,
                label: i18n.tr(amenity.i18n_key()),
            }),
            call_to_action: i18n.tr("cta-view-boarding-pass"),
            footer: i18n.tr("footer-version"),
            boarding_pass: state
                .is_visible()
                .then(|| BoardingPassCard::build(record, i18n)),
        }
    }
}

fn build_summary(record: &FlightRecord, i18n: &I18n) -> SummaryCard {
    SummaryCard {
        caption: i18n.tr("summary-upcoming-flight"),
        flight_number: record.flight_number.clone(),
        airline: record.airline.clone(),
        badge: Badge {
            label: i18n.tr(record.status.i18n_key()),
            variant: record.status.badge_variant(),
        },
        origin: RouteEnd {
            code: record.departure.code.clone(),
            city: record.departure.city.clone(),
        },
        duration: record.duration.clone(),
        destination: RouteEnd {
            code: record.arrival.code.clone(),
            city: record.arrival.city.clone(),
        },
        facts: [
            Fact {
                label: i18n.tr("summary-gate"),
                value: record.departure.gate.clone(),
            },
            Fact {
                label: i18n.tr("summary-seat"),
                value: record.seat.clone(),
            },
            Fact {
                label: i18n.tr("summary-boarding"),
                value: record.boarding.clone(),
            },
        ],
    }
}

fn build_leg(kind: LegKind, leg: &Leg, i18n: &I18n) -> LegCard {
    let label_key = match kind {
        LegKind::Departure => "journey-departure",
        LegKind::Arrival => "journey-arrival",
    };
    LegCard {
        kind,
        label: i18n.tr(label_key),
        airport: leg.airport.clone(),
        time: leg.time.clone(),
        date: leg.date.clone(),
        facts: [
            Fact {
                label: i18n.tr("journey-terminal"),
                value: leg.terminal.clone(),
            },
            Fact {
                label: i18n.tr("journey-gate"),
                value: leg.gate.clone(),
            },
        ],
    }
}
