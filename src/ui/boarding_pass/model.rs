// SPDX-License-Identifier: MPL-2.0
//! Render model of the boarding pass overlay.

use crate::domain::flight::{FlightRecord, PASSENGER_NAME};
use crate::domain::ui::{barcode, BarHeight, BARCODE_BAR_COUNT};
use crate::i18n::fluent::I18n;

/// One end of the route as printed on the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassEndpoint {
    pub code: String,
    /// Caption under the code; repeats the airport code.
    pub caption: String,
}

/// Everything the boarding pass displays, with text already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardingPassCard {
    pub title: String,
    pub flight_number: String,
    pub passenger_label: String,
    pub passenger: String,
    pub seat_label: String,
    pub seat: String,
    pub origin: PassEndpoint,
    pub destination: PassEndpoint,
    pub bars: [BarHeight; BARCODE_BAR_COUNT],
    pub verified: String,
}

impl BoardingPassCard {
    #[must_use]
    pub fn build(record: &FlightRecord, i18n: &I18n) -> Self {
        Self {
            title: i18n.tr("boarding-pass-title"),
            flight_number: record.flight_number.clone(),
            passenger_label: i18n.tr("boarding-pass-passenger"),
            passenger: PASSENGER_NAME.to_string(),
            seat_label: i18n.tr("boarding-pass-seat"),
            seat: record.seat.clone(),
            origin: PassEndpoint {
                code: record.departure.code.clone(),
                caption: record.departure.code.clone(),
            },
            destination: PassEndpoint {
                code: record.arrival.code.clone(),
                caption: record.arrival.code.clone(),
            },
            bars: barcode(),
            verified: i18n.tr("boarding-pass-verified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn pass_uses_hardcoded_passenger() {
        let mut record = FlightRecord::sample();
        record.airline = "Another Airline".to_string();
        let card = BoardingPassCard::build(&record, &english());
        assert_eq!(card.passenger, "Alex Johnson");
    }

    #[test]
    fn pass_shows_seat_and_route() {
        let card = BoardingPassCard::build(&FlightRecord::sample(), &english());
        assert_eq!(card.flight_number, "SK 1234");
        assert_eq!(card.seat, "14A");
        assert_eq!(card.origin.code, "EDI");
        assert_eq!(card.destination.code, "LHR");
        assert_eq!(card.title, "Boarding Pass");
        assert_eq!(card.verified, "Verified by Flightscry");
    }

    #[test]
    fn pass_carries_forty_bars() {
        let card = BoardingPassCard::build(&FlightRecord::sample(), &english());
        assert_eq!(card.bars.len(), 40);
        assert_eq!(card.bars[0], BarHeight::Tall);
        assert_eq!(card.bars[5], BarHeight::Medium);
        assert_eq!(card.bars[7], BarHeight::Short);
    }
}
