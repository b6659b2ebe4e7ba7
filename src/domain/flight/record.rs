// SPDX-License-Identifier: MPL-2.0
//! The flight record rendered by the status screen.

use super::FlightStatus;

/// Passenger shown on the boarding pass.
///
/// Not part of [`FlightRecord`]: passenger identity is not modelled yet.
pub const PASSENGER_NAME: &str = "Alex Johnson";

/// One half of a journey (departure or arrival).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    /// IATA airport code, e.g. `EDI`.
    pub code: String,
    pub city: String,
    pub airport: String,
    /// Local time, already formatted for display.
    pub time: String,
    /// Local date, already formatted for display.
    pub date: String,
    pub terminal: String,
    pub gate: String,
}

impl Leg {
    fn new(
        code: &str,
        city: &str,
        airport: &str,
        time: &str,
        date: &str,
        terminal: &str,
        gate: &str,
    ) -> Self {
        Self {
            code: code.to_string(),
            city: city.to_string(),
            airport: airport.to_string(),
            time: time.to_string(),
            date: date.to_string(),
            terminal: terminal.to_string(),
            gate: gate.to_string(),
        }
    }
}

/// Immutable description of the single displayed flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    pub flight_number: String,
    pub airline: String,
    pub status: FlightStatus,
    pub departure: Leg,
    pub arrival: Leg,
    /// Flight duration as displayed ("1h 25m"); never derived from the leg times.
    pub duration: String,
    pub seat: String,
    pub cabin_class: String,
    /// Boarding time as displayed.
    pub boarding: String,
    /// Onboard amenities in display order.
    ///
    /// The amenities row always shows the same three indicators, so this list
    /// is carried but not read by the screen.
    pub amenities: Vec<String>,
}

impl FlightRecord {
    /// The compiled-in flight shown by the application.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            flight_number: "SK 1234".to_string(),
            airline: "Skyscanner Airways".to_string(),
            status: FlightStatus::OnTime,
            departure: Leg::new(
                "EDI",
                "Edinburgh",
                "Edinburgh Airport",
                "10:30 AM",
                "Mon, 23 Feb",
                "1",
                "B12",
            ),
            arrival: Leg::new(
                "LHR",
                "London",
                "Heathrow Airport",
                "11:55 AM",
                "Mon, 23 Feb",
                "5",
                "A08",
            ),
            duration: "1h 25m".to_string(),
            seat: "14A".to_string(),
            cabin_class: "Premium Economy".to_string(),
            boarding: "09:45 AM".to_string(),
            amenities: vec![
                "Wifi".to_string(),
                "Coffee".to_string(),
                "Entertainment".to_string(),
            ],
        }
    }
}

impl Default for FlightRecord {
    fn default() -> Self {
        Self::sample()
    }
}
