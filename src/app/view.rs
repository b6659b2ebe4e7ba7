// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::flight::FlightRecord;
use crate::i18n::fluent::I18n;
use crate::ui::flight_status::{self, ViewContext as FlightStatusViewContext};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a FlightRecord,
    pub flight_status: &'a flight_status::State,
}

/// Renders the flight status screen filling the window.
pub fn view<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let screen = flight_status::render(FlightStatusViewContext {
        i18n: ctx.i18n,
        record: ctx.record,
        state: ctx.flight_status,
    })
    .map(Message::FlightStatus);

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
