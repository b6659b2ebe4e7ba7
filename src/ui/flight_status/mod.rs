// SPDX-License-Identifier: MPL-2.0
//! Flight status screen.
//!
//! The screen renders one [`FlightRecord`] and owns the only piece of UI
//! state in the application: whether the boarding pass is shown.
//!
//! Rendering happens in two steps. [`FlightScreen::build`] resolves every
//! label and value into plain data, then [`view`] turns that model into
//! widgets. Tests assert on the model; the widget layer is kept thin.

mod model;
mod view;

pub use model::{
    Amenity, AmenityTile, Badge, Fact, FlightScreen, Header, LegCard, LegKind, RouteEnd,
    SectionHeading, SummaryCard,
};
pub use view::view;

use crate::domain::flight::FlightRecord;
use crate::domain::ui::BoardingPass;
use crate::i18n::fluent::I18n;
use iced::Element;

/// Messages emitted by the flight status screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The "View Boarding Pass" button was pressed.
    ViewBoardingPass,
    /// The close control on the pass was pressed, or Escape while shown.
    DismissBoardingPass,
}

/// Screen-local state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    boarding_pass: BoardingPass,
}

impl State {
    #[must_use]
    pub fn boarding_pass(&self) -> BoardingPass {
        self.boarding_pass
    }

    /// Applies a message. Both transitions are idempotent.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::ViewBoardingPass => {
                if !self.boarding_pass.is_visible() {
                    tracing::debug!("boarding pass opened");
                }
                self.boarding_pass.activate();
            }
            Message::DismissBoardingPass => {
                if self.boarding_pass.is_visible() {
                    tracing::debug!("boarding pass closed");
                }
                self.boarding_pass.dismiss();
            }
        }
    }
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a FlightRecord,
    pub state: &'a State,
}

/// Builds the render model and the widget tree in one call.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn render<'a>(ctx: ViewContext<'_>) -> Element<'a, Message> {
    let screen = FlightScreen::build(ctx.record, ctx.state.boarding_pass(), ctx.i18n);
    view(&screen)
}
