// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only native event the application reacts to is Escape, which closes
//! the boarding pass. The listener is installed only while the pass is shown.

use super::Message;
use crate::domain::ui::BoardingPass;
use crate::ui::flight_status;
use iced::keyboard::{self, key};
use iced::{event, Subscription};

/// Creates the keyboard subscription for the current overlay state.
pub fn create_event_subscription(boarding_pass: BoardingPass) -> Subscription<Message> {
    if !boarding_pass.is_visible() {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                dismiss_on_key(&key)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to the message it triggers while the pass is shown.
fn dismiss_on_key(key: &keyboard::Key) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::Escape) => Some(Message::FlightStatus(
            flight_status::Message::DismissBoardingPass,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert_eq!(
            dismiss_on_key(&keyboard::Key::Named(key::Named::Escape)),
            Some(Message::FlightStatus(
                flight_status::Message::DismissBoardingPass
            ))
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(dismiss_on_key(&keyboard::Key::Named(key::Named::Enter)), None);
        assert_eq!(dismiss_on_key(&keyboard::Key::Character("q".into())), None);
    }

    #[test]
    fn subscription_builds_for_both_states() {
        let _hidden = create_event_subscription(BoardingPass::Hidden);
        let _visible = create_event_subscription(BoardingPass::Visible);
    }
}
