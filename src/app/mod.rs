// SPDX-License-Identifier: MPL-2.0
//! Application root state and message routing.
//!
//! The `App` struct wires together the flight record, localization, the theme
//! preference, and the flight status screen. Policy decisions (window size,
//! theme precedence) live here so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::domain::flight::FlightRecord;
use crate::domain::ui::BoardingPass;
use crate::i18n::fluent::I18n;
use crate::ui::flight_status;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    record: FlightRecord,
    flight_status: flight_status::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("theme_mode", &self.theme_mode)
            .field("boarding_pass", &self.flight_status.boarding_pass())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 448;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once
    // and later calls fall back to defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            record: FlightRecord::sample(),
            flight_status: flight_status::State::default(),
        }
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(error) = config_warning {
            tracing::warn!(%error, "using default settings");
        }

        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = flags.theme.unwrap_or(config.general.theme_mode);

        tracing::info!(
            locale = %i18n.current_locale(),
            theme = %theme_mode,
            "starting"
        );

        let app = App {
            i18n,
            theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.flight_status.boarding_pass())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FlightStatus(message) => self.flight_status.update(message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            record: &self.record,
            flight_status: &self.flight_status,
        })
    }

    /// Current state of the boarding pass overlay.
    #[must_use]
    pub fn boarding_pass(&self) -> BoardingPass {
        self.flight_status.boarding_pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> Message {
        Message::FlightStatus(flight_status::Message::ViewBoardingPass)
    }

    fn close() -> Message {
        Message::FlightStatus(flight_status::Message::DismissBoardingPass)
    }

    #[test]
    fn app_starts_with_pass_hidden() {
        let app = App::default();
        assert_eq!(app.boarding_pass(), BoardingPass::Hidden);
        assert_eq!(app.record, FlightRecord::sample());
    }

    #[test]
    fn update_toggles_boarding_pass() {
        let mut app = App::default();
        let _ = app.update(open());
        assert_eq!(app.boarding_pass(), BoardingPass::Visible);
        let _ = app.update(open());
        assert_eq!(app.boarding_pass(), BoardingPass::Visible);
        let _ = app.update(close());
        assert_eq!(app.boarding_pass(), BoardingPass::Hidden);
        let _ = app.update(close());
        assert_eq!(app.boarding_pass(), BoardingPass::Hidden);
    }

    #[test]
    fn update_never_changes_the_record() {
        let mut app = App::default();
        let _ = app.update(open());
        let _ = app.update(close());
        assert_eq!(app.record, FlightRecord::sample());
    }

    #[test]
    fn explicit_theme_modes_select_iced_theme() {
        let app = App {
            theme_mode: ThemeMode::Light,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Light);

        let app = App {
            theme_mode: ThemeMode::Dark,
            ..App::default()
        };
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn window_defaults_fit_minimum() {
        assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
        assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
        let settings = window_settings();
        assert_eq!(settings.size.width, 448.0);
    }

    #[test]
    fn view_renders_in_both_states() {
        let mut app = App::default();
        let _ = app.view();
        let _ = app.update(open());
        let _ = app.view();
    }
}
