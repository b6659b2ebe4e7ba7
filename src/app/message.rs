// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::flight_status;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. Screen messages are
/// forwarded so there is a single update entrypoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FlightStatus(flight_status::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional theme override; takes precedence over `settings.toml`.
    pub theme: Option<ThemeMode>,
}
