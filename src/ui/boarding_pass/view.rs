// SPDX-License-Identifier: MPL-2.0
//! Widget tree of the boarding pass overlay.

use super::model::{BoardingPassCard, PassEndpoint};
use crate::domain::ui::BarHeight;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, opaque, Column, Container, Row, Space, Stack, Text},
    Color, Element, Length,
};

/// Icon and text color of the verification row.
const VERIFIED_COLOR: Color = palette::EMERALD_600;

/// Renders the overlay: a dimmed backdrop with the pass centered on it.
///
/// The backdrop swallows pointer events so the page underneath stays inert
/// while the pass is shown. `on_dismiss` is emitted by the close control.
pub fn view<'a, Message: Clone + 'static>(
    card: &BoardingPassCard,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let body = Column::new()
        .push(build_passenger_row(card))
        .push(build_route_row(card))
        .push(build_barcode(&card.bars))
        .push(build_verified(card))
        .spacing(spacing::LG)
        .padding(spacing::LG);

    let sheet = Container::new(
        Column::new()
            .push(build_header(card, on_dismiss))
            .push(body),
    )
    .width(Length::Fixed(sizing::BOARDING_PASS_WIDTH))
    .style(styles::container::boarding_pass_sheet);

    let backdrop = Container::new(sheet)
        .center(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::backdrop);

    opaque(backdrop)
}

fn build_header<'a, Message: Clone + 'static>(
    card: &BoardingPassCard,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let title = Column::new()
        .push(
            Text::new(card.title.to_uppercase())
                .size(typography::LABEL)
                .font(typography::BOLD)
                .color(Color {
                    a: opacity::SOFT,
                    ..palette::SKY_100
                }),
        )
        .push(
            Text::new(card.flight_number.clone())
                .size(typography::TITLE_LG)
                .font(typography::BOLD)
                .color(palette::WHITE),
        )
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center);

    let close = button(icons::tinted(icons::cross(), sizing::ICON_MD, palette::WHITE))
        .on_press(on_dismiss)
        .padding(spacing::XXS)
        .style(styles::button::close);

    let content = Stack::new()
        .push(
            container(title)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(
            container(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        );

    container(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::boarding_pass_header)
        .into()
}

fn build_passenger_row<'a, Message: 'static>(card: &BoardingPassCard) -> Element<'a, Message> {
    Row::new()
        .push(labeled(&card.passenger_label, &card.passenger, Horizontal::Left))
        .push(Space::new().width(Length::Fill))
        .push(labeled(&card.seat_label, &card.seat, Horizontal::Right))
        .align_y(Vertical::Center)
        .into()
}

fn labeled<'a, Message: 'static>(
    label: &str,
    value: &str,
    align: Horizontal,
) -> Element<'a, Message> {
    Column::new()
        .push(
            Text::new(label.to_uppercase())
                .size(typography::LABEL)
                .font(typography::BOLD)
                .color(palette::SLATE_400),
        )
        .push(
            Text::new(value.to_string())
                .size(typography::TITLE_SM)
                .font(typography::BOLD)
                .color(palette::SLATE_900),
        )
        .spacing(spacing::XXS)
        .align_x(align)
        .into()
}

fn build_route_row<'a, Message: 'static>(card: &BoardingPassCard) -> Element<'a, Message> {
    let route = Row::new()
        .push(endpoint(&card.origin, Horizontal::Left))
        .push(Space::new().width(Length::Fill))
        .push(icons::tinted(
            icons::plane_route(),
            sizing::ICON_LG,
            palette::SKY_600,
        ))
        .push(Space::new().width(Length::Fill))
        .push(endpoint(&card.destination, Horizontal::Right))
        .align_y(Vertical::Center);

    Column::new()
        .push(rule_line())
        .push(container(route).padding([spacing::MD, 0.0]))
        .push(rule_line())
        .into()
}

fn endpoint<'a, Message: 'static>(end: &PassEndpoint, align: Horizontal) -> Element<'a, Message> {
    Column::new()
        .push(
            Text::new(end.code.clone())
                .size(typography::TITLE_LG)
                .font(typography::BOLD)
                .color(palette::SLATE_900),
        )
        .push(
            Text::new(end.caption.clone())
                .size(typography::BODY_SM)
                .color(palette::SLATE_500),
        )
        .align_x(align)
        .into()
}

fn rule_line<'a, Message: 'static>() -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::rule(palette::SLATE_200))
        .into()
}

fn build_barcode<'a, Message: 'static>(bars: &[BarHeight]) -> Element<'a, Message> {
    let bars = bars.iter().map(|bar| -> Element<'a, Message> {
        container(Space::new())
            .width(Length::Fixed(sizing::BARCODE_BAR_WIDTH))
            .height(Length::Fixed(bar.pixels()))
            .style(styles::container::barcode_bar)
            .into()
    });

    container(
        Row::with_children(bars)
            .spacing(spacing::XXS)
            .align_y(Vertical::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(sizing::BARCODE_PANEL_HEIGHT))
    .style(styles::container::barcode_panel)
    .into()
}

fn build_verified<'a, Message: 'static>(card: &BoardingPassCard) -> Element<'a, Message> {
    let row = Row::new()
        .push(icons::tinted(
            icons::shield_check(),
            sizing::ICON_SM,
            VERIFIED_COLOR,
        ))
        .push(
            Text::new(card.verified.clone())
                .size(typography::BODY_SM)
                .font(typography::BOLD)
                .color(VERIFIED_COLOR),
        )
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    container(row).center_x(Length::Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::flight::FlightRecord;
    use crate::i18n::fluent::I18n;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Dismiss,
    }

    fn card() -> BoardingPassCard {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        BoardingPassCard::build(&FlightRecord::sample(), &i18n)
    }

    #[test]
    fn overlay_renders() {
        let _element: Element<'_, TestMessage> = view(&card(), TestMessage::Dismiss);
    }

    #[test]
    fn barcode_renders_every_bar() {
        let card = card();
        let _element: Element<'_, TestMessage> = build_barcode(&card.bars);
    }

    #[test]
    fn verified_row_is_emerald() {
        assert_eq!(VERIFIED_COLOR, palette::EMERALD_600);
        let card = card();
        let _element: Element<'_, TestMessage> = build_verified(&card);
    }
}
