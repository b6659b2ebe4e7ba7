// SPDX-License-Identifier: MPL-2.0
//! Widget tree of the flight status screen.

use super::model::{
    Amenity, AmenityTile, Fact, FlightScreen, Header, LegCard, LegKind, RouteEnd, SectionHeading,
    SummaryCard,
};
use super::Message;
use crate::ui::boarding_pass;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, scrollable, svg::Svg, tooltip, Column, Container, Row, Space, Stack,
        Text,
    },
    Color, Element, Length,
};

/// Renders the screen, with the boarding pass stacked on top when present.
#[must_use]
pub fn view<'a>(screen: &FlightScreen) -> Element<'a, Message> {
    let content = Column::new()
        .push(build_header(&screen.header))
        .push(build_summary(&screen.summary))
        .push(build_journey(&screen.journey, &screen.legs))
        .push(build_amenities(&screen.amenities))
        .push(build_call_to_action(&screen.call_to_action))
        .push(build_footer(&screen.footer))
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_WIDTH);

    let page = Container::new(scrollable(
        container(content).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let mut stack = Stack::new().push(page);
    if let Some(card) = &screen.boarding_pass {
        stack = stack.push(boarding_pass::view(card, Message::DismissBoardingPass));
    }
    stack.width(Length::Fill).height(Length::Fill).into()
}

fn caption<'a>(label: &str, color: Color) -> Text<'a> {
    Text::new(label.to_uppercase())
        .size(typography::LABEL)
        .font(typography::BOLD)
        .color(color)
}

fn icon_tile<'a>(icon: Svg<'static>, background: Color, size: f32) -> Element<'a, Message> {
    container(icon)
        .center_x(Length::Fixed(size))
        .center_y(Length::Fixed(size))
        .style(styles::container::icon_tile(background, radius::MD))
        .into()
}

fn build_header<'a>(header: &Header) -> Element<'a, Message> {
    let logo = icon_tile(
        icons::tinted(icons::plane(), sizing::ICON_MD, palette::WHITE),
        palette::SKY_600,
        sizing::TILE_MD,
    );

    let title = Column::new()
        .push(
            Text::new(header.title.clone())
                .size(typography::TITLE_LG)
                .font(typography::BOLD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(header.tagline.clone())
                .size(typography::BODY_SM)
                .style(styles::text::secondary),
        );

    // No handler: the control is shown but does nothing.
    let info = button(icons::tinted(
        icons::info(),
        sizing::ICON_MD,
        palette::SLATE_400,
    ))
    .padding(spacing::XS)
    .style(styles::button::header_icon);

    let info = tooltip(
        info,
        container(Text::new(header.info_tooltip.clone()).size(typography::BODY_SM))
            .padding(spacing::XS)
            .style(container::rounded_box),
        tooltip::Position::Bottom,
    );

    Row::new()
        .push(logo)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(info)
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .into()
}

fn build_summary<'a>(summary: &SummaryCard) -> Element<'a, Message> {
    let identity = Column::new()
        .push(caption(&summary.caption, palette::SKY_300))
        .push(
            Text::new(summary.flight_number.clone())
                .size(typography::DISPLAY_LG)
                .font(typography::BOLD),
        )
        .push(
            Text::new(summary.airline.clone())
                .size(typography::BODY)
                .color(palette::SLATE_400),
        )
        .spacing(spacing::XXS);

    let badge = container(
        Text::new(summary.badge.label.clone())
            .size(typography::LABEL)
            .font(typography::BOLD),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::badge::pill(summary.badge.variant));

    let top = Row::new()
        .push(identity)
        .push(Space::new().width(Length::Fill))
        .push(badge)
        .align_y(Vertical::Top);

    let route = Row::new()
        .push(route_end(&summary.origin, Horizontal::Left))
        .push(build_route_line(&summary.duration))
        .push(route_end(&summary.destination, Horizontal::Right))
        .spacing(spacing::MD)
        .align_y(Vertical::Center);

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::rule(Color {
            a: opacity::HAIRLINE,
            ..palette::WHITE
        }));

    let facts = summary.facts.iter().fold(Row::new(), |row, fact| {
        row.push(
            container(fact_column(fact, palette::SLATE_400, None)).width(Length::Fill),
        )
    });

    Container::new(
        Column::new()
            .push(top)
            .push(route)
            .push(divider)
            .push(facts)
            .spacing(spacing::LG),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::primary_card)
    .into()
}

fn route_end<'a>(end: &RouteEnd, align: Horizontal) -> Element<'a, Message> {
    Column::new()
        .push(
            Text::new(end.code.clone())
                .size(typography::DISPLAY_MD)
                .font(typography::BOLD),
        )
        .push(
            Text::new(end.city.clone())
                .size(typography::BODY_SM)
                .color(palette::SLATE_400),
        )
        .align_x(align)
        .into()
}

fn build_route_line<'a>(duration: &str) -> Element<'a, Message> {
    let line = || {
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(1.0))
            .style(styles::container::rule(Color {
                a: opacity::SUBTLE,
                ..palette::WHITE
            }))
    };

    let marker = container(icons::tinted(
        icons::plane_route(),
        sizing::ICON_XS,
        palette::WHITE,
    ))
    .center_x(Length::Fixed(sizing::TILE_SM))
    .center_y(Length::Fixed(sizing::TILE_SM))
    .style(styles::container::route_marker);

    Column::new()
        .push(
            Text::new(duration.to_string())
                .size(typography::BODY_SM)
                .color(palette::SLATE_400),
        )
        .push(
            Row::new()
                .push(line())
                .push(marker)
                .push(line())
                .align_y(Vertical::Center),
        )
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .into()
}

/// Caption over a bold value. `value_style` of `None` inherits the
/// container's text color.
fn fact_column<'a>(
    fact: &Fact,
    label_color: Color,
    value_style: Option<fn(&iced::Theme) -> iced::widget::text::Style>,
) -> Element<'a, Message> {
    let value = Text::new(fact.value.clone())
        .size(typography::BODY)
        .font(typography::BOLD);
    let value = match value_style {
        Some(style) => value.style(style),
        None => value,
    };

    Column::new()
        .push(caption(&fact.label, label_color))
        .push(value)
        .spacing(spacing::XXS)
        .into()
}

fn build_journey<'a>(heading: &SectionHeading, legs: &[LegCard]) -> Element<'a, Message> {
    // No handler: editing the flight is not supported.
    let edit = button(
        Text::new(heading.action.clone())
            .size(typography::BODY)
            .font(typography::BOLD),
    )
    .padding(0)
    .style(styles::button::link);

    let title = Row::new()
        .push(
            Text::new(heading.title.clone())
                .size(typography::TITLE_SM)
                .font(typography::BOLD)
                .style(styles::text::primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(edit)
        .align_y(Vertical::Center);

    legs.iter()
        .fold(Column::new().push(title), |column, leg| {
            column.push(build_leg(leg))
        })
        .spacing(spacing::MD)
        .into()
}

fn build_leg<'a>(leg: &LegCard) -> Element<'a, Message> {
    let (icon, background, color) = match leg.kind {
        LegKind::Departure => (icons::navigation(), palette::SKY_100, palette::SKY_600),
        LegKind::Arrival => (
            icons::navigation_reverse(),
            palette::EMERALD_100,
            palette::EMERALD_600,
        ),
    };
    let tile = icon_tile(
        icons::tinted(icon, sizing::ICON_MD, color),
        background,
        sizing::TILE_LG,
    );

    let schedule = Row::new()
        .push(
            Text::new(leg.time.clone())
                .size(typography::BODY)
                .font(typography::BOLD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(leg.date.clone())
                .size(typography::BODY_SM)
                .style(styles::text::secondary),
        )
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::card_divider);

    let facts = leg.facts.iter().fold(Row::new(), |row, fact| {
        row.push(
            container(fact_column(
                fact,
                palette::SLATE_400,
                Some(styles::text::primary),
            ))
            .width(Length::Fill),
        )
    });

    let details = Column::new()
        .push(caption(&leg.label, palette::SLATE_400))
        .push(
            Text::new(leg.airport.clone())
                .size(typography::TITLE_SM)
                .font(typography::BOLD)
                .style(styles::text::primary),
        )
        .push(schedule)
        .push(divider)
        .push(facts)
        .spacing(spacing::XS)
        .width(Length::Fill);

    Container::new(
        Row::new()
            .push(tile)
            .push(details)
            .spacing(spacing::MD)
            .align_y(Vertical::Top),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::detail_card)
    .into()
}

fn amenity_icon(amenity: Amenity) -> Svg<'static> {
    match amenity {
        Amenity::Wifi => icons::wifi(),
        Amenity::Meals => icons::coffee(),
        Amenity::Movies => icons::monitor(),
    }
}

fn build_amenities<'a>(tiles: &[AmenityTile]) -> Element<'a, Message> {
    tiles
        .iter()
        .fold(Row::new(), |row, tile| {
            let content = Column::new()
                .push(icons::tinted(
                    amenity_icon(tile.amenity),
                    sizing::ICON_MD,
                    palette::SKY_600,
                ))
                .push(
                    Text::new(tile.label.clone())
                        .size(typography::BODY_SM)
                        .font(typography::BOLD)
                        .style(styles::text::secondary),
                )
                .spacing(spacing::XS)
                .align_x(Horizontal::Center);

            row.push(
                container(content)
                    .center_x(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::container::amenity_tile),
            )
        })
        .spacing(spacing::SM)
        .into()
}

fn build_call_to_action<'a>(label: &str) -> Element<'a, Message> {
    let content = Row::new()
        .push(icons::tinted(icons::ticket(), sizing::ICON_MD, palette::WHITE))
        .push(
            Text::new(label.to_string())
                .size(typography::BODY)
                .font(typography::BOLD),
        )
        .push(Space::new().width(Length::Fill))
        .push(icons::tinted(
            icons::chevron_right(),
            sizing::ICON_MD,
            palette::WHITE,
        ))
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    button(content)
        .on_press(Message::ViewBoardingPass)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::button::call_to_action)
        .into()
}

fn build_footer<'a>(footer: &str) -> Element<'a, Message> {
    container(
        Text::new(footer.to_string())
            .size(typography::MICRO)
            .style(styles::text::muted),
    )
    .center_x(Length::Fill)
    .into()
}
