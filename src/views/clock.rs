use iced::widget::{column, container, mouse_area, row, space, stack, text};
use iced::{mouse, Color, Element, Font, Length};

use crate::app::{Host, Message};
use crate::clock::face::ClockFace;
use crate::theme::{self, ClockColors};

impl Host {
    pub(crate) fn view_clock(&self) -> Element<'_, Message> {
        let Some(clock) = &self.clock else {
            return space::Space::new().width(0).height(0).into();
        };
        let face = clock.face();
        let colors = &self.colors;

        let tooltip = tooltip_view(&face, colors);
        let digits = digits_view(&face, colors);

        // Flash overlay sits on top of the face while the pulse is live.
        let body: Element<'_, Message> = if face.pulse {
            stack![
                digits,
                container(space::Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(colors.flash_style()),
            ]
            .into()
        } else {
            digits
        };

        let root = mouse_area(body)
            .on_press(Message::Activate)
            .on_enter(Message::HoverStart)
            .on_exit(Message::HoverEnd)
            .interaction(mouse::Interaction::Pointer);

        // The tooltip slot keeps its height while empty so hovering never
        // moves the face out from under the pointer.
        let slot = container(tooltip)
            .width(Length::Fill)
            .height(Length::Fixed(colors.tooltip_slot))
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Bottom);

        column![slot, root]
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .into()
    }
}

fn digits_view<'a>(face: &ClockFace, colors: &'a ClockColors) -> Element<'a, Message> {
    let fg = theme::to_color(face.color);
    let digit = |s: &str| {
        text(s.to_string())
            .size(colors.digit_size)
            .color(fg)
            .font(Font::MONOSPACE)
    };
    // Hidden colons keep their width so the digits never shift.
    let colon = || {
        text(":")
            .size(colors.digit_size)
            .color(if face.colons_visible { fg } else { Color::TRANSPARENT })
            .font(Font::MONOSPACE)
            .width(colors.colon_width)
    };

    container(row![
        digit(&face.hh),
        colon(),
        digit(&face.mm),
        colon(),
        digit(&face.ss),
    ])
    .padding([12, 24])
    .style(colors.face_style(face.tooltip.is_some()))
    .into()
}

fn tooltip_view<'a>(face: &ClockFace, colors: &'a ClockColors) -> Element<'a, Message> {
    let Some(tip) = &face.tooltip else {
        return space::Space::new().width(0).height(0).into();
    };
    let bubble = container(
        text(tip.text)
            .size(colors.tooltip_text)
            .color(colors.accent)
            .font(Font::MONOSPACE),
    )
    .padding([6, 12])
    .style(colors.tooltip_style());
    let caret = text("\u{25bc}").size(colors.tooltip_text * 0.6).color(colors.accent);

    column![bubble, caret]
        .align_x(iced::alignment::Horizontal::Center)
        .padding(iced::padding::bottom(4))
        .into()
}
