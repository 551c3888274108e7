use iced::{Background, Border, Color};

use crate::clock::cycle::{Rgb, NEON_PALETTE};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.0, rgb.1, rgb.2)
}

/// Fixed colors and sizes for the clock surface.
pub struct ClockColors {
    pub background: Color,
    /// Tooltip text and border; always the base palette color.
    pub accent: Color,
    pub flash: Color,
    pub digit_size: f32,
    pub tooltip_text: f32,
    /// Height reserved above the face for the tooltip, shown or not.
    pub tooltip_slot: f32,
    /// Width reserved for each colon so hiding it does not move the digits.
    pub colon_width: f32,
}

impl ClockColors {
    pub fn neon() -> Self {
        Self {
            background: Color::BLACK,
            accent: to_color(NEON_PALETTE[0]),
            flash: Color {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 0.85,
            },
            digit_size: 32.0,
            tooltip_text: 14.0,
            tooltip_slot: 48.0,
            colon_width: 10.0,
        }
    }

    pub fn face_style(&self, glow: bool) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let bg = self.background;
        let accent = self.accent;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 8.0.into(),
                width: if glow { 1.0 } else { 0.0 },
                color: accent,
            },
            ..Default::default()
        }
    }

    pub fn tooltip_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let bg = self.background;
        let accent = self.accent;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(bg)),
            border: Border {
                radius: 6.0.into(),
                width: 1.0,
                color: accent,
            },
            ..Default::default()
        }
    }

    pub fn flash_style(&self) -> impl Fn(&iced::Theme) -> iced::widget::container::Style {
        let color = self.flash;
        move |_theme: &iced::Theme| iced::widget::container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
