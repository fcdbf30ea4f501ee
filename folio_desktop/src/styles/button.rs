use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;

/// Primary accent button style with glow on hover.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.9,
                    ..palette.accent
                })),
                shadow: Shadow {
                    color: palette.accent,
                    blur_radius: 10.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(palette.accent_soft)),
                ..base
            },
            button::Status::Disabled => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.5,
                    ..palette.accent
                })),
                text_color: Color {
                    a: 0.7,
                    ..palette.background
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Round icon button for the toolbar toggles.
pub fn icon_button_style(
    palette: PaletteColors,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let border_color = if active { palette.accent } else { palette.border };
        let text_color = if active { palette.accent } else { palette.text };

        let base = button::Style {
            background: Some(Background::Color(Color {
                a: 0.6,
                ..palette.surface_raised
            })),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        };

        match status {
            button::Status::Hovered => button::Style {
                border: Border {
                    color: palette.glow,
                    ..base.border
                },
                shadow: Shadow {
                    color: palette.glow,
                    blur_radius: 8.0,
                    offset: Vector::default(),
                },
                ..base
            },
            _ => base,
        }
    }
}

/// Borderless text button for the navigation links.
pub fn nav_link_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette.accent,
            _ => palette.text,
        };
        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border::default(),
            shadow: Shadow::default(),
            snap: false,
        }
    }
}
