use iced::widget::container;
use iced::{Background, Border, Color, Theme};

use folio_core::notification::NotificationKind;

use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;

/// Rounded pill behind the toolbar buttons.
pub fn toolbar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.75,
            ..palette.surface_raised
        })),
        border: Border {
            color: Color {
                a: 0.6,
                ..palette.border
            },
            width: 1.0,
            radius: 24.0.into(),
        },
        ..Default::default()
    }
}

/// Subtle raised panel behind each page section.
pub fn section_shell_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.35,
            ..palette.surface
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette.border
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Floating decorative chip in the hero, shifted by the parallax.
pub fn hero_chip_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.25,
            ..palette.accent_soft
        })),
        text_color: Some(palette.text),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette.accent
            },
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

/// Toast body; the fade progress scales every alpha so the whole toast
/// dissolves together.
pub fn toast_style(
    palette: PaletteColors,
    kind: NotificationKind,
    progress: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| {
        let tint = match kind {
            NotificationKind::Success => palette.success,
            NotificationKind::Error => palette.danger,
        };
        container::Style {
            background: Some(Background::Color(Color {
                a: 0.92 * progress,
                ..palette.surface_raised
            })),
            text_color: Some(Color {
                a: progress,
                ..palette.text
            }),
            border: Border {
                color: Color {
                    a: 0.8 * progress,
                    ..tint
                },
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        }
    }
}
