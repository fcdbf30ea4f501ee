use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

use crate::constants::INPUT_BORDER_RADIUS;
use crate::theme::PaletteColors;

/// Contact-form field with an accent border while focused.
pub fn input_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + Clone {
    move |_, status| {
        let is_focused = matches!(
            status,
            text_input::Status::Focused { .. } | text_input::Status::Hovered
        );
        let border_color = if is_focused {
            palette.accent
        } else {
            palette.border
        };
        text_input::Style {
            background: Background::Color(Color {
                a: 0.5,
                ..palette.surface_raised
            }),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: INPUT_BORDER_RADIUS.into(),
            },
            icon: palette.muted,
            placeholder: palette.muted,
            value: palette.text,
            selection: palette.accent,
        }
    }
}
