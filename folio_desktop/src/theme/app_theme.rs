use iced::{theme, Theme};

use super::palette::{palette_from_mode, ThemeMode};

/// Creates the custom Folio theme for the given mode.
pub fn app_theme_with_mode(mode: ThemeMode) -> Theme {
    let p = palette_from_mode(mode);
    Theme::custom(
        format!("Folio {}", mode.name()),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            warning: p.danger,
            danger: p.danger,
        },
    )
}
