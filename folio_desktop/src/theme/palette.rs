use iced::Color;

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Lowercase name, matching the persisted preference value.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_light(self) -> bool {
        self == ThemeMode::Light
    }
}

/// Core color palette for the Folio Violet theme.
///
/// Both modes share the violet accent the particles are tinted with.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_soft: Color,
    pub success: Color,
    pub danger: Color,
    pub glow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    /// Light theme palette
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(250, 249, 255),
            surface: Color::from_rgb8(243, 240, 252),
            surface_raised: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(214, 205, 235),
            text: Color::from_rgb8(28, 22, 46),
            muted: Color::from_rgb8(122, 114, 142),
            accent: Color::from_rgb8(124, 58, 237),
            accent_soft: Color::from_rgb8(167, 123, 246),
            success: Color::from_rgb8(34, 150, 83),
            danger: Color::from_rgb8(214, 69, 69),
            glow: Color::from_rgb8(178, 140, 250),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(12, 10, 18),
            surface: Color::from_rgb8(20, 16, 28),
            surface_raised: Color::from_rgb8(28, 22, 38),
            border: Color::from_rgb8(56, 44, 82),
            text: Color::from_rgb8(240, 236, 252),
            muted: Color::from_rgb8(152, 142, 180),
            accent: Color::from_rgb8(124, 58, 237),
            accent_soft: Color::from_rgb8(146, 94, 240),
            success: Color::from_rgb8(94, 230, 140),
            danger: Color::from_rgb8(255, 106, 106),
            glow: Color::from_rgb8(170, 120, 255),
        }
    }

    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns the palette for a specific theme mode.
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        assert_eq!(ThemeMode::from_name("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name("solarized"), None);
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn test_toggle_is_involutive() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_accent_is_shared_across_modes() {
        let violet = Color::from_rgb8(124, 58, 237);
        assert_eq!(PaletteColors::light().accent, violet);
        assert_eq!(PaletteColors::dark().accent, violet);
    }

    #[test]
    fn test_default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }
}
