//! Folio Desktop - a personal portfolio page rendered as an Iced application.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod content;
pub mod form;
pub mod styles;
pub mod theme;

pub use animation::{
    LoadingPhase, LoadingState, MenuState, ParticleLayerState, ScrollTracker, SectionReveal,
    Spring, TiltCardState, TypewriterState,
};
pub use canvas::{LoadingSpinner, MenuOverlay, ParticleLayer, TiltCard};
pub use constants::*;
pub use content::{EducationItem, Project, Section, EDUCATION, PROJECTS};
pub use form::ContactFormState;
pub use styles::*;
pub use theme::{app_theme_with_mode, palette_from_mode, PaletteColors, ThemeMode};
