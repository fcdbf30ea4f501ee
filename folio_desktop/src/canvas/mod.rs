mod loading_spinner;
mod menu_overlay;
mod particle_layer;
mod tilt_card;

pub use loading_spinner::LoadingSpinner;
pub use menu_overlay::MenuOverlay;
pub use particle_layer::ParticleLayer;
pub use tilt_card::TiltCard;
