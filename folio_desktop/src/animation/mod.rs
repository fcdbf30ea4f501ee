mod spring;
mod states;

pub use spring::Spring;
pub use states::{
    LoadingPhase, LoadingState, MenuState, ParticleLayerState, ScrollTracker, SectionReveal,
    TiltCardState, TypewriterState,
};
