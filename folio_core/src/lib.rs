//! Folio Core - headless state behind the desktop portfolio page.
//!
//! Everything in this crate is timer-free and draw-free: each recurring
//! behavior (particle drift, typewriter cycle, toast lifecycle) exposes an
//! explicit transition function that the desktop shell schedules. Tests
//! drive the transitions directly, no clock required.

pub mod notification;
pub mod particles;
pub mod typewriter;
pub mod utils;
pub mod validation;

pub use notification::{Notification, NotificationKind, Toast, ToastPhase};
pub use particles::{Particle, ParticleField, DEFAULT_PARTICLE_COUNT};
pub use typewriter::{Typewriter, TypewriterPhase};
pub use utils::config::Preferences;
pub use utils::error::{FolioError, FolioResult};
pub use validation::{is_valid_email, ContactSubmission, ValidationError};
