//! Background particle field.
//!
//! A fixed-size set of slowly drifting points with a gentle opacity
//! flicker, wrapped toroidally at the viewport edges. The field mutates
//! in-memory floats only; drawing is the caller's concern.

use fastrand::Rng;

/// Number of particles the desktop shell spawns.
pub const DEFAULT_PARTICLE_COUNT: usize = 100;

/// Lower bound of the flicker band.
pub const OPACITY_MIN: f32 = 0.4;
/// Upper bound of the flicker band.
pub const OPACITY_MAX: f32 = 0.8;

// Per-frame opacity perturbation is uniform in +/- FLICKER_STEP / 2.
const FLICKER_STEP: f32 = 0.01;

const SIZE_BASE: f32 = 1.0;
const SIZE_SPREAD: f32 = 2.0;
const SPEED_SPREAD: f32 = 0.5;
const SPAWN_OPACITY_BASE: f32 = 0.5;
const SPAWN_OPACITY_SPREAD: f32 = 0.5;

/// A single animated point drawn each frame.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub opacity: f32,
}

/// Fixed-count collection of particles plus the viewport they wrap in.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: Rng,
}

impl ParticleField {
    /// Populates `count` particles uniformly across the viewport.
    pub fn new(count: usize, width: f32, height: f32) -> Self {
        Self::with_rng(count, width, height, Rng::new())
    }

    /// Seeded constructor for reproducible test runs.
    pub fn with_rng(count: usize, width: f32, height: f32, mut rng: Rng) -> Self {
        let particles = (0..count).map(|_| spawn(&mut rng, width, height)).collect();
        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    /// Mirrors the window's drawable area into the wraparound bounds.
    ///
    /// Particles stranded beyond a shrunken edge are not repositioned;
    /// they wrap the next time they cross an edge.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// One frame step: Euler position integration with a unit timestep,
    /// opacity flicker clamped to the [`OPACITY_MIN`, `OPACITY_MAX`] band,
    /// toroidal wrap to the opposite edge on exit.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.speed_x;
            particle.y += particle.speed_y;

            let delta = (self.rng.f32() - 0.5) * FLICKER_STEP;
            particle.opacity = (particle.opacity + delta).clamp(OPACITY_MIN, OPACITY_MAX);

            if particle.x < 0.0 {
                particle.x = self.width;
            } else if particle.x > self.width {
                particle.x = 0.0;
            }
            if particle.y < 0.0 {
                particle.y = self.height;
            } else if particle.y > self.height {
                particle.y = 0.0;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

fn spawn(rng: &mut Rng, width: f32, height: f32) -> Particle {
    Particle {
        x: rng.f32() * width,
        y: rng.f32() * height,
        size: rng.f32() * SIZE_SPREAD + SIZE_BASE,
        speed_x: rng.f32() * SPEED_SPREAD - SPEED_SPREAD / 2.0,
        speed_y: rng.f32() * SPEED_SPREAD - SPEED_SPREAD / 2.0,
        opacity: rng.f32() * SPAWN_OPACITY_SPREAD + SPAWN_OPACITY_BASE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_field(count: usize, width: f32, height: f32) -> ParticleField {
        ParticleField::with_rng(count, width, height, Rng::with_seed(0x5eed))
    }

    #[test]
    fn test_count_is_invariant() {
        let mut field = seeded_field(100, 800.0, 600.0);
        assert_eq!(field.len(), 100);
        for _ in 0..500 {
            field.advance();
        }
        assert_eq!(field.len(), 100);
    }

    #[test]
    fn test_spawn_ranges() {
        let field = seeded_field(200, 800.0, 600.0);
        for p in field.particles() {
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!((-0.25..0.25).contains(&p.speed_x));
            assert!((-0.25..0.25).contains(&p.speed_y));
            assert!((0.5..1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn test_opacity_stays_in_band() {
        let mut field = seeded_field(100, 800.0, 600.0);
        for _ in 0..2_000 {
            field.advance();
            for p in field.particles() {
                assert!(
                    (OPACITY_MIN..=OPACITY_MAX).contains(&p.opacity),
                    "opacity {} escaped the band",
                    p.opacity
                );
            }
        }
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut field = seeded_field(100, 320.0, 240.0);
        for _ in 0..5_000 {
            field.advance();
            for p in field.particles() {
                assert!((0.0..=320.0).contains(&p.x), "x {} out of bounds", p.x);
                assert!((0.0..=240.0).contains(&p.y), "y {} out of bounds", p.y);
            }
        }
    }

    #[test]
    fn test_wrap_to_opposite_edge() {
        let mut field = seeded_field(1, 100.0, 100.0);
        {
            let p = &mut field.particles[0];
            p.x = 99.9;
            p.y = 50.0;
            p.speed_x = 0.25;
            p.speed_y = 0.0;
        }
        field.advance();
        assert_eq!(field.particles()[0].x, 0.0);

        {
            let p = &mut field.particles[0];
            p.x = 0.05;
            p.speed_x = -0.25;
        }
        field.advance();
        assert_eq!(field.particles()[0].x, 100.0);
    }

    #[test]
    fn test_shrunk_viewport_wraps_on_next_crossing() {
        let mut field = seeded_field(50, 1000.0, 1000.0);
        field.set_viewport(200.0, 200.0);
        // Stranded particles are past the new edge, so one step wraps them.
        field.advance();
        for p in field.particles() {
            assert!((0.0..=200.0).contains(&p.x));
            assert!((0.0..=200.0).contains(&p.y));
        }
    }

    #[test]
    fn test_viewport_floor() {
        let mut field = seeded_field(10, 800.0, 600.0);
        field.set_viewport(0.0, -5.0);
        assert_eq!(field.width(), 1.0);
        assert_eq!(field.height(), 1.0);
    }
}
