use iced::widget::canvas;
use iced::Point;

use folio_core::particles::{ParticleField, DEFAULT_PARTICLE_COUNT};
use folio_core::typewriter::Typewriter;

use super::Spring;
use crate::constants::{
    HOVER_TICK_INCREMENT, LOADING_FADE_MS, LOADING_HOLD_MS, PARALLAX_SPEED, REVEAL_DAMPING,
    REVEAL_STIFFNESS,
};

/// State for the drifting particle backdrop.
#[derive(Debug)]
pub struct ParticleLayerState {
    pub field: ParticleField,
    pub cache: canvas::Cache,
}

impl ParticleLayerState {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            field: ParticleField::new(DEFAULT_PARTICLE_COUNT, width, height),
            cache: canvas::Cache::default(),
        }
    }

    /// Advances the simulation one frame and forces a repaint.
    pub fn update(&mut self) {
        self.field.advance();
        self.cache.clear();
    }

    /// Mirrors the window size into the field's wraparound bounds.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field.set_viewport(width, height);
        self.cache.clear();
    }
}

/// Drives the typewriter against the fixed tick interval, honoring the
/// per-step delays the core state machine reports.
#[derive(Debug)]
pub struct TypewriterState {
    writer: Typewriter,
    until_next_ms: f32,
}

impl TypewriterState {
    pub fn new(prefix: &str, target: &str) -> Self {
        Self {
            writer: Typewriter::new(prefix, target),
            // First step fires on the first tick, like typing starting at load.
            until_next_ms: 0.0,
        }
    }

    /// Accumulates elapsed time and steps the writer when its deadline
    /// passes. Returns true when the visible text changed.
    pub fn update(&mut self, elapsed_ms: f32) -> bool {
        self.until_next_ms -= elapsed_ms;
        let mut changed = false;
        while self.until_next_ms <= 0.0 {
            let delay = self.writer.tick();
            self.until_next_ms += delay.as_secs_f32() * 1000.0;
            changed = true;
        }
        changed
    }

    pub fn rendered(&self) -> String {
        self.writer.rendered()
    }
}

/// State for the slide-in navigation overlay.
#[derive(Debug, Default)]
pub struct MenuState {
    pub spring: Spring,
    pub cache: canvas::Cache,
}

impl MenuState {
    /// Updates the slide animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        let animating = self.spring.update();
        if animating {
            self.cache.clear();
        }
        animating
    }

    pub fn open(&mut self) {
        self.spring.set_target(1.0);
    }

    pub fn close(&mut self) {
        self.spring.set_target(0.0);
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn is_open(&self) -> bool {
        self.spring.is_open()
    }

    pub fn progress(&self) -> f32 {
        self.spring.position
    }
}

/// State for a tilt-responsive project card.
#[derive(Debug, Default)]
pub struct TiltCardState {
    pub mouse_position: Point,
    pub is_hovered: bool,
    pub hover_tick: f32,
    pub cache: canvas::Cache,
}

impl TiltCardState {
    /// Advances the hover pulse. Returns true while hovered.
    pub fn update(&mut self) -> bool {
        if self.is_hovered {
            self.hover_tick += HOVER_TICK_INCREMENT;
            self.cache.clear();
            true
        } else {
            false
        }
    }

    /// Leaving the card resets the tilt instantly.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.is_hovered = hovered;
        if !hovered {
            self.hover_tick = 0.0;
        }
        self.cache.clear();
    }

    pub fn set_mouse_position(&mut self, position: Point) {
        self.mouse_position = position;
        self.cache.clear();
    }

    /// Tilt angles in degrees for the current pointer position: pointer
    /// below center pitches the card toward the viewer, pointer right of
    /// center yaws it left.
    pub fn tilt_angles(&self, width: f32, height: f32) -> (f32, f32) {
        if !self.is_hovered {
            return (0.0, 0.0);
        }
        let angle_x = (self.mouse_position.y - height / 2.0) / 20.0;
        let angle_y = (width / 2.0 - self.mouse_position.x) / 20.0;
        (angle_x, angle_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    Holding,
    Fading,
    Done,
}

/// Startup overlay: fully opaque hold, then a fade, then gone from the
/// widget tree for good.
#[derive(Debug)]
pub struct LoadingState {
    phase: LoadingPhase,
    remaining_ms: f32,
    pub spinner_tick: f32,
    pub cache: canvas::Cache,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self {
            phase: LoadingPhase::Holding,
            remaining_ms: LOADING_HOLD_MS,
            spinner_tick: 0.0,
            cache: canvas::Cache::default(),
        }
    }
}

impl LoadingState {
    /// Advances hold/fade countdowns. Returns true while the overlay
    /// still needs to be drawn.
    pub fn update(&mut self, elapsed_ms: f32) -> bool {
        if self.phase == LoadingPhase::Done {
            return false;
        }
        self.spinner_tick += elapsed_ms / 1000.0;
        self.remaining_ms -= elapsed_ms;
        if self.remaining_ms <= 0.0 {
            match self.phase {
                LoadingPhase::Holding => {
                    // Carry the overshoot into the fade so total time is exact.
                    self.phase = LoadingPhase::Fading;
                    self.remaining_ms += LOADING_FADE_MS;
                }
                LoadingPhase::Fading => {
                    self.phase = LoadingPhase::Done;
                    self.remaining_ms = 0.0;
                }
                LoadingPhase::Done => {}
            }
        }
        self.cache.clear();
        !self.is_done()
    }

    pub fn opacity(&self) -> f32 {
        match self.phase {
            LoadingPhase::Holding => 1.0,
            LoadingPhase::Fading => (self.remaining_ms / LOADING_FADE_MS).clamp(0.0, 1.0),
            LoadingPhase::Done => 0.0,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoadingPhase::Done
    }
}

/// Scroll-triggered reveal for a page section or list item. Sticky once
/// triggered; sections also auto-reveal after a staggered startup delay.
#[derive(Debug)]
pub struct SectionReveal {
    revealed: bool,
    delay_ms: f32,
    spring: Spring,
}

impl SectionReveal {
    /// Reveals automatically once `delay_ms` has elapsed, or earlier if
    /// scrolled into view.
    pub fn after(delay_ms: f32) -> Self {
        Self {
            revealed: false,
            delay_ms,
            spring: Spring::new(REVEAL_STIFFNESS, REVEAL_DAMPING),
        }
    }

    /// Only reveals when explicitly triggered by scrolling.
    pub fn manual() -> Self {
        Self::after(f32::INFINITY)
    }

    pub fn reveal(&mut self) {
        if !self.revealed {
            self.revealed = true;
            self.spring.set_target(1.0);
        }
    }

    /// Counts down the startup delay and advances the rise animation.
    /// Returns true while still animating.
    pub fn update(&mut self, elapsed_ms: f32) -> bool {
        if !self.revealed {
            self.delay_ms -= elapsed_ms;
            if self.delay_ms <= 0.0 {
                self.reveal();
            }
        }
        self.spring.update()
    }

    pub fn progress(&self) -> f32 {
        self.spring.position
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Tracks page scroll to drive the scroll indicator, parallax, and
/// reveal triggers.
#[derive(Debug)]
pub struct ScrollTracker {
    offset: f32,
    last_offset: f32,
    fade: Spring,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        let mut fade = Spring::default();
        fade.snap_to(1.0);
        Self {
            offset: 0.0,
            last_offset: 0.0,
            fade,
        }
    }
}

impl ScrollTracker {
    /// Records a new absolute offset; the indicator fades out while
    /// scrolling down and back in otherwise.
    pub fn record(&mut self, offset: f32) {
        if offset > self.last_offset {
            self.fade.set_target(0.0);
        } else {
            self.fade.set_target(1.0);
        }
        self.last_offset = offset;
        self.offset = offset;
    }

    pub fn update(&mut self) -> bool {
        self.fade.update()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn indicator_opacity(&self) -> f32 {
        self.fade.position
    }

    pub fn indicator_visible(&self) -> bool {
        self.fade.is_open()
    }

    /// Downward shift applied to floating hero decorations.
    pub fn parallax_shift(&self) -> f32 {
        self.offset * PARALLAX_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_toggle_round_trip() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_menu_progress_rises_when_open() {
        let mut menu = MenuState::default();
        menu.open();
        for _ in 0..300 {
            menu.update();
        }
        assert_eq!(menu.progress(), 1.0);
    }

    #[test]
    fn test_typewriter_driver_waits_for_deadline() {
        let mut state = TypewriterState::new("Hi ", "ab");
        // First tick fires immediately and schedules the next 100 ms out.
        assert!(state.update(16.0));
        assert_eq!(state.rendered(), "Hi a");
        // 5 more ticks (80 ms) stay under the deadline.
        for _ in 0..5 {
            assert!(!state.update(16.0));
        }
        // 96 + 16 = 112 ms crosses it.
        assert!(state.update(16.0));
        assert_eq!(state.rendered(), "Hi ab");
    }

    #[test]
    fn test_loading_phase_timings() {
        let mut loading = LoadingState::default();
        assert!(loading.update(1_499.0));
        assert_eq!(loading.phase(), LoadingPhase::Holding);
        assert_eq!(loading.opacity(), 1.0);

        assert!(loading.update(2.0));
        assert_eq!(loading.phase(), LoadingPhase::Fading);
        assert!(loading.opacity() < 1.0);

        assert!(loading.update(498.0));
        assert!(!loading.update(2.0));
        assert!(loading.is_done());
        assert_eq!(loading.opacity(), 0.0);

        // Stays done.
        assert!(!loading.update(16.0));
    }

    #[test]
    fn test_tilt_angles_follow_pointer() {
        let mut card = TiltCardState::default();
        card.set_hovered(true);
        card.set_mouse_position(Point::new(140.0, 105.0));
        // 280x210 card: pointer at center yields no tilt.
        assert_eq!(card.tilt_angles(280.0, 210.0), (0.0, 0.0));

        card.set_mouse_position(Point::new(280.0, 210.0));
        let (angle_x, angle_y) = card.tilt_angles(280.0, 210.0);
        assert_eq!(angle_x, 105.0 / 20.0);
        assert_eq!(angle_y, -140.0 / 20.0);
    }

    #[test]
    fn test_tilt_resets_on_leave() {
        let mut card = TiltCardState::default();
        card.set_hovered(true);
        card.set_mouse_position(Point::new(0.0, 0.0));
        for _ in 0..10 {
            card.update();
        }
        assert!(card.hover_tick > 0.0);

        card.set_hovered(false);
        assert_eq!(card.hover_tick, 0.0);
        assert_eq!(card.tilt_angles(280.0, 210.0), (0.0, 0.0));
    }

    #[test]
    fn test_reveal_stagger_delay() {
        let mut reveal = SectionReveal::after(200.0);
        reveal.update(190.0);
        assert!(!reveal.is_revealed());
        reveal.update(16.0);
        assert!(reveal.is_revealed());
    }

    #[test]
    fn test_manual_reveal_needs_trigger() {
        let mut reveal = SectionReveal::manual();
        for _ in 0..10_000 {
            reveal.update(16.0);
        }
        assert!(!reveal.is_revealed());
        reveal.reveal();
        assert!(reveal.is_revealed());
        for _ in 0..300 {
            reveal.update(16.0);
        }
        assert_eq!(reveal.progress(), 1.0);
    }

    #[test]
    fn test_scroll_indicator_down_up_rule() {
        let mut scroll = ScrollTracker::default();
        assert!(scroll.indicator_visible());

        scroll.record(120.0);
        assert!(!scroll.indicator_visible());

        scroll.record(80.0);
        assert!(scroll.indicator_visible());

        // Repeating the same offset keeps it visible, like the original's
        // else-branch.
        scroll.record(80.0);
        assert!(scroll.indicator_visible());
    }

    #[test]
    fn test_parallax_shift_is_half_scroll() {
        let mut scroll = ScrollTracker::default();
        scroll.record(300.0);
        assert_eq!(scroll.parallax_shift(), 150.0);
    }

    #[test]
    fn test_particle_layer_resize_updates_bounds() {
        let mut layer = ParticleLayerState::new(800.0, 600.0);
        layer.resize(400.0, 300.0);
        assert_eq!(layer.field.width(), 400.0);
        assert_eq!(layer.field.height(), 300.0);
    }
}
