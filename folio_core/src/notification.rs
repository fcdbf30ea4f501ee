//! Toast notifications.
//!
//! A toast slides in shortly after creation, stays visible for a fixed
//! window, fades, and expires. Fire-once and non-cancellable; the owner
//! drops it when [`Toast::advance`] reports expiry.

use std::time::Duration;

/// Delay between creation and the slide-in.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// How long the toast stays fully visible.
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);
/// Fade-out duration before removal.
pub const LEAVE_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    #[default]
    Error,
}

/// A transient user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Visible,
    Leaving,
}

/// Lifecycle wrapper around a [`Notification`].
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    phase: ToastPhase,
    left_in_phase: Duration,
}

impl Toast {
    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            phase: ToastPhase::Entering,
            left_in_phase: ENTER_DELAY,
        }
    }

    /// Advances the lifecycle by `elapsed`. Returns `false` once expired.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let mut elapsed = elapsed;
        loop {
            if elapsed < self.left_in_phase {
                self.left_in_phase -= elapsed;
                return true;
            }
            elapsed -= self.left_in_phase;
            match self.phase {
                ToastPhase::Entering => {
                    self.phase = ToastPhase::Visible;
                    self.left_in_phase = VISIBLE_FOR;
                }
                ToastPhase::Visible => {
                    self.phase = ToastPhase::Leaving;
                    self.left_in_phase = LEAVE_FADE;
                }
                ToastPhase::Leaving => {
                    self.left_in_phase = Duration::ZERO;
                    return false;
                }
            }
        }
    }

    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Presentation factor for the renderer: 0 before the slide-in,
    /// 1 while visible, falling to 0 during the fade.
    pub fn progress(&self) -> f32 {
        match self.phase {
            ToastPhase::Entering => 0.0,
            ToastPhase::Visible => 1.0,
            ToastPhase::Leaving => {
                self.left_in_phase.as_secs_f32() / LEAVE_FADE.as_secs_f32()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_phase_walk() {
        let mut toast = Toast::new(Notification::error("nope"));
        assert_eq!(toast.phase(), ToastPhase::Entering);
        assert_eq!(toast.progress(), 0.0);

        assert!(toast.advance(ms(100)));
        assert_eq!(toast.phase(), ToastPhase::Visible);
        assert_eq!(toast.progress(), 1.0);

        assert!(toast.advance(ms(3000)));
        assert_eq!(toast.phase(), ToastPhase::Leaving);

        assert!(!toast.advance(ms(300)));
    }

    #[test]
    fn test_progress_falls_while_leaving() {
        let mut toast = Toast::new(Notification::success("sent"));
        toast.advance(ms(3100));
        assert_eq!(toast.phase(), ToastPhase::Leaving);
        let early = toast.progress();
        toast.advance(ms(150));
        let late = toast.progress();
        assert!(early > late);
        assert!(late > 0.0);
    }

    #[test]
    fn test_small_steps_accumulate() {
        let mut toast = Toast::new(Notification::error("nope"));
        let mut alive = true;
        let mut ticks = 0u32;
        while alive {
            alive = toast.advance(ms(16));
            ticks += 1;
            assert!(ticks < 1_000, "toast never expired");
        }
        // 3400 ms total at 16 ms per tick.
        assert_eq!(ticks, 213);
    }

    #[test]
    fn test_one_big_step_expires() {
        let mut toast = Toast::new(Notification::error("nope"));
        assert!(!toast.advance(ms(10_000)));
        assert_eq!(toast.progress(), 0.0);
    }

    #[test]
    fn test_default_kind_is_error() {
        assert_eq!(NotificationKind::default(), NotificationKind::Error);
    }
}
