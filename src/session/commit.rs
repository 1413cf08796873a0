use std::time::{
    Duration,
    Instant,
};

use super::gesture::{
    CardTransform,
    SwipeDirection,
};

/// How long the exit animation plays before the score mutation is actually
/// dispatched. The delay exists so the card is seen leaving before the
/// session advances underneath it.
pub const COMMIT_DISPATCH_DELAY: Duration = Duration::from_millis(120);

/// Duration of the exit slide and of the animated snap-back.
pub const SLIDE_DURATION: Duration = Duration::from_millis(200);

const EXIT_ROTATION_DEG: f32 = 14.0;

/// Scheduled exit animation for a committing card. Explicit task with an
/// injected clock: callers pass `now` in, so tests drive time without
/// sleeping. Dropped on session exit, which also cancels the dispatch.
#[derive(Debug, Clone, Copy)]
pub struct SwipeAnimator {
    direction: SwipeDirection,
    started: Instant,
    dispatched: bool,
}

impl SwipeAnimator {
    pub fn new(direction: SwipeDirection, now: Instant) -> Self {
        Self { direction, started: now, dispatched: false }
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    /// True once, when the dispatch delay has elapsed. The caller sends the
    /// store request on the first `true`.
    pub fn take_dispatch(&mut self, now: Instant) -> bool {
        if self.dispatched || now.duration_since(self.started) < COMMIT_DISPATCH_DELAY {
            return false;
        }
        self.dispatched = true;
        true
    }

    /// Fixed-magnitude exit transform, eased over the slide duration.
    pub fn transform(&self, card_width: f32, now: Instant) -> CardTransform {
        let progress = progress(self.started, SLIDE_DURATION, now);
        let sign = match self.direction {
            SwipeDirection::Right => 1.0,
            SwipeDirection::Left => -1.0,
        };
        CardTransform {
            offset_x: sign * card_width * progress,
            rotation_deg: sign * EXIT_ROTATION_DEG * progress,
        }
    }
}

/// Animated return to rest after a drag that did not cross the threshold.
/// A failed commit resets immediately instead, so the card never appears to
/// have moved when the mutation did not take effect.
#[derive(Debug, Clone, Copy)]
pub struct SnapBack {
    from: CardTransform,
    started: Instant,
}

impl SnapBack {
    pub fn new(from: CardTransform, now: Instant) -> Self {
        Self { from, started: now }
    }

    pub fn transform(&self, now: Instant) -> CardTransform {
        let remaining = 1.0 - progress(self.started, SLIDE_DURATION, now);
        CardTransform {
            offset_x: self.from.offset_x * remaining,
            rotation_deg: self.from.rotation_deg * remaining,
        }
    }

    pub fn done(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= SLIDE_DURATION
    }
}

fn progress(started: Instant, duration: Duration, now: Instant) -> f32 {
    let elapsed = now.duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_fires_once_after_the_delay() {
        let start = Instant::now();
        let mut animator = SwipeAnimator::new(SwipeDirection::Right, start);

        assert!(!animator.take_dispatch(start));
        assert!(!animator.take_dispatch(start + Duration::from_millis(119)));
        assert!(animator.take_dispatch(start + COMMIT_DISPATCH_DELAY));
        // Only the first elapsed poll dispatches.
        assert!(!animator.take_dispatch(start + Duration::from_millis(500)));
    }

    #[test]
    fn exit_transform_reaches_full_card_width() {
        let start = Instant::now();
        let animator = SwipeAnimator::new(SwipeDirection::Left, start);
        let done = animator.transform(320.0, start + SLIDE_DURATION);
        assert_eq!(done.offset_x, -320.0);
        assert_eq!(done.rotation_deg, -14.0);
    }

    #[test]
    fn snap_back_decays_to_rest() {
        let start = Instant::now();
        let snap = SnapBack::new(CardTransform { offset_x: 50.0, rotation_deg: 4.0 }, start);
        assert!(!snap.done(start));
        let settled = snap.transform(start + SLIDE_DURATION);
        assert_eq!(settled.offset_x, 0.0);
        assert!(snap.done(start + SLIDE_DURATION));
    }
}
