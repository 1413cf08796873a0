/// Fraction of the card width a drag must cross to count as a commit
/// gesture. The single threshold used everywhere in the engine.
pub const DRAG_THRESHOLD_RATIO: f32 = 0.28;

/// Rotation grows with displacement and clamps at +-18 degrees.
pub const MAX_ROTATION_DEG: f32 = 18.0;
const ROTATION_DIVISOR: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Score delta the direction maps to: right is "got it".
    pub fn delta(self) -> i64 {
        match self {
            SwipeDirection::Right => 1,
            SwipeDirection::Left => -1,
        }
    }
}

/// Continuous visual-offset signal emitted while dragging. The rendering
/// adapter applies whatever subset of it the toolkit supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset_x: f32,
    pub rotation_deg: f32,
}

impl CardTransform {
    pub const RESET: CardTransform = CardTransform { offset_x: 0.0, rotation_deg: 0.0 };

    pub fn from_displacement(displacement: f32) -> Self {
        let rotation = (displacement / ROTATION_DIVISOR)
            .clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG);
        CardTransform { offset_x: displacement, rotation_deg: rotation }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragUpdate {
    /// Not dragging, or the event came from a different pointer.
    Ignored,
    Moved { transform: CardTransform, preview: Option<SwipeDirection> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    Ignored,
    /// Below the threshold: animated snap-back to rest.
    SnapBack,
    /// The Interaction Lock was taken while the drag ran (a button commit
    /// started concurrently); reset without committing.
    LockedReset,
    Commit(SwipeDirection),
}

/// Interpreter over a single active pointer stream: Idle -> Dragging ->
/// {Committing, Idle}. Pure state; rendering and the Interaction Lock live
/// with the caller and are passed in at each entry point.
#[derive(Debug, Default)]
pub struct GestureState {
    active: bool,
    anchor_x: f32,
    pointer_id: Option<u64>,
    displacement: f32,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Returns whether the drag actually started. Ignored while the lock is
    /// held or when no card is current; those are expected races, not
    /// errors.
    pub fn on_drag_start(
        &mut self,
        pointer_id: u64,
        x: f32,
        lock_held: bool,
        has_card: bool,
    ) -> bool {
        if lock_held || !has_card {
            return false;
        }
        self.active = true;
        self.anchor_x = x;
        self.pointer_id = Some(pointer_id);
        self.displacement = 0.0;
        true
    }

    pub fn on_drag_move(&mut self, pointer_id: u64, x: f32, card_width: f32) -> DragUpdate {
        if !self.active || self.pointer_id != Some(pointer_id) {
            return DragUpdate::Ignored;
        }
        self.displacement = x - self.anchor_x;
        let preview = direction_past_threshold(self.displacement, card_width);
        DragUpdate::Moved {
            transform: CardTransform::from_displacement(self.displacement),
            preview,
        }
    }

    pub fn on_drag_end(&mut self, pointer_id: u64, card_width: f32, lock_held: bool) -> DragRelease {
        if !self.active || self.pointer_id != Some(pointer_id) {
            return DragRelease::Ignored;
        }
        let displacement = self.displacement;
        self.reset();

        if lock_held {
            return DragRelease::LockedReset;
        }
        match direction_past_threshold(displacement, card_width) {
            Some(direction) => DragRelease::Commit(direction),
            None => DragRelease::SnapBack,
        }
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.pointer_id = None;
        self.displacement = 0.0;
    }
}

/// Strict inequality: landing exactly on the threshold does not commit.
fn direction_past_threshold(displacement: f32, card_width: f32) -> Option<SwipeDirection> {
    let threshold = card_width * DRAG_THRESHOLD_RATIO;
    if displacement > threshold {
        Some(SwipeDirection::Right)
    } else if displacement < -threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 100.0;

    fn dragging(from: f32) -> GestureState {
        let mut gesture = GestureState::default();
        assert!(gesture.on_drag_start(1, from, false, true));
        gesture
    }

    #[test]
    fn start_is_ignored_while_locked_or_without_card() {
        let mut gesture = GestureState::default();
        assert!(!gesture.on_drag_start(1, 0.0, true, true));
        assert!(!gesture.on_drag_start(1, 0.0, false, false));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn moves_from_other_pointers_are_ignored() {
        let mut gesture = dragging(10.0);
        assert_eq!(gesture.on_drag_move(2, 50.0, WIDTH), DragUpdate::Ignored);
        assert_eq!(gesture.displacement(), 0.0);
    }

    #[test]
    fn move_emits_transform_with_clamped_rotation() {
        let mut gesture = dragging(0.0);
        match gesture.on_drag_move(1, 500.0, WIDTH) {
            DragUpdate::Moved { transform, preview } => {
                assert_eq!(transform.offset_x, 500.0);
                assert_eq!(transform.rotation_deg, MAX_ROTATION_DEG);
                assert_eq!(preview, Some(SwipeDirection::Right));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn preview_only_past_the_threshold() {
        let mut gesture = dragging(0.0);
        match gesture.on_drag_move(1, 20.0, WIDTH) {
            DragUpdate::Moved { preview, .. } => assert_eq!(preview, None),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn release_past_threshold_commits_in_that_direction() {
        let mut gesture = dragging(0.0);
        gesture.on_drag_move(1, -40.0, WIDTH);
        assert_eq!(
            gesture.on_drag_end(1, WIDTH, false),
            DragRelease::Commit(SwipeDirection::Left)
        );
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn release_exactly_at_threshold_snaps_back() {
        // |displacement| == 0.28 * width is not past the threshold.
        let mut gesture = dragging(0.0);
        gesture.on_drag_move(1, WIDTH * DRAG_THRESHOLD_RATIO, WIDTH);
        assert_eq!(gesture.on_drag_end(1, WIDTH, false), DragRelease::SnapBack);
    }

    #[test]
    fn release_while_locked_resets_without_committing() {
        let mut gesture = dragging(0.0);
        gesture.on_drag_move(1, 90.0, WIDTH);
        assert_eq!(gesture.on_drag_end(1, WIDTH, true), DragRelease::LockedReset);
    }

    #[test]
    fn release_from_other_pointer_is_ignored() {
        let mut gesture = dragging(0.0);
        gesture.on_drag_move(1, 90.0, WIDTH);
        assert_eq!(gesture.on_drag_end(2, WIDTH, false), DragRelease::Ignored);
        assert!(gesture.is_dragging());
    }
}
