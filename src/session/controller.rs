use std::time::Instant;

use super::{
    commit::SwipeAnimator,
    gesture::{
        DragRelease,
        DragUpdate,
        GestureState,
        SwipeDirection,
    },
    state::ReviewSession,
};
use crate::core::models::{
    Deck,
    DeckSummary,
    PatchResponse,
};

/// A score mutation ready to be sent to the store. Tagged with the epoch of
/// the session that issued it so late responses can be told apart from
/// responses meant for a replacement session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub deck_id: String,
    pub card_id: String,
    pub delta: i64,
    pub epoch: u64,
}

#[derive(Debug, Clone)]
pub enum CommitResolution {
    /// Response from a session that is no longer live; discarded untouched.
    Stale,
    /// Server confirmed: card merged, session advanced, lock released.
    Advanced { deck: Option<DeckSummary> },
    /// Store refused or transport failed: lock released, card untouched.
    /// The message is what the UI should surface.
    Failed { message: String },
}

/// Owns one live review pass: the session snapshot, the gesture interpreter,
/// the Interaction Lock and the pending swipe. Exactly one commit can be in
/// flight; every score-mutating entry point checks the lock and degrades to
/// a no-op instead of queueing.
pub struct SessionController {
    session: ReviewSession,
    gesture: GestureState,
    locked: bool,
    swipe: Option<SwipeAnimator>,
    epoch: u64,
}

impl SessionController {
    pub fn new(deck: &Deck, epoch: u64) -> Self {
        Self {
            session: ReviewSession::start(deck),
            gesture: GestureState::default(),
            locked: false,
            swipe: None,
            epoch,
        }
    }

    #[cfg(test)]
    pub fn with_session(session: ReviewSession, epoch: u64) -> Self {
        Self { session, gesture: GestureState::default(), locked: false, swipe: None, epoch }
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn swiping(&self) -> Option<&SwipeAnimator> {
        self.swipe.as_ref()
    }

    /// Whether the two action controls should accept input.
    pub fn controls_enabled(&self) -> bool {
        !self.locked && self.session.current_card().is_some()
    }

    pub fn drag_start(&mut self, pointer_id: u64, x: f32) -> bool {
        self.gesture.on_drag_start(
            pointer_id,
            x,
            self.locked,
            self.session.current_card().is_some(),
        )
    }

    pub fn drag_move(&mut self, pointer_id: u64, x: f32, card_width: f32) -> DragUpdate {
        self.gesture.on_drag_move(pointer_id, x, card_width)
    }

    /// Ends the drag and, when the threshold was crossed, funnels into the
    /// same commit path a button press takes.
    pub fn drag_end(
        &mut self,
        pointer_id: u64,
        card_width: f32,
        now: Instant,
    ) -> DragRelease {
        let release = self.gesture.on_drag_end(pointer_id, card_width, self.locked);
        if let DragRelease::Commit(direction) = release {
            if !self.trigger_swipe(direction, now) {
                return DragRelease::SnapBack;
            }
        }
        release
    }

    /// Shared commit entry point for swipe release and button press: takes
    /// the Interaction Lock and schedules the exit animation. The store
    /// request itself is dispatched by `poll_dispatch` once the animation
    /// delay has elapsed. No-op while locked or without a current card.
    pub fn trigger_swipe(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        if self.locked || self.session.current_card().is_none() {
            return false;
        }
        self.locked = true;
        self.swipe = Some(SwipeAnimator::new(direction, now));
        true
    }

    /// Called every frame; yields the commit request exactly once, when the
    /// scheduled dispatch delay has elapsed.
    pub fn poll_dispatch(&mut self, now: Instant) -> Option<CommitRequest> {
        let animator = self.swipe.as_mut()?;
        if !animator.take_dispatch(now) {
            return None;
        }
        let direction = animator.direction();
        match self.session.current_card() {
            Some(card) => Some(CommitRequest {
                deck_id: self.session.deck_id.clone(),
                card_id: card.id.clone(),
                delta: direction.delta(),
                epoch: self.epoch,
            }),
            None => {
                // The card vanished between lock and dispatch; abandon the
                // swipe and release the lock.
                self.swipe = None;
                self.locked = false;
                None
            }
        }
    }

    /// Merge the store's answer into the session. The lock is released only
    /// after `advance()` has run, so no other commit can interleave with the
    /// merge. A failure leaves the card untouched and the session resumable.
    pub fn resolve_commit(
        &mut self,
        epoch: u64,
        result: Result<PatchResponse, String>,
    ) -> CommitResolution {
        if epoch != self.epoch {
            return CommitResolution::Stale;
        }
        self.swipe = None;
        match result {
            Ok(response) => {
                self.session.merge_card(&response.card);
                self.session.advance();
                self.gesture.reset();
                self.locked = false;
                CommitResolution::Advanced { deck: response.deck }
            }
            Err(message) => {
                self.gesture.reset();
                self.locked = false;
                CommitResolution::Failed { message }
            }
        }
    }
}
