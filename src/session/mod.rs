pub mod commit;
pub mod controller;
pub mod gesture;
pub mod round;
pub mod shuffle;
pub mod state;

#[cfg(test)]
mod session_tests;

pub use commit::{
    SnapBack,
    SwipeAnimator,
};
pub use controller::{
    CommitRequest,
    CommitResolution,
    SessionController,
};
pub use gesture::{
    CardTransform,
    DragRelease,
    DragUpdate,
    GestureState,
    SwipeDirection,
};
pub use state::{
    ReviewSession,
    SessionPhase,
    SessionStatus,
};
