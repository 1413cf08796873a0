use crate::core::{
    errors::MazoError,
    models::{
        Deck,
        DeckSummary,
        PatchResponse,
    },
};

/// How a store call failed, shaped for display: a server-provided message
/// is shown verbatim, a bare status becomes the translated "Error {status}",
/// transport errors pass their own text through.
#[derive(Debug, Clone)]
pub enum StoreFailure {
    Message(String),
    Status(u16),
    Transport(String),
}

impl From<MazoError> for StoreFailure {
    fn from(error: MazoError) -> Self {
        match error {
            MazoError::Store { message: Some(message), .. } => StoreFailure::Message(message),
            MazoError::Store { status, message: None } => StoreFailure::Status(status),
            other => StoreFailure::Transport(other.to_string()),
        }
    }
}

#[derive(Debug)]
pub enum TaskResult {
    DecksLoaded(Result<Vec<DeckSummary>, StoreFailure>),
    DeckOpened(Result<Deck, StoreFailure>),
    DeckDeleted { deck_id: String, result: Result<(), StoreFailure> },
    DeckCreated(Result<DeckSummary, StoreFailure>),
    /// Resolution of the single in-flight score mutation, tagged with the
    /// epoch of the session that issued it.
    AnswerCommitted { epoch: u64, result: Result<PatchResponse, StoreFailure> },
}
