pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::MazoError;
pub use models::{
    Card,
    CardPatch,
    Deck,
    DeckSummary,
    FieldMap,
    PatchResponse,
};
