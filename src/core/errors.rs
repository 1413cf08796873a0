use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazoError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    /// Non-success status from the deck store. `message` carries the `error`
    /// field of the JSON payload when the server provided one.
    #[error("store error {status}: {message:?}")]
    Store { status: u16, message: Option<String> },

    #[error("MazoError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for MazoError {
    fn from(error: std::io::Error) -> Self {
        MazoError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for MazoError {
    fn from(error: reqwest::Error) -> Self {
        MazoError::Reqwest(Box::new(error))
    }
}
