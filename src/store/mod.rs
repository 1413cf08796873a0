use reqwest::{
    multipart,
    Client,
    Response,
};
use serde::Deserialize;

use crate::core::{
    models::{
        Deck,
        DeckSummary,
        PatchResponse,
    },
    MazoError,
};

/// HTTP client for the deck store. One instance is cloned into every
/// background task; reqwest's `Client` is already an `Arc` internally.
#[derive(Clone)]
pub struct DeckStore {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct DeckListResponse {
    decks: Vec<DeckSummary>,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    deck: DeckSummary,
}

impl DeckStore {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000";

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string(), client: Client::new() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_decks(&self) -> Result<Vec<DeckSummary>, MazoError> {
        let response = self.client.get(self.url("/api/decks")).send().await?;
        let list: DeckListResponse = parse(response).await?;
        Ok(list.decks)
    }

    pub async fn fetch_deck(&self, deck_id: &str) -> Result<Deck, MazoError> {
        let response =
            self.client.get(self.url(&format!("/api/decks/{deck_id}"))).send().await?;
        parse(response).await
    }

    /// Send a score delta for one card. The server answers with the
    /// authoritative card and, optionally, a refreshed deck summary.
    pub async fn patch_card_score(
        &self,
        deck_id: &str,
        card_id: &str,
        delta: i64,
    ) -> Result<PatchResponse, MazoError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/decks/{deck_id}/cards/{card_id}")))
            .json(&serde_json::json!({ "delta": delta }))
            .send()
            .await?;
        parse(response).await
    }

    pub async fn delete_deck(&self, deck_id: &str) -> Result<(), MazoError> {
        let response =
            self.client.delete(self.url(&format!("/api/decks/{deck_id}"))).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Upload a new deck: multipart form with the deck name and the raw
    /// cards file (JSON or .xlsx), exactly what the backend expects.
    pub async fn create_deck(
        &self,
        name: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<DeckSummary, MazoError> {
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .part("file", multipart::Part::bytes(bytes).file_name(file_name.to_string()));
        let response =
            self.client.post(self.url("/api/decks")).multipart(form).send().await?;
        let created: CreatedResponse = parse(response).await?;
        Ok(created.deck)
    }
}

async fn parse<T: for<'de> Deserialize<'de>>(response: Response) -> Result<T, MazoError> {
    let response = ensure_success(response).await?;
    Ok(response.json().await?)
}

async fn ensure_success(response: Response) -> Result<Response, MazoError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(store_error(status.as_u16(), &body))
}

/// Failure mapping: prefer the `error` field of a structured payload, fall
/// back to a bare status code the UI renders as "Error {status}".
pub fn store_error(status: u16, body: &str) -> MazoError {
    #[derive(Deserialize)]
    struct ErrorPayload {
        error: Option<String>,
    }

    let message = serde_json::from_str::<ErrorPayload>(body).ok().and_then(|p| p.error);
    MazoError::Store { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_prefers_the_payload_message() {
        match store_error(404, r#"{"error":"Mazo no encontrado"}"#) {
            MazoError::Store { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("Mazo no encontrado"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn store_error_falls_back_to_the_status_code() {
        match store_error(502, "<html>bad gateway</html>") {
            MazoError::Store { status, message } => {
                assert_eq!(status, 502);
                assert!(message.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let store = DeckStore::new("http://localhost:8000/");
        assert_eq!(store.url("/api/decks"), "http://localhost:8000/api/decks");
    }
}
