use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::TaskResult;
use crate::{
    session::CommitRequest,
    store::DeckStore,
};

/// Runs every store call on a background thread against a shared tokio
/// runtime and funnels the outcomes back through a channel the GUI drains
/// once per frame. The GUI thread never blocks on the network.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();
        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();
        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }
        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn load_decks(&self, store: DeckStore) {
        let (sender, runtime) = self.task_context();
        thread::spawn(move || {
            let result = runtime
                .block_on(store.fetch_decks())
                .map_err(Into::into);
            let _ = sender.send(TaskResult::DecksLoaded(result));
        });
    }

    pub fn open_deck(&self, store: DeckStore, deck_id: String) {
        let (sender, runtime) = self.task_context();
        thread::spawn(move || {
            let result = runtime
                .block_on(store.fetch_deck(&deck_id))
                .map_err(Into::into);
            let _ = sender.send(TaskResult::DeckOpened(result));
        });
    }

    pub fn delete_deck(&self, store: DeckStore, deck_id: String) {
        let (sender, runtime) = self.task_context();
        thread::spawn(move || {
            let result = runtime
                .block_on(store.delete_deck(&deck_id))
                .map_err(Into::into);
            let _ = sender.send(TaskResult::DeckDeleted { deck_id, result });
        });
    }

    /// Reads the cards file on the worker thread and uploads it as-is; the
    /// backend does the parsing and validation.
    pub fn create_deck(&self, store: DeckStore, name: String, path: PathBuf) {
        let (sender, runtime) = self.task_context();
        thread::spawn(move || {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("cards.json")
                .to_string();
            let result = match std::fs::read(&path) {
                Ok(bytes) => runtime
                    .block_on(store.create_deck(&name, &file_name, bytes))
                    .map_err(Into::into),
                Err(error) => Err(crate::core::MazoError::from(error).into()),
            };
            let _ = sender.send(TaskResult::DeckCreated(result));
        });
    }

    pub fn commit_answer(&self, store: DeckStore, request: CommitRequest) {
        let (sender, runtime) = self.task_context();
        thread::spawn(move || {
            let result = runtime
                .block_on(store.patch_card_score(
                    &request.deck_id,
                    &request.card_id,
                    request.delta,
                ))
                .map_err(Into::into);
            let _ =
                sender.send(TaskResult::AnswerCommitted { epoch: request.epoch, result });
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
