use std::time::Instant;

use eframe::egui;

use super::{
    deck_form::DeckFormModal,
    deck_list::{
        DeckListAction,
        DeckListView,
    },
    error_modal::ErrorModal,
    session_view::{
        SessionAction,
        SessionView,
    },
    settings::SettingsData,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        DeckSummary,
    },
    i18n::{
        failure_text,
        tr,
        Text,
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    session::{
        CommitResolution,
        SessionController,
    },
    store::DeckStore,
};

pub struct MazoApp {
    settings: SettingsData,
    theme: Theme,
    store: DeckStore,
    decks: Vec<DeckSummary>,
    decks_loading: bool,
    deck_error: Option<String>,
    review: Option<SessionController>,
    session_epoch: u64,
    session_view: SessionView,
    deck_list: DeckListView,
    deck_form: DeckFormModal,
    error_modal: ErrorModal,
    task_manager: TaskManager,
}

impl MazoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>("settings.json");
        let store = DeckStore::new(settings.store_url.clone());
        let task_manager = TaskManager::new();

        task_manager.load_decks(store.clone());

        let app = Self {
            settings,
            theme: Theme::midnight(),
            store,
            decks: Vec::new(),
            decks_loading: true,
            deck_error: None,
            review: None,
            session_epoch: 0,
            session_view: SessionView::new(),
            deck_list: DeckListView::default(),
            deck_form: DeckFormModal::new(),
            error_modal: ErrorModal::new(),
            task_manager,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if app.settings.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        app
    }
}

impl eframe::App for MazoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        // A pending swipe dispatches its store request once the exit
        // animation delay has elapsed.
        if let Some(controller) = &mut self.review {
            if let Some(request) = controller.poll_dispatch(now) {
                self.task_manager.commit_answer(self.store.clone(), request);
            }
        }

        self.sync_dark_mode(ctx);

        let lang = self.settings.language;
        match TopBar::show(ctx, &self.theme, lang, self.review.is_some()) {
            Some(TopBarAction::AddDeck) => self.deck_form.open_form(),
            Some(TopBarAction::ToggleLanguage) => {
                self.settings.language = lang.toggled();
                self.save_settings();
            }
            None => {}
        }
        let lang = self.settings.language;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(controller) = &mut self.review {
                let action =
                    self.session_view.show(ui, &self.theme, lang, controller, now);
                if let Some(SessionAction::Exit) = action {
                    self.exit_session();
                }
            } else {
                let action = self.deck_list.show(
                    ui,
                    &self.theme,
                    lang,
                    &self.decks,
                    self.deck_error.as_deref(),
                    self.decks_loading,
                );
                match action {
                    Some(DeckListAction::View(deck_id)) => {
                        self.task_manager.open_deck(self.store.clone(), deck_id);
                    }
                    Some(DeckListAction::Delete(deck_id)) => {
                        self.task_manager.delete_deck(self.store.clone(), deck_id);
                    }
                    None => {}
                }
            }
        });

        if let Some(submit) = self.deck_form.show(ctx, &self.theme, lang) {
            self.task_manager.create_deck(self.store.clone(), submit.name, submit.path);
        }

        self.error_modal.show(ctx, &self.theme);
    }
}

impl MazoApp {
    fn handle_task_result(&mut self, result: TaskResult) {
        let lang = self.settings.language;

        match result {
            TaskResult::DecksLoaded(result) => {
                self.decks_loading = false;
                match result {
                    Ok(decks) => {
                        self.decks = decks;
                        self.deck_error = None;
                    }
                    Err(failure) => {
                        self.deck_error = Some(failure_text(lang, &failure));
                    }
                }
            }

            TaskResult::DeckOpened(result) => match result {
                Ok(deck) => {
                    self.session_epoch += 1;
                    self.review = Some(SessionController::new(&deck, self.session_epoch));
                    self.session_view.reset();
                }
                Err(failure) => {
                    self.error_modal
                        .open(tr(lang, &Text::ErrorTitle), failure_text(lang, &failure));
                }
            },

            TaskResult::DeckDeleted { deck_id, result } => match result {
                Ok(()) => {
                    self.decks.retain(|deck| deck.id != deck_id);
                }
                Err(failure) => {
                    self.error_modal
                        .open(tr(lang, &Text::ErrorTitle), failure_text(lang, &failure));
                }
            },

            TaskResult::DeckCreated(result) => match result {
                Ok(summary) => {
                    self.decks.push(summary);
                    self.deck_form.on_created();
                }
                Err(failure) => {
                    self.deck_form.on_failed(failure_text(lang, &failure));
                }
            },

            TaskResult::AnswerCommitted { epoch, result } => {
                // No live session means the response arrived after exit.
                let Some(controller) = &mut self.review else {
                    return;
                };
                let result = result.map_err(|failure| failure_text(lang, &failure));
                match controller.resolve_commit(epoch, result) {
                    CommitResolution::Stale => {}
                    CommitResolution::Advanced { deck } => {
                        if let Some(update) = deck {
                            if let Some(entry) =
                                self.decks.iter_mut().find(|deck| deck.id == update.id)
                            {
                                entry.merge(&update);
                            }
                        }
                        self.session_view.settle();
                    }
                    CommitResolution::Failed { message } => {
                        self.session_view.settle();
                        self.error_modal.open(tr(lang, &Text::ErrorTitle), message);
                    }
                }
            }
        }
    }

    /// Leaving a session drops the controller, which also cancels any
    /// not-yet-dispatched swipe; the list is refetched so committed scores
    /// show up in the summaries.
    fn exit_session(&mut self) {
        self.review = None;
        self.session_view.reset();
        self.reload_decks();
    }

    fn reload_decks(&mut self) {
        self.decks_loading = true;
        self.deck_error = None;
        self.task_manager.load_decks(self.store.clone());
    }

    /// The theme preference switch in the top bar writes to egui state;
    /// mirror it into the saved settings when it changes.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark = ctx.style().visuals.dark_mode;
        if dark != self.settings.dark_mode {
            self.settings.dark_mode = dark;
            self.save_settings();
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
