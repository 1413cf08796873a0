use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;

use super::theme::Theme;
use crate::i18n::{
    tr,
    Language,
    Text,
};

pub struct DeckFormSubmit {
    pub name: String,
    pub path: PathBuf,
}

enum Feedback {
    Uploading,
    Error(String),
}

/// Modal form for creating a deck: a name and a cards file. The upload runs
/// in the background; the form stays open showing progress until the store
/// answers, then closes on success or shows the server's message.
pub struct DeckFormModal {
    open: bool,
    name: String,
    file: Option<PathBuf>,
    feedback: Option<Feedback>,
}

impl DeckFormModal {
    pub fn new() -> Self {
        Self { open: false, name: String::new(), file: None, feedback: None }
    }

    pub fn open_form(&mut self) {
        self.open = true;
        self.name.clear();
        self.file = None;
        self.feedback = None;
    }

    pub fn on_created(&mut self) {
        self.open = false;
        self.feedback = None;
    }

    pub fn on_failed(&mut self, message: String) {
        self.feedback = Some(Feedback::Error(message));
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        lang: Language,
    ) -> Option<DeckFormSubmit> {
        if !self.open {
            return None;
        }

        let mut submit = None;
        let uploading = matches!(self.feedback, Some(Feedback::Uploading));

        let modal = egui::Modal::new(egui::Id::new("deck_form_modal")).show(ctx, |ui| {
            ui.set_width(360.0);
            ui.label(egui::RichText::new(tr(lang, &Text::DeckFormTitle)).size(17.0).strong());
            ui.add_space(10.0);

            ui.label(tr(lang, &Text::DeckFormName));
            ui.add_enabled(
                !uploading,
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text(tr(lang, &Text::DeckFormNamePlaceholder))
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(tr(lang, &Text::DeckFormFile));
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!uploading, egui::Button::new(tr(lang, &Text::DeckFormPickFile)))
                    .clicked()
                {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Cards", &["json", "xlsx", "xls"])
                        .pick_file()
                    {
                        self.file = Some(path);
                    }
                }
                if let Some(path) = &self.file {
                    let file_name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    ui.label(theme.muted(ui.ctx(), &file_name));
                }
            });

            match &self.feedback {
                Some(Feedback::Uploading) => {
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(tr(lang, &Text::DeckFormUploading));
                    });
                }
                Some(Feedback::Error(message)) => {
                    ui.add_space(8.0);
                    ui.colored_label(theme.danger(ui.ctx()), message);
                }
                None => {}
            }

            ui.add_space(14.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ready = !uploading && !self.name.trim().is_empty() && self.file.is_some();
                if ui
                    .add_enabled(ready, egui::Button::new(tr(lang, &Text::DeckFormSubmit)))
                    .clicked()
                {
                    if let Some(path) = self.file.clone() {
                        self.feedback = Some(Feedback::Uploading);
                        submit =
                            Some(DeckFormSubmit { name: self.name.trim().to_string(), path });
                    }
                }
                if !uploading && ui.button(tr(lang, &Text::DeckFormCancel)).clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() && !uploading {
            self.open = false;
        }

        submit
    }
}

impl Default for DeckFormModal {
    fn default() -> Self {
        Self::new()
    }
}
