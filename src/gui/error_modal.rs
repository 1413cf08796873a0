use eframe::egui;

use super::theme::Theme;

/// One-shot error dialog. Screens call `open` with already-translated text;
/// the modal keeps showing it until dismissed.
pub struct ErrorModal {
    message: Option<(String, String)>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn open(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message = Some((title.into(), body.into()));
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some((title, body)) = self.message.clone() else {
            return;
        };

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(380.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(theme.danger(ctx)));
                ui.label(egui::RichText::new(&title).size(17.0).strong());
            });
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&body).size(14.0));
            ui.add_space(14.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.message = None;
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
