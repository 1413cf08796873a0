use eframe::egui::{
    self,
    containers,
};

use super::theme::Theme;
use crate::i18n::{
    tr,
    Language,
    Text,
};

pub enum TopBarAction {
    AddDeck,
    ToggleLanguage,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        lang: Language,
        in_session: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.label(theme.heading(ctx, &tr(lang, &Text::AppTitle)));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(lang.toggled().flag())
                        .on_hover_text(tr(lang, &Text::SwitchLanguage))
                        .clicked()
                    {
                        action = Some(TopBarAction::ToggleLanguage);
                    }
                    // Adding a deck mid-session would orphan the running
                    // review; the list screen is the only entry point.
                    if !in_session && ui.button(tr(lang, &Text::AddDeck)).clicked() {
                        action = Some(TopBarAction::AddDeck);
                    }
                });
            });
        });

        action
    }
}
