use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::{
    core::DeckSummary,
    i18n::{
        tr,
        Language,
        Text,
    },
};

pub enum DeckListAction {
    View(String),
    Delete(String),
}

/// Deck list screen. Deletion is two-step: the row button arms
/// `pending_delete`, a confirmation modal fires the actual request.
#[derive(Default)]
pub struct DeckListView {
    pending_delete: Option<String>,
}

impl DeckListView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        lang: Language,
        decks: &[DeckSummary],
        load_error: Option<&str>,
        loading: bool,
    ) -> Option<DeckListAction> {
        let mut action = None;
        let ctx = ui.ctx().clone();

        ui.add_space(8.0);
        ui.label(egui::RichText::new(tr(lang, &Text::Tagline)).size(14.0));
        ui.add_space(12.0);
        ui.label(theme.heading(&ctx, &tr(lang, &Text::DeckListTitle)));
        ui.add_space(6.0);

        if let Some(message) = load_error {
            ui.colored_label(
                theme.danger(&ctx),
                tr(lang, &Text::DeckLoadError { message: message.to_string() }),
            );
            return None;
        }

        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
            });
            return None;
        }

        if decks.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(tr(lang, &Text::DeckEmptyTitle)).size(16.0).strong(),
                );
                ui.label(theme.muted(&ctx, &tr(lang, &Text::DeckEmptyDescription)));
            });
            return None;
        }

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::remainder())
            .column(Column::auto().at_least(160.0))
            .body(|body| {
                body.rows(56.0, decks.len(), |mut row| {
                    let deck = &decks[row.index()];
                    row.col(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&deck.name).size(15.0).strong());
                            ui.label(theme.muted(&ctx, &Self::detail_line(lang, deck)));
                            if let Some(summary) = Self::progress_line(lang, deck) {
                                ui.label(theme.muted(&ctx, &summary));
                            }
                        });
                    });
                    row.col(|ui| {
                        ui.horizontal_centered(|ui| {
                            if ui.button(tr(lang, &Text::ViewDeck)).clicked() {
                                action = Some(DeckListAction::View(deck.id.clone()));
                            }
                            let delete = egui::Button::new(
                                egui::RichText::new(tr(lang, &Text::DeleteDeck))
                                    .color(theme.danger(&ctx)),
                            );
                            if ui.add(delete).clicked() {
                                self.pending_delete = Some(deck.id.clone());
                            }
                        });
                    });
                });
            });

        if let Some(confirmed) = self.show_delete_confirm(&ctx, theme, lang) {
            action = Some(DeckListAction::Delete(confirmed));
        }

        action
    }

    fn detail_line(lang: Language, deck: &DeckSummary) -> String {
        let mut line = tr(lang, &Text::CardCount { count: deck.card_count });
        if let Some(points) = deck.pending_points.filter(|points| *points > 0) {
            line.push_str(" · ");
            line.push_str(&tr(lang, &Text::PendingPoints { count: points }));
        }
        line
    }

    /// Progress summary shown only when the store sent all three counters.
    fn progress_line(lang: Language, deck: &DeckSummary) -> Option<String> {
        let reviewed = deck.reviewed_count?;
        let success = deck.success_count?;
        let to_review = deck.to_review_count?;
        Some(tr(
            lang,
            &Text::ProgressSummary {
                total: deck.card_count,
                reviewed,
                success,
                to_review,
            },
        ))
    }

    fn show_delete_confirm(
        &mut self,
        ctx: &egui::Context,
        theme: &Theme,
        lang: Language,
    ) -> Option<String> {
        let deck_id = self.pending_delete.clone()?;
        let mut confirmed = None;

        let modal = egui::Modal::new(egui::Id::new("delete_deck_modal")).show(ctx, |ui| {
            ui.set_width(320.0);
            ui.label(tr(lang, &Text::ConfirmDelete));
            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new(tr(lang, &Text::DeleteDeck))
                        .color(theme.danger(ui.ctx())),
                );
                if ui.add(delete).clicked() {
                    confirmed = Some(deck_id.clone());
                    ui.close();
                }
                if ui.button(tr(lang, &Text::DeckFormCancel)).clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.pending_delete = None;
        }
        confirmed
    }
}
